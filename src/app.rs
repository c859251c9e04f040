//! The application shell.

use crate::{
    endpoints::EndpointError,
    routes::Route,
    AuthApi, Credentials, Session, SignupPayload, UserId,
};
use serde_json::Value;

/// The page currently being shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// The login form. Submissions go to [`App::login_user()`].
    Login,
    /// The signup form. Submissions go to [`App::signup_user()`].
    Signup,
    /// The users container, which does its own routing on `sub_path`.
    Users { sub_path: String },
}

/// The header shown above every page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Header;

/// The navigation bar, which gets a read-only view of the session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationBar<'a> {
    pub current_user_id: Option<&'a UserId>,
}

impl<'a> NavigationBar<'a> {
    pub fn is_authenticated(&self) -> bool { self.current_user_id.is_some() }
}

/// Everything the shell puts on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame<'a> {
    pub header: Header,
    pub navigation: NavigationBar<'a>,
    pub page: &'a Page,
}

/// What came back from a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub response: Value,
    pub user_info: Value,
}

/// Possible errors that may be returned by [`App::login_user()`].
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("The login request failed")]
    Login(#[source] EndpointError),
    #[error("Unable to fetch the user's profile")]
    Profile(#[source] EndpointError),
}

/// The top-level shell. It owns the session, knows where the user is, and
/// handles submissions from the login and signup forms.
#[derive(Debug)]
pub struct App<A> {
    api: A,
    session: Session,
    location: String,
    page: Page,
}

impl<A: AuthApi> App<A> {
    /// Start the shell at the site root.
    pub fn new(api: A) -> Self { App::with_location(api, "/") }

    /// Start the shell at a particular path, as if the user had opened it
    /// directly.
    pub fn with_location(api: A, path: &str) -> Self {
        let mut app = App {
            api,
            session: Session::new(),
            location: String::new(),
            page: Page::Login,
        };
        app.navigate(path);
        app
    }

    pub fn api(&self) -> &A { &self.api }

    pub fn session(&self) -> &Session { &self.session }

    /// The path the shell is currently showing, after any redirects.
    pub fn location(&self) -> &str { &self.location }

    pub fn page(&self) -> &Page { &self.page }

    /// Switch to whichever page `path` routes to, following a redirect if
    /// nothing matches.
    pub fn navigate(&mut self, path: &str) -> &Page {
        let (location, page) = match Route::resolve(path) {
            Route::Login => (path, Page::Login),
            Route::Signup => (path, Page::Signup),
            Route::Users { sub_path } => (path, Page::Users { sub_path }),
            // the only redirect target is the login form
            Route::Redirect { to } => {
                log::warn!("No route for {:?}, redirecting to {}", path, to);
                (to, Page::Login)
            },
        };

        log::debug!("Showing {:?} for {}", page, location);

        self.location = location.to_string();
        self.page = page;
        &self.page
    }

    pub fn render(&self) -> Frame<'_> {
        Frame {
            header: Header,
            navigation: NavigationBar {
                current_user_id: self.session.current_user_id(),
            },
            page: &self.page,
        }
    }

    /// Handle a login form submission.
    ///
    /// This logs in, then fetches the user's profile and logs both results.
    /// The profile is only requested once the login call succeeds. The
    /// session is left as-is.
    pub async fn login_user(
        &self,
        credentials: Credentials,
    ) -> Result<LoginOutcome, LoginError> {
        let response = self.api.login(&credentials).await.map_err(|e| {
            log::error!("Login failed: {}", e);
            LoginError::Login(e)
        })?;

        let user_info = self.api.profile().await.map_err(|e| {
            log::error!("Unable to fetch the profile: {}", e);
            LoginError::Profile(e)
        })?;

        log::info!("{} {}", response, user_info);

        Ok(LoginOutcome {
            response,
            user_info,
        })
    }

    /// Handle a signup form submission. Nothing is sent anywhere.
    pub fn signup_user(&self, payload: &SignupPayload) {
        log::info!("Signing Up User: {}", payload);
    }
}
