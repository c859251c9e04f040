//! The shell's static route table.
//!
//! Routes are tried in order and the first match wins:
//!
//! | Path             | Match  | Route                    |
//! |------------------|--------|--------------------------|
//! | `/login`         | exact  | [`Route::Login`]         |
//! | `/signup`        | exact  | [`Route::Signup`]        |
//! | `/users`         | prefix | [`Route::Users`]         |
//! | anything else    |        | redirect to [`LOGIN`]    |
//!
//! Matching is case-insensitive, tolerates a trailing slash, and ignores any
//! query string or fragment.

/// Where the login form lives.
pub const LOGIN: &str = "/login";
/// Where the signup form lives.
pub const SIGNUP: &str = "/signup";
/// The root of everything owned by the users container.
pub const USERS: &str = "/users";

/// The outcome of matching a path against the route table.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Signup,
    /// The users container, along with whatever is left of the path for it
    /// to route on (empty, or starting with `/`).
    Users { sub_path: String },
    /// Nothing matched, go somewhere else instead.
    Redirect { to: &'static str },
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        let path = strip_query_and_fragment(path);

        if matches_exactly(path, LOGIN) {
            Route::Login
        } else if matches_exactly(path, SIGNUP) {
            Route::Signup
        } else if let Some(sub_path) = matches_prefix(path, USERS) {
            Route::Users {
                sub_path: sub_path.to_string(),
            }
        } else {
            Route::Redirect { to: LOGIN }
        }
    }

    pub fn is_redirect(&self) -> bool {
        match self {
            Route::Redirect { .. } => true,
            _ => false,
        }
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(|c: char| c == '?' || c == '#') {
        Some(ix) => &path[..ix],
        None => path,
    }
}

fn matches_exactly(path: &str, pattern: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path);
    path.eq_ignore_ascii_case(pattern)
}

/// Match `pattern` against the start of `path`, only accepting the match if it
/// ends on a segment boundary. Returns the unmatched remainder.
fn matches_prefix<'a>(path: &'a str, pattern: &str) -> Option<&'a str> {
    let head = path.get(..pattern.len())?;
    if !head.eq_ignore_ascii_case(pattern) {
        return None;
    }

    let rest = &path[pattern.len()..];
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
