//! A thin application shell: route-based page switching, a header and
//! navigation bar, and login/signup handlers backed by a remote auth API.

#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod api;
mod app;
pub mod endpoints;
mod forms;
mod id;
pub mod routes;
mod session;
#[cfg(test)]
mod test_server;

pub use api::{AuthApi, HttpAuthApi};
pub use app::{App, Frame, Header, LoginError, LoginOutcome, NavigationBar, Page};
pub use forms::{Credentials, SignupPayload};
pub use id::UserId;
pub use routes::Route;
pub use session::Session;

/// The default user agent to use when communicating with the auth API.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
