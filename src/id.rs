use std::fmt::{self, Display, Formatter};

/// Identifies an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: Into<String>>(id: S) -> Self { UserId(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
