use crate::UserId;

/// The shell's session state: who, if anyone, is currently logged in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    current_user_id: Option<UserId>,
}

impl Session {
    /// A session with nobody logged in.
    pub fn new() -> Self { Session::default() }

    pub fn current_user_id(&self) -> Option<&UserId> {
        self.current_user_id.as_ref()
    }

    pub fn is_authenticated(&self) -> bool { self.current_user_id.is_some() }
}
