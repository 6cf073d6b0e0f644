//! The single active authenticated identity.

/// The current signed-in user.
///
/// A session is fully present or fully absent; callers hold it as
/// `Option<Session>` and there is never a partially-populated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
