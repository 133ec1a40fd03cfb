use serde::{Deserialize, Serialize};

/// A user record owned by the [`UserStore`](crate::store::UserStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store, never changed afterwards.
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Client-supplied fields for creating or replacing a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
