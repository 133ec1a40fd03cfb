use serde::{Deserialize, Serialize};

use roster_core::{User, UserInput};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Body of `POST /users` and `PUT /users/{id}`. Any `id` sent by the client is ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<UserRequest> for UserInput {
    fn from(req: UserRequest) -> Self {
        UserInput::new(req.name, req.email)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

pub const UNAUTHORIZED: &str = "Unauthorized";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

/// JSON object returned for 401 and 500 responses.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
