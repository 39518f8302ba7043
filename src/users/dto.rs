use serde::{Deserialize, Serialize};

/// Request body for creating a user.
///
/// `email` is optional so that a missing field reaches the handler and gets
/// the same response as an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response returned after a successful insert.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: i64,
    pub email: String,
}

/// JSON error body shared by the 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
