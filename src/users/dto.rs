use serde::{Deserialize, Serialize};

use crate::extract::{FieldError, Validate};

// matches users.username VARCHAR(60)
pub const USERNAME_MAX_CHARS: usize = 60;

/// Request body for user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Request body for a partial user update; absent and `null` fields are skipped.
#[derive(Debug, Default, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn check_username(username: &str) -> Result<(), FieldError> {
    let chars = username.chars().count();
    if chars == 0 || chars > USERNAME_MAX_CHARS {
        return Err(FieldError {
            field: "username",
            message: format!("must be 1 to {USERNAME_MAX_CHARS} characters"),
        });
    }
    Ok(())
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), FieldError> {
        check_username(&self.username)
    }
}

impl Validate for PatchUserRequest {
    fn validate(&self) -> Result<(), FieldError> {
        match &self.username {
            Some(username) => check_username(username),
            None => Ok(()),
        }
    }
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id_user: i32,
    pub username: String,
}
