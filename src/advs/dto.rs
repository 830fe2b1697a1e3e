use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::extract::{FieldError, Validate};

use super::repo_types::Advertisement;

#[derive(Debug, Deserialize)]
pub struct CreateAdvRequest {
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct PatchAdvRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for CreateAdvRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

impl Validate for PatchAdvRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AdvView {
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub user_id: Option<i32>,
}

impl From<Advertisement> for AdvView {
    fn from(a: Advertisement) -> Self {
        Self {
            title: a.title,
            description: a.description,
            date: a.creation_time,
            user_id: a.user_id,
        }
    }
}
