use async_trait::async_trait;
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::advs::repo_types::{AdvPatch, Advertisement, NewAdv};
use crate::users::repo_types::{NewUser, User, UserPatch};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Entity kind, used to tag lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Advertisement,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity:?} {id} not found")]
    NotFound { entity: Entity, id: i32 },

    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("foreign key constraint violated")]
    ForeignKeyViolation,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db) => Some(db.kind()),
            _ => None,
        };
        match kind {
            Some(ErrorKind::UniqueViolation) => Self::UniqueViolation,
            Some(ErrorKind::ForeignKeyViolation) => Self::ForeignKeyViolation,
            _ => Self::Database(err),
        }
    }
}

/// Persistence seam. Every call is one unit of work: it opens its own
/// session, commits on success and discards the session on any error.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<i32, StoreError>;
    async fn get_user(&self, id: i32) -> Result<User, StoreError>;
    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<(), StoreError>;
    /// Removes the user together with the advertisements it owns.
    async fn delete_user(&self, id: i32) -> Result<(), StoreError>;

    async fn create_adv(&self, adv: NewAdv) -> Result<i32, StoreError>;
    async fn get_adv(&self, id: i32) -> Result<Advertisement, StoreError>;
    async fn update_adv(&self, id: i32, patch: AdvPatch) -> Result<(), StoreError>;
    async fn delete_adv(&self, id: i32) -> Result<(), StoreError>;

    /// Releases pooled connections; called once on shutdown.
    async fn close(&self);
}
