use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::debug;

use super::{Store, StoreError};
use crate::advs::{
    repo as advs_repo,
    repo_types::{AdvPatch, Advertisement, NewAdv},
};
use crate::config::AppConfig;
use crate::users::{
    repo as users_repo,
    repo_types::{NewUser, User, UserPatch},
};

/// `Store` over a Postgres pool. Each operation checks out a connection
/// and, for writes, runs in its own transaction.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self::new(db))
    }

    /// Creates the schema if it is not there yet.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<i32, StoreError> {
        let mut tx = self.db.begin().await?;
        let id = users_repo::insert(&mut *tx, &user).await?;
        tx.commit().await?;
        debug!(user_id = id, "user row inserted");
        Ok(id)
    }

    async fn get_user(&self, id: i32) -> Result<User, StoreError> {
        let mut conn = self.db.acquire().await?;
        users_repo::find_by_id(&mut *conn, id).await
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        let mut user = users_repo::find_by_id(&mut *tx, id).await?;
        patch.apply(&mut user);
        users_repo::update(&mut *tx, &user).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        users_repo::find_by_id(&mut *tx, id).await?;
        users_repo::delete(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn create_adv(&self, adv: NewAdv) -> Result<i32, StoreError> {
        let mut tx = self.db.begin().await?;
        let id = advs_repo::insert(&mut *tx, &adv).await?;
        tx.commit().await?;
        debug!(adv_id = id, "advertisement row inserted");
        Ok(id)
    }

    async fn get_adv(&self, id: i32) -> Result<Advertisement, StoreError> {
        let mut conn = self.db.acquire().await?;
        advs_repo::find_by_id(&mut *conn, id).await
    }

    async fn update_adv(&self, id: i32, patch: AdvPatch) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        let mut adv = advs_repo::find_by_id(&mut *tx, id).await?;
        patch.apply(&mut adv);
        advs_repo::update(&mut *tx, &adv).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete_adv(&self, id: i32) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        advs_repo::find_by_id(&mut *tx, id).await?;
        advs_repo::delete(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
