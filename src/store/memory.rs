use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use super::{Entity, Store, StoreError};
use crate::advs::repo_types::{AdvPatch, Advertisement, NewAdv};
use crate::users::repo_types::{NewUser, User, UserPatch};

/// In-process stand-in for Postgres with the same constraints:
/// unique usernames, FK from advertisements to users, cascade on delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    advs: BTreeMap<i32, Advertisement>,
    user_seq: i32,
    adv_seq: i32,
}

impl Tables {
    fn username_taken(&self, username: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && Some(u.id) != except)
    }
}

impl MemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.inner.lock().expect("memory store lock poisoned")
    }

    pub fn user_count(&self) -> usize {
        self.tables().users.len()
    }

    pub fn stored_password(&self, id: i32) -> Option<String> {
        self.tables().users.get(&id).map(|u| u.password.clone())
    }
}

fn user_not_found(id: i32) -> StoreError {
    StoreError::NotFound {
        entity: Entity::User,
        id,
    }
}

fn adv_not_found(id: i32) -> StoreError {
    StoreError::NotFound {
        entity: Entity::Advertisement,
        id,
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<i32, StoreError> {
        let mut t = self.tables();
        if t.username_taken(&user.username, None) {
            return Err(StoreError::UniqueViolation);
        }
        t.user_seq += 1;
        let id = t.user_seq;
        t.users.insert(
            id,
            User {
                id,
                username: user.username,
                password: user.password,
            },
        );
        Ok(id)
    }

    async fn get_user(&self, id: i32) -> Result<User, StoreError> {
        self.tables()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| user_not_found(id))
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> Result<(), StoreError> {
        let mut t = self.tables();
        let mut user = t.users.get(&id).cloned().ok_or_else(|| user_not_found(id))?;
        patch.apply(&mut user);
        if t.username_taken(&user.username, Some(id)) {
            return Err(StoreError::UniqueViolation);
        }
        t.users.insert(id, user);
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        let mut t = self.tables();
        t.users.remove(&id).ok_or_else(|| user_not_found(id))?;
        t.advs.retain(|_, a| a.user_id != Some(id));
        Ok(())
    }

    async fn create_adv(&self, adv: NewAdv) -> Result<i32, StoreError> {
        let mut t = self.tables();
        if !t.users.contains_key(&adv.user_id) {
            return Err(StoreError::ForeignKeyViolation);
        }
        t.adv_seq += 1;
        let id = t.adv_seq;
        t.advs.insert(
            id,
            Advertisement {
                id,
                title: adv.title,
                description: adv.description,
                creation_time: OffsetDateTime::now_utc(),
                user_id: Some(adv.user_id),
            },
        );
        Ok(id)
    }

    async fn get_adv(&self, id: i32) -> Result<Advertisement, StoreError> {
        self.tables()
            .advs
            .get(&id)
            .cloned()
            .ok_or_else(|| adv_not_found(id))
    }

    async fn update_adv(&self, id: i32, patch: AdvPatch) -> Result<(), StoreError> {
        let mut t = self.tables();
        let adv = t.advs.get_mut(&id).ok_or_else(|| adv_not_found(id))?;
        patch.apply(adv);
        Ok(())
    }

    async fn delete_adv(&self, id: i32) -> Result<(), StoreError> {
        self.tables()
            .advs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| adv_not_found(id))
    }

    async fn close(&self) {}
}
