use sqlx::PgConnection;

use crate::store::{Entity, StoreError};
use crate::users::repo_types::{NewUser, User};

/// Point query by primary key.
pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StoreError::NotFound {
        entity: Entity::User,
        id,
    })
}

pub async fn insert(conn: &mut PgConnection, user: &NewUser) -> Result<i32, StoreError> {
    let (id,) = sqlx::query_as::<_, (i32,)>(
        r#"
        INSERT INTO users (username, password)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

pub async fn update(conn: &mut PgConnection, user: &User) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        UPDATE users
        SET username = $2, password = $3
        WHERE id = $1
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
