use sqlx::PgConnection;

use crate::advs::repo_types::{Advertisement, NewAdv};
use crate::store::{Entity, StoreError};

/// Point query by primary key.
pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Advertisement, StoreError> {
    sqlx::query_as::<_, Advertisement>(
        r#"
        SELECT id, title, description, creation_time, user_id
        FROM advertisements
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StoreError::NotFound {
        entity: Entity::Advertisement,
        id,
    })
}

pub async fn insert(conn: &mut PgConnection, adv: &NewAdv) -> Result<i32, StoreError> {
    let (id,) = sqlx::query_as::<_, (i32,)>(
        r#"
        INSERT INTO advertisements (title, description, user_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&adv.title)
    .bind(&adv.description)
    .bind(adv.user_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

pub async fn update(conn: &mut PgConnection, adv: &Advertisement) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        UPDATE advertisements
        SET title = $2, description = $3
        WHERE id = $1
        "#,
    )
    .bind(adv.id)
    .bind(&adv.title)
    .bind(&adv.description)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM advertisements WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
