use sqlx::FromRow;
use time::OffsetDateTime;

/// Advertisement record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Advertisement {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_time: OffsetDateTime, // set by the database on insert
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewAdv {
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

/// Fields to overwrite on an existing advertisement.
#[derive(Debug, Clone, Default)]
pub struct AdvPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl AdvPatch {
    pub fn apply(self, adv: &mut Advertisement) {
        if let Some(title) = self.title {
            adv.title = title;
        }
        if let Some(description) = self.description {
            adv.description = description;
        }
    }
}
