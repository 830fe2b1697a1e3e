use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String, // Argon2 PHC string
}

/// Row to insert; `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Fields to overwrite on an existing user. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}
