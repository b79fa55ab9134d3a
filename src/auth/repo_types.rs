use serde::Serialize;
use sqlx::FromRow;

/// User record in the credential store.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,                      // auto-assigned rowid
    pub name: String,                 // display name, not unique
    pub email: String,                // unique lookup key
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,        // Argon2 PHC string, not exposed
}
