use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database. Reaches clients only through `PublicUser`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub name: String,               // display name
    pub email: String,              // lowercased, unique
    pub password_hash: String,      // Argon2 hash
    pub role: String,
    pub created_at: OffsetDateTime, // creation timestamp
}
