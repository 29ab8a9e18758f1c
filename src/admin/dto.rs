use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::Admin;
use crate::auth::dto::TokenPair;

#[derive(Debug, Deserialize)]
pub struct AdminRegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub signup_key: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct PublicAdmin {
    pub id: Uuid,
    pub username: String,
    pub role: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Admin> for PublicAdmin {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            username: a.username,
            role: "admin",
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub admin: PublicAdmin,
}
