use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use super::claims::{Claims, Role, TokenKind};
use super::jwt::JwtKeys;
use crate::error::AppError;

/// Extracts and validates a user access token, returning the user ID.
pub struct AuthUser(pub Uuid);

/// Extracts and validates an admin access token, returning the admin ID.
pub struct AdminUser(pub Uuid);

fn access_claims(parts: &Parts, keys: &JwtKeys) -> Result<Claims, AppError> {
    let auth = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    // Expect "Bearer <token>"
    let token = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header"))?;

    let claims = keys.verify(token.trim()).map_err(|_| {
        warn!("invalid or expired token");
        AppError::unauthorized("Invalid or expired token")
    })?;

    if claims.kind != TokenKind::Access {
        return Err(AppError::unauthorized("Access token required"));
    }
    Ok(claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let claims = access_claims(parts, &keys)?;
        if claims.role != Role::User {
            return Err(AppError::forbidden("User account required"));
        }
        Ok(AuthUser(claims.sub))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let claims = access_claims(parts, &keys)?;
        if claims.role != Role::Admin {
            warn!(subject = %claims.sub, "non-admin token on admin route");
            return Err(AppError::forbidden("Admin access required"));
        }
        Ok(AdminUser(claims.sub))
    }
}
