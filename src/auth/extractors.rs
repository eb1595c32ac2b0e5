use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{auth::jwt::JwtKeys, auth::repo::User, error::ApiError, state::AppState};

/// Authenticated caller, resolved from the bearer token to a live user row.
/// This identity is the only source of ownership downstream; owner ids in
/// request bodies are never trusted.
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthenticated("missing Authorization header".into()))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthenticated("invalid auth scheme".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            ApiError::Unauthenticated("invalid or expired token".into())
        })?;

        // A token for a deleted or never-existing user fails the same way as
        // a bad token, so callers cannot probe for user names.
        let user = User::find_by_name(&state.db, &claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(sub = %claims.sub, "token subject has no user row");
                ApiError::Unauthenticated("invalid or expired token".into())
            })?;

        Ok(CurrentUser {
            id: user.id,
            name: user.name,
        })
    }
}
