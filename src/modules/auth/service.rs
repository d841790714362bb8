use super::repository::{Session, SessionCreationPayload};
use crate::types::Context;
use axum_extra::extract::cookie::Cookie;
use chrono::{Duration, Utc};
use std::sync::Arc;
use ulid::Ulid;

pub const SESSION_COOKIE: &str = "session";
const SESSION_LIFETIME_DAYS: i64 = 7;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredSession,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: Arc<Context>, user_id: i64) -> Result<Session> {
    ctx.repos
        .sessions
        .create(SessionCreationPayload {
            token: Ulid::new().to_string(),
            user_id,
            expires_at: (Utc::now() + Duration::days(SESSION_LIFETIME_DAYS)).naive_utc(),
        })
        .await
        .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_session_token(ctx: Arc<Context>, token: String) -> Result<Session> {
    let session = ctx
        .repos
        .sessions
        .find_by_token(token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredSession);
    }

    Ok(session)
}

pub async fn destroy_session(ctx: Arc<Context>, token: String) -> Result<()> {
    ctx.repos
        .sessions
        .delete_by_token(token)
        .await
        .map_err(|_| Error::UnexpectedError)
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Only same-site absolute paths are followed after login.
pub fn is_local_path(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing;

    #[tokio::test]
    async fn created_session_verifies() {
        let (ctx, _) = testing::context();

        let session = create_session(ctx.clone(), 42).await.unwrap();
        let verified = verify_session_token(ctx.clone(), session.token.clone())
            .await
            .unwrap();

        assert_eq!(verified.user_id, 42);
        assert_eq!(session.token.len(), 26);
    }

    #[tokio::test]
    async fn destroyed_session_no_longer_verifies() {
        let (ctx, _) = testing::context();
        let session = create_session(ctx.clone(), 1).await.unwrap();

        destroy_session(ctx.clone(), session.token.clone())
            .await
            .unwrap();

        assert!(matches!(
            verify_session_token(ctx, session.token).await,
            Err(Error::InvalidSession)
        ));
    }

    #[test]
    fn only_local_paths_are_followed() {
        assert!(is_local_path("/cart"));
        assert!(is_local_path("/order/3?x=1"));
        assert!(!is_local_path("https://evil.example"));
        assert!(!is_local_path("//evil.example"));
        assert!(!is_local_path("cart"));
    }
}
