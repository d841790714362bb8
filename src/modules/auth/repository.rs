use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub token: String,
    pub user_id: i64,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub struct SessionCreationPayload {
    pub token: String,
    pub user_id: i64,
    pub expires_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, payload: SessionCreationPayload) -> Result<Session>;
    async fn find_by_token(&self, token: String) -> Result<Option<Session>>;
    async fn delete_by_token(&self, token: String) -> Result<()>;
}

pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, payload: SessionCreationPayload) -> Result<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(payload.token)
        .bind(payload.user_id)
        .bind(payload.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while creating a new session for user with id {}: {}",
                payload.user_id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn find_by_token(&self, token: String) -> Result<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching session: {}", err);
                Error::UnexpectedError
            })
    }

    async fn delete_by_token(&self, token: String) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("Error occurred while deleting session: {}", err);
                Error::UnexpectedError
            })
    }
}
