use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn create(&self, payload: CreateUserPayload) -> Result<User>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn find_by_username(&self, username: String) -> Result<Option<User>>;
    async fn find_by_email(&self, email: String) -> Result<Option<User>>;
}

pub fn is_admin(user: &User) -> bool {
    user.is_admin
}

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        sqlx::query_as::<_, User>(
            "
            INSERT INTO users (username, email, password_hash, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(payload.username)
        .bind(payload.email)
        .bind(payload.password_hash)
        .bind(payload.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occured while creating a user account: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_by_username(&self, username: String) -> Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(&username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while fetching user with username {}: {}",
                    username,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn find_by_email(&self, email: String) -> Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred in find_by_email: {}", err);
                Error::UnexpectedError
            })
    }
}
