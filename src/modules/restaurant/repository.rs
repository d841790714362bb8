use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x300?text=Restaurant";

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub image_url: String,
    pub is_active: bool,
}

#[derive(Default)]
pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Default)]
pub struct Filters {
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn create(&self, payload: CreateRestaurantPayload) -> Result<Restaurant>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>>;
    async fn find_many(&self, filters: Filters) -> Result<Vec<Restaurant>>;
    async fn count(&self) -> Result<i64>;
    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Option<Restaurant>>;
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
    async fn create(&self, payload: CreateRestaurantPayload) -> Result<Restaurant> {
        sqlx::query_as::<_, Restaurant>(
            "
            INSERT INTO restaurants (name, description, address, phone, image_url, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            ",
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.address)
        .bind(payload.phone)
        .bind(payload.image_url)
        .bind(payload.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a restaurant: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch restaurant {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_many(&self, filters: Filters) -> Result<Vec<Restaurant>> {
        sqlx::query_as::<_, Restaurant>(
            "
            SELECT * FROM restaurants
            WHERE $1::BOOLEAN IS NULL OR is_active = $1
            ORDER BY id
            ",
        )
        .bind(filters.is_active)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many restaurants: {}", err);
            Error::UnexpectedError
        })
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM restaurants")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to count restaurants: {}", err);
                Error::UnexpectedError
            })
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>(
            "
            UPDATE restaurants SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                image_url = COALESCE($5, image_url),
                is_active = COALESCE($6, is_active)
            WHERE
                id = $7
            RETURNING *
            ",
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.address)
        .bind(payload.phone)
        .bind(payload.image_url)
        .bind(payload.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update restaurant by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }
}
