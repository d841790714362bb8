use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Food";

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub image_url: String,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
}

pub struct CreateMenuItemPayload {
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub image_url: String,
    pub is_available: bool,
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Default)]
pub struct Filters {
    pub is_available: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn create(&self, payload: CreateMenuItemPayload) -> Result<MenuItem>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>>;
    async fn find_many_by_restaurant_id(
        &self,
        restaurant_id: i64,
        filters: Filters,
    ) -> Result<Vec<MenuItem>>;
    async fn update_by_id(&self, id: i64, payload: UpdateMenuItemPayload)
        -> Result<Option<MenuItem>>;
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
    async fn create(&self, payload: CreateMenuItemPayload) -> Result<MenuItem> {
        sqlx::query_as::<_, MenuItem>(
            "
            INSERT INTO menu_items (
                restaurant_id,
                name,
                description,
                price,
                category,
                image_url,
                is_available
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(payload.restaurant_id)
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.price)
        .bind(payload.category)
        .bind(payload.image_url)
        .bind(payload.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a menu item: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch menu item {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_many_by_restaurant_id(
        &self,
        restaurant_id: i64,
        filters: Filters,
    ) -> Result<Vec<MenuItem>> {
        sqlx::query_as::<_, MenuItem>(
            "
            SELECT * FROM menu_items
            WHERE
                restaurant_id = $1
                AND ($2::BOOLEAN IS NULL OR is_available = $2)
            ORDER BY id
            ",
        )
        .bind(restaurant_id)
        .bind(filters.is_available)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menu items of restaurant {}: {}",
                restaurant_id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateMenuItemPayload,
    ) -> Result<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>(
            "
            UPDATE menu_items SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                price = COALESCE($3, price),
                category = COALESCE($4, category),
                image_url = COALESCE($5, image_url),
                is_available = COALESCE($6, is_available)
            WHERE
                id = $7
            RETURNING *
            ",
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.price)
        .bind(payload.category)
        .bind(payload.image_url)
        .bind(payload.is_available)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update menu item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }
}
