use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

/// A cart item joined with the live state of its menu item.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub id: i64,
    pub user_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub restaurant_id: i64,
    pub is_available: bool,
}

impl CartLine {
    pub fn subtotal(&self) -> BigDecimal {
        self.price.clone() * BigDecimal::from(self.quantity)
    }
}

pub(crate) const CART_LINES_BY_USER_ID: &str = "
    SELECT
        cart_items.id,
        cart_items.user_id,
        cart_items.menu_item_id,
        cart_items.quantity,
        menu_items.name,
        menu_items.price,
        menu_items.image_url,
        menu_items.restaurant_id,
        menu_items.is_available
    FROM
        cart_items
    INNER JOIN menu_items ON menu_items.id = cart_items.menu_item_id
    WHERE
        cart_items.user_id = $1
    ORDER BY
        cart_items.id
";

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// Adds one unit of the menu item to the user's cart, creating the line if needed.
    async fn increment(&self, user_id: i64, menu_item_id: i64) -> Result<CartItem>;
    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>>;
    async fn find_lines_by_user_id(&self, user_id: i64) -> Result<Vec<CartLine>>;
    async fn set_quantity(&self, id: i64, quantity: i32) -> Result<()>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

pub fn is_owner(cart_item: &CartItem, user_id: i64) -> bool {
    cart_item.user_id == user_id
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
    async fn increment(&self, user_id: i64, menu_item_id: i64) -> Result<CartItem> {
        sqlx::query_as::<_, CartItem>(
            "
            INSERT INTO cart_items (user_id, menu_item_id, quantity)
            VALUES ($1, $2, 1)
            ON CONFLICT (user_id, menu_item_id)
            DO UPDATE SET quantity = cart_items.quantity + 1
            RETURNING *
            ",
        )
        .bind(user_id)
        .bind(menu_item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to add menu item {} to cart of user {}: {}",
                menu_item_id,
                user_id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>> {
        sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch cart item {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_lines_by_user_id(&self, user_id: i64) -> Result<Vec<CartLine>> {
        sqlx::query_as::<_, CartLine>(CART_LINES_BY_USER_ID)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to fetch cart by owner id {}: {}",
                    user_id,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn set_quantity(&self, id: i64, quantity: i32) -> Result<()> {
        sqlx::query("UPDATE cart_items SET quantity = $1 WHERE id = $2")
            .bind(quantity)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to update cart item by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete cart item by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
