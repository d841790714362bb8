use super::service::OrderDraft;
use crate::modules::cart::repository::{CartLine, CART_LINES_BY_USER_ID};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("pending"),
            OrderStatus::Confirmed => String::from("confirmed"),
            OrderStatus::Preparing => String::from("preparing"),
            OrderStatus::OutForDelivery => String::from("out_for_delivery"),
            OrderStatus::Delivered => String::from("delivered"),
            OrderStatus::Cancelled => String::from("cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: BigDecimal,
    pub delivery_address: String,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub order: Order,
    pub total_items: i64,
}

/// An order item together with the name of the menu item it was bought as.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
    pub menu_item_name: String,
}

impl OrderLine {
    pub fn subtotal(&self) -> BigDecimal {
        self.price.clone() * BigDecimal::from(self.quantity)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FullOrder {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderLine>,
}

pub struct PlaceOrderPayload {
    pub user_id: i64,
    pub delivery_address: String,
    pub phone: String,
}

#[derive(Debug)]
pub enum Error {
    EmptyCart,
    UnexpectedError,
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// Turns the user's cart into a pending order and empties the cart, atomically.
    async fn place_from_cart(&self, payload: PlaceOrderPayload) -> Result<Order>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;
    async fn find_lines_by_order_id(&self, order_id: i64) -> Result<Vec<OrderLine>>;
    /// Newest first.
    async fn find_summaries_by_user_id(&self, user_id: i64) -> Result<Vec<OrderSummary>>;
    /// Newest first, across all users.
    async fn find_many_summaries(&self, limit: Option<i64>) -> Result<Vec<OrderSummary>>;
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Option<Order>>;

    async fn find_full_by_id(&self, id: i64) -> Result<Option<FullOrder>> {
        let order = match self.find_by_id(id).await? {
            Some(order) => order,
            None => return Ok(None),
        };
        let items = self.find_lines_by_order_id(order.id).await?;

        Ok(Some(FullOrder { order, items }))
    }
}

pub fn is_owner(order: &Order, user_id: i64) -> bool {
    order.user_id == user_id
}

const ORDER_SUMMARIES: &str = "
    SELECT
        orders.*,
        COALESCE(SUM(order_items.quantity), 0)::BIGINT AS total_items
    FROM
        orders
    LEFT JOIN order_items ON order_items.order_id = orders.id
";

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unexpected(action: &'static str) -> impl Fn(sqlx::Error) -> Error {
    move |err| {
        tracing::error!("Error occurred while trying to {}: {}", action, err);
        Error::UnexpectedError
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn place_from_cart(&self, payload: PlaceOrderPayload) -> Result<Order> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(unexpected("start a checkout transaction"))?;

        let locked_lines_query = format!("{} FOR UPDATE OF cart_items", CART_LINES_BY_USER_ID);
        let lines = sqlx::query_as::<_, CartLine>(&locked_lines_query)
            .bind(payload.user_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(unexpected("lock cart lines for checkout"))?;

        if lines.is_empty() {
            return Err(Error::EmptyCart);
        }

        let draft = OrderDraft::from_cart_lines(&lines);

        let order = sqlx::query_as::<_, Order>(
            "
            INSERT INTO orders (user_id, total_amount, delivery_address, phone, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            ",
        )
        .bind(payload.user_id)
        .bind(draft.total_amount)
        .bind(payload.delivery_address)
        .bind(payload.phone)
        .bind(OrderStatus::Pending.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(unexpected("create an order"))?;

        for item in draft.items {
            sqlx::query(
                "
                INSERT INTO order_items (order_id, menu_item_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(order.id)
            .bind(item.menu_item_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(unexpected("create an order item"))?;
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND id = ANY($2)")
            .bind(payload.user_id)
            .bind(draft.cart_item_ids)
            .execute(&mut *tx)
            .await
            .map_err(unexpected("empty the cart after checkout"))?;

        tx.commit()
            .await
            .map_err(unexpected("commit the checkout transaction"))?;

        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected("fetch order by id"))
    }

    async fn find_lines_by_order_id(&self, order_id: i64) -> Result<Vec<OrderLine>> {
        sqlx::query_as::<_, OrderLine>(
            "
            SELECT
                order_items.id,
                order_items.order_id,
                order_items.menu_item_id,
                order_items.quantity,
                order_items.price,
                menu_items.name AS menu_item_name
            FROM
                order_items
            INNER JOIN menu_items ON menu_items.id = order_items.menu_item_id
            WHERE
                order_items.order_id = $1
            ORDER BY
                order_items.id
            ",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected("fetch order items"))
    }

    async fn find_summaries_by_user_id(&self, user_id: i64) -> Result<Vec<OrderSummary>> {
        let query = format!(
            "{} WHERE orders.user_id = $1 GROUP BY orders.id ORDER BY orders.created_at DESC, orders.id DESC",
            ORDER_SUMMARIES
        );

        sqlx::query_as::<_, OrderSummary>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected("fetch orders by owner"))
    }

    async fn find_many_summaries(&self, limit: Option<i64>) -> Result<Vec<OrderSummary>> {
        let query = format!(
            "{} GROUP BY orders.id ORDER BY orders.created_at DESC, orders.id DESC LIMIT $1",
            ORDER_SUMMARIES
        );

        sqlx::query_as::<_, OrderSummary>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected("fetch many orders"))
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Option<Order>> {
        sqlx::query_as::<_, Order>(
            "
            UPDATE orders SET
                status = $1,
                updated_at = NOW()
            WHERE
                id = $2
            RETURNING *
            ",
        )
        .bind(status.to_string())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected("update order status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_status() {
        for label in [
            "pending",
            "confirmed",
            "preparing",
            "out_for_delivery",
            "delivered",
            "cancelled",
        ] {
            let status = label.parse::<OrderStatus>().unwrap();
            assert_eq!(status.to_string(), label);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
    }
}
