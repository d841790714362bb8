use super::types::{request, response};
use crate::{modules::order::repository::OrderStatus, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = ctx
        .repos
        .orders
        .find_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    let label = payload.body.status.unwrap_or_default();
    let status = match label.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(err) => {
            tracing::warn!("Ignoring status update of order {}: {}", order.id, err);
            return Ok(response::Success::StatusIgnored);
        }
    };

    ctx.repos
        .orders
        .update_status(order.id, status)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    tracing::info!("Order {} moved to {}", order.id, status.to_string());

    Ok(response::Success::OrderStatusUpdated)
}
