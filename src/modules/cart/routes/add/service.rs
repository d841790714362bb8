use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let menu_item = ctx
        .repos
        .menu_items
        .find_by_id(payload.menu_item_id)
        .await
        .map_err(|_| response::Error::FailedToAddToCart)?
        .ok_or(response::Error::MenuItemNotFound)?;

    if !menu_item.is_available {
        return Err(response::Error::MenuItemNotAvailable {
            restaurant_id: menu_item.restaurant_id,
        });
    }

    ctx.repos
        .cart
        .increment(payload.auth.user.id, menu_item.id)
        .await
        .map_err(|_| response::Error::FailedToAddToCart)?;

    Ok(response::Success::AddedToCart {
        name: menu_item.name,
        restaurant_id: menu_item.restaurant_id,
    })
}
