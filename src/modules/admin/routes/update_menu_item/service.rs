use super::types::{request, response};
use crate::{
    modules::{
        admin::service::{field_error, parse_flag, parse_price},
        menu::repository::UpdateMenuItemPayload,
    },
    types::Context,
    utils::validation::non_empty,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let body = payload.body;
    let price = match non_empty(body.price) {
        Some(raw) => Some(
            parse_price(&raw)
                .map_err(|err| response::Error::FailedToValidate(field_error("price", err)))?,
        ),
        None => None,
    };
    let is_available = match non_empty(body.is_available) {
        Some(raw) => Some(
            parse_flag(&raw)
                .map_err(|err| response::Error::FailedToValidate(field_error("is_available", err)))?,
        ),
        None => None,
    };

    let menu_item = ctx
        .repos
        .menu_items
        .update_by_id(
            payload.id,
            UpdateMenuItemPayload {
                name: non_empty(body.name),
                description: non_empty(body.description),
                price,
                category: non_empty(body.category),
                image_url: non_empty(body.image_url),
                is_available,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)?;

    tracing::info!("Updated menu item {}", menu_item.id);

    Ok(response::Success::MenuItemUpdated {
        restaurant_id: menu_item.restaurant_id,
    })
}
