use super::types::{request, response};
use crate::{
    modules::{
        admin::service::{field_error, parse_flag},
        restaurant::repository::UpdateRestaurantPayload,
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
    let is_active = match non_empty(body.is_active) {
        Some(raw) => Some(
            parse_flag(&raw)
                .map_err(|err| response::Error::FailedToValidate(field_error("is_active", err)))?,
        ),
        None => None,
    };

    let restaurant = ctx
        .repos
        .restaurants
        .update_by_id(
            payload.id,
            UpdateRestaurantPayload {
                name: non_empty(body.name),
                description: non_empty(body.description),
                address: non_empty(body.address),
                phone: non_empty(body.phone),
                image_url: non_empty(body.image_url),
                is_active,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    tracing::info!("Updated restaurant {}", restaurant.id);

    Ok(response::Success::RestaurantUpdated)
}
