use super::types::{request, response};
use crate::{
    modules::restaurant::repository::{CreateRestaurantPayload, PLACEHOLDER_IMAGE_URL},
    types::Context,
    utils::validation::non_empty,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = ctx
        .repos
        .restaurants
        .create(CreateRestaurantPayload {
            name: payload.name.trim().to_string(),
            description: non_empty(payload.description).unwrap_or_default(),
            address: non_empty(payload.address).unwrap_or_default(),
            phone: non_empty(payload.phone).unwrap_or_default(),
            image_url: non_empty(payload.image_url)
                .unwrap_or_else(|| String::from(PLACEHOLDER_IMAGE_URL)),
            is_active: true,
        })
        .await
        .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    tracing::info!("Created restaurant {} ({})", restaurant.id, restaurant.name);

    Ok(response::Success::RestaurantCreated)
}
