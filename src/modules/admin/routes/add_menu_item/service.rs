use super::types::{request, response};
use crate::{
    modules::{
        admin::service::{field_error, parse_price},
        menu::repository::{CreateMenuItemPayload, PLACEHOLDER_IMAGE_URL},
        restaurant,
    },
    types::Context,
    utils::{
        flash::{IncomingFlash, Page},
        validation::non_empty,
    },
};
use std::{borrow::Cow, sync::Arc};
use validator::{Validate, ValidationError, ValidationErrors};

pub async fn form(ctx: Arc<Context>, flash: IncomingFlash) -> response::Response {
    let restaurants = ctx
        .repos
        .restaurants
        .find_many(restaurant::repository::Filters::default())
        .await
        .map_err(|_| response::Error::FailedToCreateMenuItem)?
        .into_iter()
        .map(|restaurant| response::RestaurantChoice {
            id: restaurant.id,
            name: restaurant.name,
        })
        .collect();

    Ok(response::Success::Form(Page::new(
        flash,
        response::View { restaurants },
    )))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut errors = match payload.validate() {
        Ok(_) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    let restaurant = match payload.restaurant_id.trim().parse::<i64>() {
        Ok(id) => ctx
            .repos
            .restaurants
            .find_by_id(id)
            .await
            .map_err(|_| response::Error::FailedToCreateMenuItem)?,
        Err(_) => None,
    };

    if restaurant.is_none() {
        errors.add(
            "restaurant_id",
            ValidationError::new("INVALID_RESTAURANT")
                .with_message(Cow::from("Choose an existing restaurant")),
        );
    }

    let restaurant = match restaurant {
        Some(restaurant) if errors.errors().is_empty() => restaurant,
        _ => {
            tracing::warn!("Failed to validate payload: {errors}");
            return Err(response::Error::FailedToValidate(errors));
        }
    };

    let price = parse_price(&payload.price)
        .map_err(|err| response::Error::FailedToValidate(field_error("price", err)))?;

    let menu_item = ctx
        .repos
        .menu_items
        .create(CreateMenuItemPayload {
            restaurant_id: restaurant.id,
            name: payload.name.trim().to_string(),
            description: non_empty(payload.description).unwrap_or_default(),
            price,
            category: non_empty(payload.category).unwrap_or_default(),
            image_url: non_empty(payload.image_url)
                .unwrap_or_else(|| String::from(PLACEHOLDER_IMAGE_URL)),
            is_available: true,
        })
        .await
        .map_err(|_| response::Error::FailedToCreateMenuItem)?;

    tracing::info!(
        "Created menu item {} for restaurant {}",
        menu_item.id,
        restaurant.id
    );

    Ok(response::Success::MenuItemCreated {
        restaurant_id: restaurant.id,
    })
}
