use super::types::{request, response};
use crate::{modules::menu, types::Context, utils::flash::Page};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = ctx
        .repos
        .restaurants
        .find_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchMenu)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let menu_items = ctx
        .repos
        .menu_items
        .find_many_by_restaurant_id(restaurant.id, menu::repository::Filters::default())
        .await
        .map_err(|_| response::Error::FailedToFetchMenu)?;

    Ok(response::Success::Menu(Page::new(
        payload.flash,
        response::View {
            restaurant,
            menu_items,
        },
    )))
}
