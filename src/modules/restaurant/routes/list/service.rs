use super::types::response;
use crate::{
    modules::restaurant::repository,
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, flash: IncomingFlash) -> response::Response {
    let restaurants = ctx
        .repos
        .restaurants
        .find_many(repository::Filters {
            is_active: Some(true),
        })
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)?;

    Ok(response::Success::Restaurants(Page::new(
        flash,
        response::View { restaurants },
    )))
}
