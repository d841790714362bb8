use super::types::response;
use crate::{
    modules::restaurant,
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, flash: IncomingFlash) -> response::Response {
    ctx.repos
        .restaurants
        .find_many(restaurant::repository::Filters::default())
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)
        .map(|restaurants| {
            response::Success::Restaurants(Page::new(flash, response::View { restaurants }))
        })
}
