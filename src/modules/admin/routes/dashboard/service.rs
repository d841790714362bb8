use super::types::response;
use crate::{
    modules::restaurant,
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

const RECENT_ORDERS_LIMIT: i64 = 10;

pub async fn service(ctx: Arc<Context>, flash: IncomingFlash) -> response::Response {
    let restaurants = ctx
        .repos
        .restaurants
        .find_many(restaurant::repository::Filters::default())
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    let orders = ctx
        .repos
        .orders
        .find_many_summaries(Some(RECENT_ORDERS_LIMIT))
        .await
        .map_err(|_| response::Error::FailedToFetchDashboard)?;

    Ok(response::Success::Dashboard(Page::new(
        flash,
        response::View {
            restaurants,
            orders,
        },
    )))
}
