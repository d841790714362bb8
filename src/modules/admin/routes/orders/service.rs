use super::types::response;
use crate::{
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, flash: IncomingFlash) -> response::Response {
    ctx.repos
        .orders
        .find_many_summaries(None)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(|orders| response::Success::Orders(Page::new(flash, response::View { orders })))
}
