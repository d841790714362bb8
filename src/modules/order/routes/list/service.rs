use super::types::response;
use crate::{
    modules::auth::middleware::Auth,
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, flash: IncomingFlash) -> response::Response {
    ctx.repos
        .orders
        .find_summaries_by_user_id(auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(|orders| response::Success::Orders(Page::new(flash, response::View { orders })))
}
