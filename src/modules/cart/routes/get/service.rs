use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart},
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, flash: IncomingFlash) -> response::Response {
    let cart_items = ctx
        .repos
        .cart
        .find_lines_by_user_id(auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;
    let total = cart::service::total(&cart_items);

    Ok(response::Success::Cart(Page::new(
        flash,
        response::View { cart_items, total },
    )))
}
