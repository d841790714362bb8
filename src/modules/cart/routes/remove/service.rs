use super::types::{request, response};
use crate::{modules::cart, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cart_item = cart::service::find_owned(&ctx, payload.auth.user.id, payload.cart_item_id)
        .await
        .map_err(|err| match err {
            cart::service::Error::CartItemNotFound => response::Error::CartItemNotFound,
            cart::service::Error::NotOwner => response::Error::NotOwner,
            cart::service::Error::UnexpectedError => response::Error::FailedToRemoveFromCart,
        })?;

    ctx.repos
        .cart
        .delete_by_id(cart_item.id)
        .await
        .map_err(|_| response::Error::FailedToRemoveFromCart)?;

    Ok(response::Success::RemovedFromCart)
}
