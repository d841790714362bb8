use super::types::{request, response};
use crate::{
    modules::{
        auth::middleware::Auth,
        cart,
        order::repository::{self, PlaceOrderPayload},
    },
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use std::sync::Arc;
use validator::Validate;

pub async fn view(ctx: Arc<Context>, auth: Auth, flash: IncomingFlash) -> response::Response {
    let cart_items = ctx
        .repos
        .cart
        .find_lines_by_user_id(auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    if cart_items.is_empty() {
        return Err(response::Error::EmptyCart);
    }

    let total = cart::service::total(&cart_items);

    Ok(response::Success::Checkout(Page::new(
        flash,
        response::View { cart_items, total },
    )))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cart_items = ctx
        .repos
        .cart
        .find_lines_by_user_id(payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    if cart_items.is_empty() {
        return Err(response::Error::EmptyCart);
    }

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let order = ctx
        .repos
        .orders
        .place_from_cart(PlaceOrderPayload {
            user_id: payload.auth.user.id,
            delivery_address: payload.body.delivery_address.trim().to_string(),
            phone: payload.body.phone.trim().to_string(),
        })
        .await
        .map_err(|err| match err {
            repository::Error::EmptyCart => response::Error::EmptyCart,
            repository::Error::UnexpectedError => response::Error::FailedToPlaceOrder,
        })?;

    tracing::info!(
        "User {} placed order {} totalling {}",
        order.user_id,
        order.id,
        order.total_amount
    );

    Ok(response::Success::OrderPlaced)
}
