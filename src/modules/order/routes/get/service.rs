use super::types::{request, response};
use crate::{
    modules::{order::repository, user},
    types::Context,
    utils::flash::Page,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = ctx
        .repos
        .orders
        .find_full_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if !repository::is_owner(&order.order, payload.auth.user.id)
        && !user::repository::is_admin(&payload.auth.user)
    {
        tracing::warn!(
            "User {} tried to view order {} of user {}",
            payload.auth.user.id,
            order.order.id,
            order.order.user_id
        );
        return Err(response::Error::UserNotOwner);
    }

    Ok(response::Success::Order(Page::new(
        payload.flash,
        response::View { order },
    )))
}
