use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path(cart_item_id): Path<i64>,
) -> impl IntoResponse {
    service(ctx, request::Payload { cart_item_id, auth }).await
}
