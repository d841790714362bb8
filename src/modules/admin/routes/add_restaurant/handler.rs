use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::AdminAuth,
    types::Context,
    utils::flash::{IncomingFlash, Page},
};
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

pub async fn form(_: AdminAuth, flash: IncomingFlash) -> impl IntoResponse {
    Page::new(flash, json!({}))
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Form(body): Form<request::Payload>,
) -> impl IntoResponse {
    service(ctx, body).await
}
