use super::service::service;
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::flash::IncomingFlash};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    flash: IncomingFlash,
) -> impl IntoResponse {
    service(ctx, flash).await
}
