use super::service::service;
use crate::{types::Context, utils::flash::IncomingFlash};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, flash: IncomingFlash) -> impl IntoResponse {
    service(ctx, flash).await
}
