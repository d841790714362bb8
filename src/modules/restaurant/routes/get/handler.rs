use super::{service::service, types::request};
use crate::{types::Context, utils::flash::IncomingFlash};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    flash: IncomingFlash,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, flash }).await
}
