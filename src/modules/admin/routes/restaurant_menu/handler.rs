use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::flash::IncomingFlash};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    flash: IncomingFlash,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, flash }).await
}
