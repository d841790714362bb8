use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context, utils::flash::IncomingFlash};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    flash: IncomingFlash,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, auth, flash }).await
}
