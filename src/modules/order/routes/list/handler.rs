use super::service::service;
use crate::{modules::auth::middleware::Auth, types::Context, utils::flash::IncomingFlash};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    flash: IncomingFlash,
) -> impl IntoResponse {
    service(ctx, auth, flash).await
}
