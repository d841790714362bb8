use super::{
    service::{form as form_service, service},
    types::request,
};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::flash::IncomingFlash};
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn form(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    flash: IncomingFlash,
) -> impl IntoResponse {
    form_service(ctx, flash).await
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Form(body): Form<request::Payload>,
) -> impl IntoResponse {
    service(ctx, body).await
}
