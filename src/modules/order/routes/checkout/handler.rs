use super::{
    service::{service, view},
    types::request,
};
use crate::{modules::auth::middleware::Auth, types::Context, utils::flash::IncomingFlash};
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn form(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    flash: IncomingFlash,
) -> impl IntoResponse {
    view(ctx, auth, flash).await
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Form(body): Form<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { body, auth }).await
}
