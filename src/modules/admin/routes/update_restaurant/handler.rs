use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::{Form, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Path(id): Path<i64>,
    Form(body): Form<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
