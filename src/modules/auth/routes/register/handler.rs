use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::Auth,
    types::Context,
    utils::flash::{self, IncomingFlash, Page},
};
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

pub async fn form(auth: Option<Auth>, flash: IncomingFlash) -> Response {
    if auth.is_some() {
        return flash::redirect("/", None);
    }

    Page::new(flash, json!({})).into_response()
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Option<Auth>,
    Form(body): Form<request::Payload>,
) -> Response {
    if auth.is_some() {
        return flash::redirect("/", None);
    }

    service(ctx, body).await.into_response()
}
