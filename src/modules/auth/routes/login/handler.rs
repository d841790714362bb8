use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::Auth,
    types::Context,
    utils::flash::{self, IncomingFlash, Page},
};
use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

pub async fn form(
    auth: Option<Auth>,
    flash: IncomingFlash,
    Query(query): Query<request::Query>,
) -> Response {
    if auth.is_some() {
        return flash::redirect("/", None);
    }

    Page::new(flash, json!({ "next": query.next })).into_response()
}

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Option<Auth>,
    Query(query): Query<request::Query>,
    Form(body): Form<request::Body>,
) -> Response {
    if auth.is_some() {
        return flash::redirect("/", None);
    }

    service(
        ctx,
        request::Payload {
            body,
            next: query.next,
        },
    )
    .await
    .into_response()
}
