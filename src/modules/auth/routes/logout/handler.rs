use crate::{
    modules::auth::{middleware::Auth, service},
    types::Context,
    utils::flash::{self, FlashMessage},
};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, auth: Auth, headers: HeaderMap) -> Response {
    let jar = SignedCookieJar::from_headers(&headers, ctx.app.cookie_key.clone());

    if let Some(cookie) = jar.get(service::SESSION_COOKIE) {
        if service::destroy_session(ctx.clone(), cookie.value().to_string())
            .await
            .is_err()
        {
            tracing::error!("Failed to destroy session of user {}", auth.user.id);
        }
    }

    (
        jar.remove(service::removal_cookie()),
        flash::redirect_with("/", FlashMessage::info("You have been logged out")),
    )
        .into_response()
}
