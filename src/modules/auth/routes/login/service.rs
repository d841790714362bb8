use super::types::{request, response};
use crate::{modules::auth::service, types::Context, utils::password};
use axum_extra::extract::cookie::SignedCookieJar;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let invalid_credentials = || response::Error::InvalidCredentials {
        next: payload.next.clone(),
    };

    let user = ctx
        .repos
        .users
        .find_by_username(payload.body.username.trim().to_string())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or_else(invalid_credentials)?;

    if !password::verify(&payload.body.password, &user.password_hash) {
        tracing::info!("Failed login attempt for user {}", user.id);
        return Err(invalid_credentials());
    }

    let session = service::create_session(ctx.clone(), user.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    let next = payload
        .next
        .filter(|next| service::is_local_path(next))
        .unwrap_or_else(|| String::from("/"));

    Ok(response::Success::LoggedIn {
        jar: SignedCookieJar::new(ctx.app.cookie_key.clone())
            .add(service::session_cookie(session.token)),
        next,
    })
}
