use super::types::{request, response};
use crate::{
    modules::user::repository::CreateUserPayload,
    types::Context,
    utils::password,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let payload = payload.trimmed();
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let username = payload.username;
    let email = payload.email;

    if ctx
        .repos
        .users
        .find_by_username(username.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::UsernameAlreadyInUse);
    }

    if ctx
        .repos
        .users
        .find_by_email(email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    let user = ctx
        .repos
        .users
        .create(CreateUserPayload {
            username,
            email,
            password_hash,
            is_admin: false,
        })
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    tracing::info!("Registered user {} ({})", user.id, user.username);

    Ok(response::Success::Registered)
}
