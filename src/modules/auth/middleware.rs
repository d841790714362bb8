use super::service;
use crate::modules::user::{self, repository::User};
use crate::types::Context;
use crate::utils::flash::{self, FlashMessage};
use axum::extract::{FromRequestParts, OriginalUri};
use axum::RequestPartsExt;
use axum::{async_trait, extract::Extension, http::request::Parts, response::Response};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Serialize;
use std::sync::Arc;

enum Error {
    MissingContext,
    InvalidSession,
}

fn session_token_from_parts(ctx: &Context, parts: &Parts) -> Result<String, Error> {
    SignedCookieJar::from_headers(&parts.headers, ctx.app.cookie_key.clone())
        .get(service::SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(Error::InvalidSession)
}

async fn get_user_from_parts(parts: &mut Parts) -> Result<User, Error> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|_| Error::MissingContext)?;

    let token = session_token_from_parts(&ctx, parts)?;
    let session = service::verify_session_token(ctx.clone(), token)
        .await
        .map_err(|_| Error::InvalidSession)?;

    ctx.repos
        .users
        .find_by_id(session.user_id)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

/// The request path as the client sent it, including any prefix stripped by nesting.
fn requested_path(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or(&parts.uri);

    uri.path_and_query()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| String::from("/"))
}

fn login_redirect(parts: &Parts) -> Response {
    let next = requested_path(parts);

    flash::redirect_with(
        &format!("/login?next={}", urlencoding::encode(&next)),
        FlashMessage::info("Please log in to access this page."),
    )
}

fn reject(err: Error, parts: &Parts) -> Response {
    if let Error::MissingContext = err {
        tracing::error!("Request context is missing from the router extensions");
    }

    login_redirect(parts)
}

/// A logged-in user. Anonymous requests are sent to the login page.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        match get_user_from_parts(parts).await {
            Ok(user) => Ok(Self { user }),
            Err(err) => Err(reject(err, parts)),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let user = match get_user_from_parts(parts).await {
            Ok(user) => user,
            Err(err) => return Err(reject(err, parts)),
        };

        if !user::repository::is_admin(&user) {
            tracing::warn!(
                "User {} tried to reach {} without admin rights",
                user.id,
                requested_path(parts)
            );
            return Err(flash::redirect_with("/", FlashMessage::error("Access denied")));
        }

        Ok(Self { user })
    }
}
