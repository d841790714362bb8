use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Error,
}

/// A one-shot message shown by the next view the browser loads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: Level,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    fn encode(&self) -> Option<String> {
        serde_json::to_string(self)
            .ok()
            .map(|json| urlencoding::encode(&json).into_owned())
    }

    pub(crate) fn decode(raw: &str) -> Option<Self> {
        let json = urlencoding::decode(raw).ok()?;
        serde_json::from_str(&json).ok()
    }

    pub fn into_cookie(self) -> Option<Cookie<'static>> {
        self.encode()
            .map(|value| Cookie::build((FLASH_COOKIE, value)).path("/").http_only(true).build())
    }
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((FLASH_COOKIE, "")).path("/").build();
    cookie.make_removal();
    cookie
}

/// The flash message left by the previous response, if any.
pub struct IncomingFlash(pub Option<FlashMessage>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let flash = CookieJar::from_headers(&parts.headers)
            .get(FLASH_COOKIE)
            .and_then(|cookie| FlashMessage::decode(cookie.value()));

        Ok(Self(flash))
    }
}

/// A JSON view model carrying the consumed flash message alongside its data.
#[derive(Serialize)]
pub struct Page<T: Serialize> {
    pub flash: Option<FlashMessage>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(IncomingFlash(flash): IncomingFlash, data: T) -> Self {
        Self { flash, data }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let jar = match self.flash {
            Some(_) => CookieJar::new().add(removal_cookie()),
            None => CookieJar::new(),
        };

        (jar, Json(self)).into_response()
    }
}

/// `303 See Other` to `to`, optionally leaving a flash message behind.
pub fn redirect(to: &str, flash: Option<FlashMessage>) -> Response {
    let jar = match flash.and_then(FlashMessage::into_cookie) {
        Some(cookie) => CookieJar::new().add(cookie),
        None => CookieJar::new(),
    };

    (jar, Redirect::to(to)).into_response()
}

pub fn redirect_with(to: &str, flash: FlashMessage) -> Response {
    redirect(to, Some(flash))
}
