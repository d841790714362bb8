use crate::{
    app::App,
    modules::{
        auth::service as auth_service,
        menu::repository::{CreateMenuItemPayload, MenuItem},
        restaurant::repository::{CreateRestaurantPayload, Restaurant},
        user::repository::{CreateUserPayload, User},
    },
    types::{Context, Repositories},
    utils::{
        config::Config,
        database::memory::MemoryDatabase,
        flash::{FlashMessage, FLASH_COOKIE},
        password,
    },
};
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::{IntoResponse, Response},
    Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use bigdecimal::BigDecimal;
use http_body_util::BodyExt;
use std::{str::FromStr, sync::Arc};

pub fn config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn context() -> (Arc<Context>, Arc<MemoryDatabase>) {
    let db = Arc::new(MemoryDatabase::new());
    let ctx = Arc::new(Context::new(config(), Repositories::memory(db.clone())));

    (ctx, db)
}

pub fn router(ctx: Arc<Context>) -> Router {
    App::router(ctx)
}

pub async fn create_user(ctx: &Context, username: &str, is_admin: bool) -> User {
    ctx.repos
        .users
        .create(CreateUserPayload {
            username: username.to_string(),
            email: format!("{}@x.com", username),
            password_hash: password::hash("pw123456").unwrap(),
            is_admin,
        })
        .await
        .unwrap()
}

pub async fn create_restaurant(ctx: &Context, name: &str) -> Restaurant {
    ctx.repos
        .restaurants
        .create(CreateRestaurantPayload {
            name: name.to_string(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            image_url: String::from("https://example.com/r.png"),
            is_active: true,
        })
        .await
        .unwrap()
}

pub async fn create_menu_item(
    ctx: &Context,
    restaurant_id: i64,
    name: &str,
    price: &str,
    category: &str,
) -> MenuItem {
    ctx.repos
        .menu_items
        .create(CreateMenuItemPayload {
            restaurant_id,
            name: name.to_string(),
            description: String::new(),
            price: BigDecimal::from_str(price).unwrap(),
            category: category.to_string(),
            image_url: String::from("https://example.com/m.png"),
            is_available: true,
        })
        .await
        .unwrap()
}

/// A `Cookie` header value carrying a fresh signed session for the user.
pub async fn session_cookie(ctx: Arc<Context>, user_id: i64) -> String {
    let session = auth_service::create_session(ctx.clone(), user_id)
        .await
        .unwrap();
    let response = SignedCookieJar::new(ctx.app.cookie_key.clone())
        .add(auth_service::session_cookie(session.token))
        .into_response();

    cookie_pair(&response, auth_service::SESSION_COOKIE).unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// The `name=value` pair of a cookie set by the response.
pub fn cookie_pair(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter(|value| value.starts_with(&format!("{}=", name)))
        .filter_map(|value| value.split(';').next())
        .map(str::to_string)
        .next()
}

pub fn flash(response: &Response) -> Option<FlashMessage> {
    cookie_pair(response, FLASH_COOKIE)
        .and_then(|pair| FlashMessage::decode(pair.trim_start_matches("flash=")))
}

pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
