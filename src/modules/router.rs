use super::{admin, auth, cart, health, order, restaurant};
use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(health::get_router())
        .merge(restaurant::get_router())
        .merge(auth::get_router())
        .merge(cart::get_router())
        .merge(order::get_router())
        .merge(admin::get_router())
}
