mod checkout;
mod get;
mod list;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(checkout::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
}
