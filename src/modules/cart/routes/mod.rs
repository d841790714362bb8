mod add;
mod get;
mod remove;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(add::get_router())
        .merge(update::get_router())
        .merge(remove::get_router())
}
