mod add_menu_item;
mod add_restaurant;
mod dashboard;
mod orders;
mod restaurant_menu;
mod restaurants;
mod update_menu_item;
mod update_order_status;
mod update_restaurant;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/admin",
        Router::new()
            .merge(dashboard::get_router())
            .merge(restaurants::get_router())
            .merge(add_restaurant::get_router())
            .merge(update_restaurant::get_router())
            .merge(restaurant_menu::get_router())
            .merge(add_menu_item::get_router())
            .merge(update_menu_item::get_router())
            .merge(orders::get_router())
            .merge(update_order_status::get_router()),
    )
}
