use crate::{
    modules::order::repository::{Order, OrderStatus, PlaceOrderPayload},
    types::Context,
    utils::{database::memory::MemoryDatabase, flash::FlashMessage, testing},
};
use axum::http::StatusCode;
use bigdecimal::BigDecimal;
use std::{str::FromStr, sync::Arc};
use tower::ServiceExt;

async fn admin_cookie(ctx: Arc<Context>) -> String {
    let admin = testing::create_user(&ctx, "admin", true).await;
    testing::session_cookie(ctx, admin.id).await
}

async fn place_order(ctx: &Context) -> Order {
    let restaurant = testing::create_restaurant(ctx, "Taco Fiesta").await;
    let item = testing::create_menu_item(ctx, restaurant.id, "Beef Tacos", "10.99", "Tacos").await;
    let alice = testing::create_user(ctx, "alice", false).await;
    ctx.repos.cart.increment(alice.id, item.id).await.unwrap();

    ctx.repos
        .orders
        .place_from_cart(PlaceOrderPayload {
            user_id: alice.id,
            delivery_address: String::from("1 A St"),
            phone: String::from("555-1234"),
        })
        .await
        .unwrap()
}

async fn post_status(ctx: Arc<Context>, cookie: &str, order_id: i64, status: &str) -> axum::response::Response {
    testing::router(ctx)
        .oneshot(testing::post_form(
            &format!("/admin/order/{}/update_status", order_id),
            &format!("status={}", status),
            Some(cookie),
        ))
        .await
        .unwrap()
}

async fn only_order(db: &MemoryDatabase) -> Order {
    db.orders().await.remove(0)
}

#[tokio::test]
async fn non_admins_are_turned_away() {
    let (ctx, _) = testing::context();
    let alice = testing::create_user(&ctx, "alice", false).await;
    let cookie = testing::session_cookie(ctx.clone(), alice.id).await;

    let response = testing::router(ctx)
        .oneshot(testing::get("/admin/orders", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(testing::location(&response).as_deref(), Some("/"));
    assert_eq!(
        testing::flash(&response),
        Some(FlashMessage::error("Access denied"))
    );
}

#[tokio::test]
async fn anonymous_admin_requests_keep_the_full_path() {
    let (ctx, _) = testing::context();

    for (uri, next) in [
        ("/admin/orders", "/login?next=%2Fadmin%2Forders"),
        ("/admin", "/login?next=%2Fadmin"),
        ("/admin/restaurant/3/menu", "/login?next=%2Fadmin%2Frestaurant%2F3%2Fmenu"),
    ] {
        let response = testing::router(ctx.clone())
            .oneshot(testing::get(uri, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(testing::location(&response).as_deref(), Some(next));
    }
}

#[tokio::test]
async fn admin_sees_every_order() {
    let (ctx, _) = testing::context();
    place_order(&ctx).await;
    let cookie = admin_cookie(ctx.clone()).await;

    let response = testing::router(ctx)
        .oneshot(testing::get("/admin/orders", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = testing::body_json(response).await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
    assert_eq!(body["orders"][0]["total_items"], 1);
}

#[tokio::test]
async fn dashboard_shows_restaurants_and_recent_orders() {
    let (ctx, _) = testing::context();
    place_order(&ctx).await;
    let cookie = admin_cookie(ctx.clone()).await;

    let response = testing::router(ctx)
        .oneshot(testing::get("/admin", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = testing::body_json(response).await;
    assert_eq!(body["restaurants"][0]["name"], "Taco Fiesta");
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn recognized_status_is_applied() {
    let (ctx, db) = testing::context();
    let order = place_order(&ctx).await;
    let cookie = admin_cookie(ctx.clone()).await;

    let response = post_status(ctx, &cookie, order.id, "out_for_delivery").await;

    assert_eq!(testing::location(&response).as_deref(), Some("/admin/orders"));
    assert_eq!(
        testing::flash(&response),
        Some(FlashMessage::success("Order status updated!"))
    );
    let order = only_order(&db).await;
    assert_eq!(order.status, OrderStatus::OutForDelivery);
    assert!(order.updated_at.is_some());
}

#[tokio::test]
async fn unknown_status_changes_nothing() {
    let (ctx, db) = testing::context();
    let order = place_order(&ctx).await;
    let cookie = admin_cookie(ctx.clone()).await;

    let response = post_status(ctx.clone(), &cookie, order.id, "shipped").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(testing::location(&response).as_deref(), Some("/admin/orders"));
    assert_eq!(testing::flash(&response), None);
    let order = only_order(&db).await;
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.updated_at.is_none());

    let response = post_status(ctx, &cookie, 999_999, "confirmed").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_manages_the_catalog() {
    let (ctx, _) = testing::context();
    let cookie = admin_cookie(ctx.clone()).await;

    let response = testing::router(ctx.clone())
        .oneshot(testing::post_form("/admin/restaurant/add", "name=+", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.repos.restaurants.count().await.unwrap(), 0);

    let response = testing::router(ctx.clone())
        .oneshot(testing::post_form(
            "/admin/restaurant/add",
            "name=Noodle+Express&phone=555-0000",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(testing::location(&response).as_deref(), Some("/admin/restaurants"));
    assert_eq!(
        testing::flash(&response),
        Some(FlashMessage::success("Restaurant added successfully!"))
    );
    let restaurant = ctx
        .repos
        .restaurants
        .find_many(Default::default())
        .await
        .unwrap()
        .remove(0);
    assert!(restaurant.is_active);

    let response = testing::router(ctx.clone())
        .oneshot(testing::post_form(
            "/admin/menu/add",
            &format!(
                "restaurant_id={}&name=Pad+Thai&price=13.999&category=Noodles",
                restaurant.id
            ),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(
        testing::location(&response),
        Some(format!("/admin/restaurant/{}/menu", restaurant.id))
    );

    let response = testing::router(ctx.clone())
        .oneshot(testing::post_form(
            "/admin/menu/add",
            "restaurant_id=424242&name=Ghost&price=-1",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = testing::router(ctx.clone())
        .oneshot(testing::get(
            &format!("/admin/restaurant/{}/menu", restaurant.id),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let body = testing::body_json(response).await;
    let items = body["menu_items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        BigDecimal::from_str(items[0]["price"].as_str().unwrap()).unwrap(),
        BigDecimal::from_str("14.00").unwrap()
    );

    let response = testing::router(ctx.clone())
        .oneshot(testing::post_form(
            &format!("/admin/restaurant/{}/update", restaurant.id),
            "is_active=false",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(
        testing::flash(&response),
        Some(FlashMessage::success("Restaurant updated successfully!"))
    );

    let response = testing::router(ctx)
        .oneshot(testing::get("/", None))
        .await
        .unwrap();
    let body = testing::body_json(response).await;
    assert!(body["restaurants"].as_array().unwrap().is_empty());
}
