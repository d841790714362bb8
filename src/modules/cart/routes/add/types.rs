pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub menu_item_id: i64,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::flash::{self, FlashMessage};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AddedToCart { name: String, restaurant_id: i64 },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AddedToCart {
                    name,
                    restaurant_id,
                } => flash::redirect_with(
                    &format!("/restaurant/{}", restaurant_id),
                    FlashMessage::success(format!("{} added to cart!", name)),
                ),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        MenuItemNotAvailable { restaurant_id: i64 },
        FailedToAddToCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu item not found" })),
                )
                    .into_response(),
                Self::MenuItemNotAvailable { restaurant_id } => flash::redirect_with(
                    &format!("/restaurant/{}", restaurant_id),
                    FlashMessage::error("Item is not available"),
                ),
                Self::FailedToAddToCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add item to cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
