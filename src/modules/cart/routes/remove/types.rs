pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub cart_item_id: i64,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::flash::{self, FlashMessage};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RemovedFromCart,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RemovedFromCart => {
                    flash::redirect_with("/cart", FlashMessage::info("Item removed from cart"))
                }
            }
        }
    }

    pub enum Error {
        CartItemNotFound,
        NotOwner,
        FailedToRemoveFromCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart item not found" })),
                )
                    .into_response(),
                Self::NotOwner => flash::redirect_with("/cart", FlashMessage::error("Unauthorized")),
                Self::FailedToRemoveFromCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to remove item from cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
