pub mod request {
    use crate::{
        modules::auth::middleware::Auth,
        utils::validation::{validate_not_blank, validate_phone},
    };
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(default)]
        #[validate(custom(function = "validate_not_blank"))]
        pub delivery_address: String,
        #[serde(default)]
        #[validate(custom(function = "validate_phone"))]
        pub phone: String,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{
        modules::cart::repository::CartLine,
        utils::{
            flash::{self, FlashMessage, Page},
            validation,
        },
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct View {
        pub cart_items: Vec<CartLine>,
        pub total: BigDecimal,
    }

    pub enum Success {
        Checkout(Page<View>),
        OrderPlaced,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Checkout(page) => page.into_response(),
                Self::OrderPlaced => {
                    flash::redirect_with("/orders", FlashMessage::success("Order placed successfully!"))
                }
            }
        }
    }

    pub enum Error {
        EmptyCart,
        FailedToValidate(validator::ValidationErrors),
        FailedToFetchCart,
        FailedToPlaceOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmptyCart => flash::redirect_with("/cart", FlashMessage::error("Your cart is empty")),
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToFetchCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cart" })),
                )
                    .into_response(),
                Self::FailedToPlaceOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to place order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
