pub mod request {
    use super::response;
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{ValidationError, ValidationErrors};

    #[derive(Deserialize)]
    pub struct Body {
        pub quantity: Option<String>,
    }

    const MAX_QUANTITY: i32 = 1000;

    fn invalid_quantity(message: &'static str) -> response::Error {
        let mut errors = ValidationErrors::new();
        errors.add(
            "quantity",
            ValidationError::new("INVALID_QUANTITY").with_message(Cow::from(message)),
        );
        response::Error::FailedToValidate(errors)
    }

    impl Body {
        /// A missing or empty quantity counts as 1.
        pub fn quantity(&self) -> Result<i32, response::Error> {
            let quantity = match self.quantity.as_deref().map(str::trim) {
                None | Some("") => 1,
                Some(raw) => raw
                    .parse::<i32>()
                    .map_err(|_| invalid_quantity("Quantity must be a whole number"))?,
            };

            if quantity > MAX_QUANTITY {
                return Err(invalid_quantity("Quantity must be at most 1000"));
            }

            Ok(quantity)
        }
    }

    pub struct Payload {
        pub cart_item_id: i64,
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::{
        flash::{self, FlashMessage},
        validation,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CartUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartUpdated => flash::redirect("/cart", None),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        CartItemNotFound,
        NotOwner,
        FailedToUpdateCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::CartItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cart item not found" })),
                )
                    .into_response(),
                Self::NotOwner => flash::redirect_with("/cart", FlashMessage::error("Unauthorized")),
                Self::FailedToUpdateCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
