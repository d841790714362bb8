pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
        pub name: Option<String>,
        pub description: Option<String>,
        pub price: Option<String>,
        #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
        pub category: Option<String>,
        #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
        pub image_url: Option<String>,
        pub is_available: Option<String>,
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
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
        MenuItemUpdated { restaurant_id: i64 },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated { restaurant_id } => flash::redirect_with(
                    &format!("/admin/restaurant/{}/menu", restaurant_id),
                    FlashMessage::success("Menu item updated successfully!"),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        MenuItemNotFound,
        FailedToUpdateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::MenuItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu item not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateMenuItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update menu item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
