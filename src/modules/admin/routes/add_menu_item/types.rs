pub mod request {
    use crate::{modules::admin::service::validate_price, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        pub restaurant_id: String,
        #[serde(default)]
        #[validate(
            custom(function = "validate_not_blank"),
            length(max = 100, message = "Name must be at most 100 characters")
        )]
        pub name: String,
        pub description: Option<String>,
        #[serde(default)]
        #[validate(custom(function = "validate_price"))]
        pub price: String,
        #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
        pub category: Option<String>,
        #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
        pub image_url: Option<String>,
    }
}

pub mod response {
    use crate::utils::{
        flash::{self, FlashMessage, Page},
        validation,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct RestaurantChoice {
        pub id: i64,
        pub name: String,
    }

    #[derive(Serialize)]
    pub struct View {
        pub restaurants: Vec<RestaurantChoice>,
    }

    pub enum Success {
        Form(Page<View>),
        MenuItemCreated { restaurant_id: i64 },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Form(page) => page.into_response(),
                Self::MenuItemCreated { restaurant_id } => flash::redirect_with(
                    &format!("/admin/restaurant/{}/menu", restaurant_id),
                    FlashMessage::success("Menu item added successfully!"),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        FailedToCreateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateMenuItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create menu item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
