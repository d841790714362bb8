pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
        pub name: Option<String>,
        pub description: Option<String>,
        #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
        pub address: Option<String>,
        #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
        pub phone: Option<String>,
        #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
        pub image_url: Option<String>,
        pub is_active: Option<String>,
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
        RestaurantUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantUpdated => flash::redirect_with(
                    "/admin/restaurants",
                    FlashMessage::success("Restaurant updated successfully!"),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        RestaurantNotFound,
        FailedToUpdateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
