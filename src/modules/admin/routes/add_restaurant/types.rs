pub mod request {
    use crate::utils::validation::validate_not_blank;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(
            custom(function = "validate_not_blank"),
            length(max = 100, message = "Name must be at most 100 characters")
        )]
        pub name: String,
        pub description: Option<String>,
        #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
        pub address: Option<String>,
        #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
        pub phone: Option<String>,
        #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
        pub image_url: Option<String>,
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
        RestaurantCreated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated => flash::redirect_with(
                    "/admin/restaurants",
                    FlashMessage::success("Restaurant added successfully!"),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        FailedToCreateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
