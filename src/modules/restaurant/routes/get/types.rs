pub mod request {
    use crate::utils::flash::IncomingFlash;

    pub struct Payload {
        pub id: i64,
        pub flash: IncomingFlash,
    }
}

pub mod response {
    use crate::{
        modules::{menu::repository::MenuItem, restaurant::repository::Restaurant},
        utils::flash::Page,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct View {
        pub restaurant: Restaurant,
        pub menu_items: Vec<MenuItem>,
        pub categories: Vec<String>,
    }

    pub enum Success {
        Restaurant(Page<View>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Restaurant(page) => page.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchRestaurant,
        RestaurantNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch restaurant" })),
                )
                    .into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
