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
    }

    pub enum Success {
        Menu(Page<View>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(page) => page.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchMenu,
        RestaurantNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchMenu => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch menu" })),
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
