pub mod response {
    use crate::{
        modules::{order::repository::OrderSummary, restaurant::repository::Restaurant},
        utils::flash::Page,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct View {
        pub restaurants: Vec<Restaurant>,
        pub orders: Vec<OrderSummary>,
    }

    pub enum Success {
        Dashboard(Page<View>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard(page) => page.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchDashboard,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDashboard => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch dashboard" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
