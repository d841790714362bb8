pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::flash::IncomingFlash};

    pub struct Payload {
        pub id: i64,
        pub auth: Auth,
        pub flash: IncomingFlash,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::FullOrder,
        utils::flash::{self, FlashMessage, Page},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct View {
        pub order: FullOrder,
    }

    pub enum Success {
        Order(Page<View>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(page) => page.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrder,
        OrderNotFound,
        UserNotOwner,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch order" })),
                )
                    .into_response(),
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::UserNotOwner => flash::redirect_with("/", FlashMessage::error("Unauthorized")),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
