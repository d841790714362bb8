pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize)]
    pub struct Query {
        pub next: Option<String>,
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(default)]
        #[validate(length(min = 1, message = "Username is required"))]
        pub username: String,
        #[serde(default)]
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
    }

    pub struct Payload {
        pub body: Body,
        pub next: Option<String>,
    }
}

pub mod response {
    use crate::utils::{
        flash::{self, FlashMessage},
        validation,
    };
    use axum::response::IntoResponse;
    use axum_extra::extract::cookie::SignedCookieJar;

    pub enum Success {
        LoggedIn { jar: SignedCookieJar, next: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn { jar, next } => (
                    jar,
                    flash::redirect_with(&next, FlashMessage::success("Login successful!")),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        InvalidCredentials { next: Option<String> },
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidCredentials { next } => {
                    let to = match next {
                        Some(next) => format!("/login?next={}", urlencoding::encode(&next)),
                        None => String::from("/login"),
                    };
                    flash::redirect_with(&to, FlashMessage::error("Invalid username or password"))
                }
                Self::UnexpectedError => (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
