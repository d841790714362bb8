pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[serde(default)]
        #[validate(length(
            min = 4,
            max = 20,
            message = "Username must be between 4 and 20 characters"
        ))]
        pub username: String,
        #[serde(default)]
        #[validate(
            email(code = "INVALID_USER_EMAIL", message = "Invalid email address"),
            length(max = 120, message = "Email must be at most 120 characters")
        )]
        pub email: String,
        #[serde(default)]
        #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
        pub password: String,
        #[serde(default)]
        #[validate(must_match(other = "password", message = "Passwords must match"))]
        pub confirm_password: String,
    }

    impl Payload {
        /// Surrounding whitespace is not part of a username or email.
        pub fn trimmed(self) -> Self {
            Self {
                username: self.username.trim().to_string(),
                email: self.email.trim().to_string(),
                ..self
            }
        }
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
        Registered,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered => flash::redirect_with(
                    "/login",
                    FlashMessage::success("Registration successful! Please log in."),
                ),
            }
        }
    }

    pub enum Error {
        FailedToValidate(validator::ValidationErrors),
        FailedToFetchUser,
        UsernameAlreadyInUse,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UsernameAlreadyInUse => {
                    flash::redirect_with("/register", FlashMessage::error("Username already exists"))
                }
                Self::EmailAlreadyInUse => flash::redirect_with(
                    "/register",
                    FlashMessage::error("Email already registered"),
                ),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
