pub mod request {
    use crate::utils::validation::validate_password;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, max = 150, message = "Name must be 1 to 150 characters"))]
        pub name: String,
        #[validate(
            email(code = "INVALID_USER_EMAIL", message = "Invalid email address"),
            length(max = 150)
        )]
        pub email: String,
        #[validate(
            length(min = 8, max = 254, message = "Password must be 8 to 254 characters"),
            custom(function = "validate_password")
        )]
        pub password: String,
    }
}

pub mod response {
    use crate::{modules::auth::service::token::TokenPair, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub struct Registered {
        pub id: String,
        pub name: String,
        pub email: String,
        pub tokens: TokenPair,
    }

    pub enum Success {
        UserRegistered(Registered),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserRegistered(user) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": user.id,
                        "name": user.name,
                        "email": user.email,
                        "access": user.tokens.access,
                        "refresh": user.tokens.refresh,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        SignupFailed,
        FailedToIssueTokens,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
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
                Self::FailedToIssueTokens => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to issue tokens" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
