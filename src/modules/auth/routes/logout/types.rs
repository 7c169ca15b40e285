pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub refresh: Option<String>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LoggedOut,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedOut => (
                    StatusCode::RESET_CONTENT,
                    Json(json!({ "detail": "Successfully logged out." })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RefreshTokenRequired,
        InvalidRefreshToken,
        FailedToLogout,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RefreshTokenRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Refresh token is required." })),
                )
                    .into_response(),
                Self::InvalidRefreshToken => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Token is invalid or expired." })),
                )
                    .into_response(),
                Self::FailedToLogout => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to log out" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
