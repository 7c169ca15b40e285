pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub post_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PostUnliked,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostUnliked => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        PostNotFound,
        LikeNotFound,
        FailedToUnlikePost,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Post not found" })),
                )
                    .into_response(),
                Self::LikeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Like not found." })),
                )
                    .into_response(),
                Self::FailedToUnlikePost => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to unlike post" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
