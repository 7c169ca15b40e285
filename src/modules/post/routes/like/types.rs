pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub post_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::like::repository::Like;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PostLiked(Like),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostLiked(like) => (StatusCode::CREATED, Json(json!(like))).into_response(),
            }
        }
    }

    pub enum Error {
        PostNotFound,
        AlreadyLiked,
        FailedToLikePost,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Post not found" })),
                )
                    .into_response(),
                Self::AlreadyLiked => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Already liked." })),
                )
                    .into_response(),
                Self::FailedToLikePost => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to like post" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
