pub mod request {
    pub struct Payload {
        pub post_id: String,
    }
}

pub mod response {
    use crate::modules::comment::repository::Comment;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Comments(Vec<Comment>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Comments(comments) => (StatusCode::OK, Json(json!(comments))).into_response(),
            }
        }
    }

    pub enum Error {
        PostNotFound,
        FailedToFetchComments,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Post not found" })),
                )
                    .into_response(),
                Self::FailedToFetchComments => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch comments" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
