pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::comment::repository::Comment;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Comment(Comment),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Comment(comment) => (StatusCode::OK, Json(json!(comment))).into_response(),
            }
        }
    }

    pub enum Error {
        CommentNotFound,
        FailedToFetchComment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CommentNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Comment not found" })),
                )
                    .into_response(),
                Self::FailedToFetchComment => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch comment" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
