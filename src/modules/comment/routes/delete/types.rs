pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CommentDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CommentDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        CommentNotFound,
        NotCommentAuthor,
        FailedToDeleteComment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CommentNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Comment not found" })),
                )
                    .into_response(),
                Self::NotCommentAuthor => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You are not the author of this comment" })),
                )
                    .into_response(),
                Self::FailedToDeleteComment => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete comment" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
