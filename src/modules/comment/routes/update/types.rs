pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(default)]
        #[validate(length(min = 1, message = "Comment cannot be empty"))]
        pub content: String,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::comment::repository::Comment, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        CommentUpdated(Comment),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CommentUpdated(comment) => {
                    (StatusCode::OK, Json(json!(comment))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        CommentNotFound,
        NotCommentAuthor,
        FailedToUpdateComment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
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
                Self::FailedToUpdateComment => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update comment" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
