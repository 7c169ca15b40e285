pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::{comment::repository::Comment, post::repository::PostSummary};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct PostDetails {
        #[serde(flatten)]
        pub post: PostSummary,
        pub comments: Vec<Comment>,
    }

    pub enum Success {
        Post(PostDetails),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Post(post) => (StatusCode::OK, Json(json!(post))).into_response(),
            }
        }
    }

    pub enum Error {
        PostNotFound,
        FailedToFetchPost,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PostNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Post not found" })),
                )
                    .into_response(),
                Self::FailedToFetchPost => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch post" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
