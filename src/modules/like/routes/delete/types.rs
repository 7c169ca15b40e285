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
        LikeDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LikeDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        LikeNotFound,
        NotLikeOwner,
        FailedToDeleteLike,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LikeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Like not found." })),
                )
                    .into_response(),
                Self::NotLikeOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only remove your own likes" })),
                )
                    .into_response(),
                Self::FailedToDeleteLike => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete like" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
