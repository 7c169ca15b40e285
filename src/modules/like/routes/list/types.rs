pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub user: Option<String>,
    }

    pub struct Payload {
        pub filters: Filters,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::like::repository::Like;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Likes(Vec<Like>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Likes(likes) => (StatusCode::OK, Json(json!(likes))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchLikes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchLikes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch likes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
