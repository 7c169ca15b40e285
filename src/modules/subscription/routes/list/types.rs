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
    use crate::modules::subscription::repository::Subscription;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Subscriptions(Vec<Subscription>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Subscriptions(subscriptions) => {
                    (StatusCode::OK, Json(json!(subscriptions))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchSubscriptions,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchSubscriptions => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch subscriptions" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
