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
        Unsubscribed,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Unsubscribed => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        SubscriptionNotFound,
        NotSubscriptionOwner,
        FailedToUnsubscribe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SubscriptionNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Subscription not found" })),
                )
                    .into_response(),
                Self::NotSubscriptionOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only remove your own subscriptions" })),
                )
                    .into_response(),
                Self::FailedToUnsubscribe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to unsubscribe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
