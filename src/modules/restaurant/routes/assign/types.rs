pub mod request {
    use crate::modules::{auth::middleware::Auth, restaurant::assignment::Mode};

    pub struct Payload<B> {
        pub body: B,
        pub auth: Auth,
        pub mode: Mode,
    }
}

pub mod response {
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Assigned(&'static str),
        Unassigned(&'static str),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Assigned(name) => (
                    StatusCode::OK,
                    Json(json!({ "message": format!("{} assigned successfully", name) })),
                )
                    .into_response(),
                Self::Unassigned(name) => (
                    StatusCode::OK,
                    Json(json!({ "message": format!("{} unassigned successfully", name) })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        NotFound(&'static str, Vec<String>),
        NotRestaurantOwner,
        FailedToUpdateAssignment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found for this user" })),
                )
                    .into_response(),
                Self::NotFound(name, ids) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("{} not found", name), "ids": ids })),
                )
                    .into_response(),
                Self::NotRestaurantOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You are not the owner of this restaurant" })),
                )
                    .into_response(),
                Self::FailedToUpdateAssignment => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update assignment" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
