use super::{service::service, types::request};
use crate::{
    modules::{
        auth::middleware::Auth,
        restaurant::assignment::{Mode, Relationship},
    },
    types::Context,
};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

/// Unassigns when any requested id is already linked, assigns otherwise.
pub async fn toggle<R: Relationship>(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<R::Body>,
) -> impl IntoResponse {
    service::<R>(
        ctx,
        request::Payload {
            body,
            auth,
            mode: Mode::Toggle,
        },
    )
    .await
}

pub async fn assign<R: Relationship>(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<R::Body>,
) -> impl IntoResponse {
    service::<R>(
        ctx,
        request::Payload {
            body,
            auth,
            mode: Mode::Assign,
        },
    )
    .await
}

pub async fn unassign<R: Relationship>(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<R::Body>,
) -> impl IntoResponse {
    service::<R>(
        ctx,
        request::Payload {
            body,
            auth,
            mode: Mode::Unassign,
        },
    )
    .await
}
