use super::handler;
use crate::{modules::restaurant::assignment::Relationship, types::Context};
use axum::routing::{post, Router};
use std::sync::Arc;

pub fn get_router<R: Relationship>() -> Router<Arc<Context>> {
    Router::new()
        .route("/", post(handler::toggle::<R>))
        .route("/assign", post(handler::assign::<R>))
        .route("/unassign", post(handler::unassign::<R>))
}
