use super::types::{request, response};
use crate::{
    modules::{auth::permission, post::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdatePost)?
        .ok_or(response::Error::PostNotFound)?;

    permission::ensure_owner(&payload.auth.user, &post)
        .map_err(|_| response::Error::NotPostOwner)?;

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        post.id.clone(),
        repository::UpdatePostPayload {
            title: payload.body.title.map(|title| title.trim().to_string()),
            description: payload.body.description,
            image_url: payload.body.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdatePost)?;

    repository::find_by_id(&ctx.db_conn.pool, post.id)
        .await
        .map_err(|_| response::Error::FailedToUpdatePost)?
        .ok_or(response::Error::PostNotFound)
        .map(response::Success::PostUpdated)
}
