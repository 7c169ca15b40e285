use super::types::{request, response};
use crate::{
    modules::{auth::permission, comment::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let comment = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateComment)?
        .ok_or(response::Error::CommentNotFound)?;

    permission::ensure_owner(&payload.auth.user, &comment)
        .map_err(|_| response::Error::NotCommentAuthor)?;

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_content_by_id(&ctx.db_conn.pool, comment.id, payload.body.content)
        .await
        .map_err(|_| response::Error::FailedToUpdateComment)?
        .ok_or(response::Error::CommentNotFound)
        .map(response::Success::CommentUpdated)
}
