use super::types::{request, response};
use crate::{
    modules::{comment, post::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let post = repository::find_by_id(&ctx.db_conn.pool, payload.post_id)
        .await
        .map_err(|_| response::Error::FailedToCreateComment)?
        .ok_or(response::Error::PostNotFound)?;

    comment::repository::create(
        &ctx.db_conn.pool,
        comment::repository::CreateCommentPayload {
            user_id: payload.auth.user.id,
            post_id: post.id,
            content: payload.body.content,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateComment)
    .map(response::Success::CommentCreated)
}
