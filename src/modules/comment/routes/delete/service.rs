use super::types::{request, response};
use crate::{
    modules::{auth::permission, comment::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let comment = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteComment)?
        .ok_or(response::Error::CommentNotFound)?;

    permission::ensure_owner(&payload.auth.user, &comment)
        .map_err(|_| response::Error::NotCommentAuthor)?;

    repository::delete_by_id(&ctx.db_conn.pool, comment.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteComment)
        .map(|_| response::Success::CommentDeleted)
}
