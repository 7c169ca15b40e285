use super::types::{request, response};
use crate::{
    modules::{auth::permission, post::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePost)?
        .ok_or(response::Error::PostNotFound)?;

    permission::ensure_owner(&payload.auth.user, &post)
        .map_err(|_| response::Error::NotPostOwner)?;

    repository::delete_by_id(&ctx.db_conn.pool, post.id)
        .await
        .map_err(|_| response::Error::FailedToDeletePost)
        .map(|_| response::Success::PostDeleted)
}
