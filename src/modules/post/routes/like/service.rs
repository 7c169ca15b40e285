use super::types::{request, response};
use crate::{
    modules::{like, post::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_by_id(&ctx.db_conn.pool, payload.post_id)
        .await
        .map_err(|_| response::Error::FailedToLikePost)?
        .ok_or(response::Error::PostNotFound)?;

    like::repository::create(&ctx.db_conn.pool, payload.auth.user.id, post.id)
        .await
        .map_err(|err| match err {
            like::repository::Error::AlreadyLiked => response::Error::AlreadyLiked,
            like::repository::Error::UnexpectedError => response::Error::FailedToLikePost,
        })
        .map(response::Success::PostLiked)
}
