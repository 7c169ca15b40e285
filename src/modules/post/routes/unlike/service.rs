use super::types::{request, response};
use crate::{
    modules::{like, post::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_by_id(&ctx.db_conn.pool, payload.post_id)
        .await
        .map_err(|_| response::Error::FailedToUnlikePost)?
        .ok_or(response::Error::PostNotFound)?;

    match like::repository::delete_by_user_and_post(&ctx.db_conn.pool, payload.auth.user.id, post.id)
        .await
        .map_err(|_| response::Error::FailedToUnlikePost)?
    {
        true => Ok(response::Success::PostUnliked),
        false => Err(response::Error::LikeNotFound),
    }
}
