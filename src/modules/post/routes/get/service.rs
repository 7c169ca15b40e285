use super::types::{request, response};
use crate::{
    modules::{comment, post::repository},
    types::Context,
};
use std::sync::Arc;

const COMMENT_PREVIEW_LIMIT: i64 = 50;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_summary_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchPost)?
        .ok_or(response::Error::PostNotFound)?;

    let comments = comment::repository::find_many_by_post_id(
        &ctx.db_conn.pool,
        &post.post.id,
        Some(COMMENT_PREVIEW_LIMIT),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchPost)?;

    Ok(response::Success::Post(response::PostDetails { post, comments }))
}
