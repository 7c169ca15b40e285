use super::types::{request, response};
use crate::{
    modules::{comment, post::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let post = repository::find_by_id(&ctx.db_conn.pool, payload.post_id)
        .await
        .map_err(|_| response::Error::FailedToFetchComments)?
        .ok_or(response::Error::PostNotFound)?;

    comment::repository::find_many_by_post_id(&ctx.db_conn.pool, &post.id, None)
        .await
        .map_err(|_| response::Error::FailedToFetchComments)
        .map(response::Success::Comments)
}
