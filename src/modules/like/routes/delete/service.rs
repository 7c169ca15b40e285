use super::types::{request, response};
use crate::{
    modules::{auth::permission, like::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let like = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteLike)?
        .ok_or(response::Error::LikeNotFound)?;

    permission::ensure_owner(&payload.auth.user, &like)
        .map_err(|_| response::Error::NotLikeOwner)?;

    repository::delete_by_id(&ctx.db_conn.pool, like.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteLike)
        .map(|_| response::Success::LikeDeleted)
}
