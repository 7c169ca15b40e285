use super::types::{request, response};
use crate::{modules::subscription::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user_id = payload.filters.user.unwrap_or(payload.auth.user.id);

    repository::find_many_by_user_id(&ctx.db_conn.pool, user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchSubscriptions)
        .map(response::Success::Subscriptions)
}
