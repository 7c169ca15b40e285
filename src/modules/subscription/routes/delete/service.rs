use super::types::{request, response};
use crate::{
    modules::{auth::permission, subscription::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let subscription = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUnsubscribe)?
        .ok_or(response::Error::SubscriptionNotFound)?;

    permission::ensure_owner(&payload.auth.user, &subscription)
        .map_err(|_| response::Error::NotSubscriptionOwner)?;

    repository::delete_by_id(&ctx.db_conn.pool, subscription.id)
        .await
        .map_err(|_| response::Error::FailedToUnsubscribe)
        .map(|_| response::Success::Unsubscribed)
}
