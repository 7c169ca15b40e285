use super::types::{request, response};
use crate::{
    modules::{restaurant::repository, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let owner_id = payload
        .owner_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(response::Error::OwnerIdRequired)?;

    let owner = user::repository::find_by_id(&ctx.db_conn.pool, owner_id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)?
        .ok_or(response::Error::OwnerNotFound)?;

    repository::find_many_by_owner_id(&ctx.db_conn.pool, owner.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)
        .map(response::Success::Restaurants)
}
