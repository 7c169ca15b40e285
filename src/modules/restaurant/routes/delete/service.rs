use super::types::{request, response};
use crate::{
    modules::{auth::permission, restaurant::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    permission::ensure_owner(&payload.auth.user, &restaurant)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    repository::soft_delete_by_id(&ctx.db_conn.pool, restaurant.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteRestaurant)
        .map(|_| response::Success::RestaurantDeleted)
}
