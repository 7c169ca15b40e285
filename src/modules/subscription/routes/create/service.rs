use super::types::{request, response};
use crate::{
    modules::{restaurant, subscription::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToSubscribe)?
            .ok_or(response::Error::RestaurantNotFound)?;

    repository::create(&ctx.db_conn.pool, payload.auth.user.id, restaurant.id)
        .await
        .map_err(|err| match err {
            repository::Error::AlreadySubscribed => response::Error::AlreadySubscribed,
            repository::Error::UnexpectedError => response::Error::FailedToSubscribe,
        })
        .map(response::Success::Subscribed)
}
