use super::types::{request, response};
use crate::{
    modules::{auth::permission, restaurant::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    permission::ensure_owner(&payload.auth.user, &restaurant)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateRestaurantPayload {
            name: payload.body.name.map(|name| name.trim().to_string()),
            description: payload.body.description,
            image_url: payload.body.image_url,
            address: payload.body.address,
            address_link: payload.body.address_link,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateRestaurant)?
    .ok_or(response::Error::RestaurantNotFound)
    .map(response::Success::RestaurantUpdated)
}
