use super::types::{request, response};
use crate::{
    modules::{auth::permission, restaurant::repository},
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
        repository::find_first_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id.clone())
            .await
            .map_err(|_| response::Error::FailedToUpdateImage)?
            .ok_or(response::Error::RestaurantNotFound)?;

    permission::ensure_owner(&payload.auth.user, &restaurant)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        restaurant.id,
        repository::UpdateRestaurantPayload {
            name: None,
            description: None,
            image_url: Some(payload.body.image_url),
            address: None,
            address_link: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateImage)?
    .ok_or(response::Error::RestaurantNotFound)
    .map(response::Success::ImageUpdated)
}
