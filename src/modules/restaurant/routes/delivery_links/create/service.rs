use super::types::{request, response};
use crate::{
    modules::{delivery, restaurant::repository},
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
            .map_err(|_| response::Error::FailedToCreateDeliveryLink)?
            .ok_or(response::Error::RestaurantNotFound)?;

    delivery::repository::create(
        &ctx.db_conn.pool,
        delivery::repository::CreateDeliveryLinkPayload {
            restaurant_id: restaurant.id,
            platform_name: payload.body.platform_name.trim().to_string(),
            platform_url: payload.body.platform_url,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateDeliveryLink)
    .map(response::Success::DeliveryLinkCreated)
}
