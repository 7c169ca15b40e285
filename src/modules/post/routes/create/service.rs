use super::types::{request, response};
use crate::{
    modules::{auth::permission, post::repository, restaurant},
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
            .map_err(|_| response::Error::FailedToCreatePost)?
            .ok_or(response::Error::RestaurantNotFound)?;

    permission::ensure_owner(&payload.auth.user, &restaurant)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreatePostPayload {
            restaurant_id: restaurant.id,
            title: payload.body.title.trim().to_string(),
            description: payload.body.description,
            image_url: payload.body.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreatePost)
    .map(response::Success::PostCreated)
}
