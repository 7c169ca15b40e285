use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, restaurant::repository, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateRestaurant
    })?;

    let restaurant = repository::create(
        &mut *tx,
        repository::CreateRestaurantPayload {
            name: payload.name.trim().to_string(),
            description: payload.description,
            address: payload.address,
            address_link: payload.address_link,
            owner_id: auth.user.id.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    if let Some(role) = auth.user.role.promotion() {
        let promoted = user::repository::update_role_by_id(&mut *tx, auth.user.id.clone(), role)
            .await
            .map_err(|_| response::Error::FailedToCreateRestaurant)?;

        if promoted {
            tracing::info!("Promoted user {} to {}", auth.user.id, role);
        }
    }

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToCreateRestaurant
        })
        .map(|_| response::Success::RestaurantCreated(restaurant))
}
