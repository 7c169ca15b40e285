use super::types::{request, response};
use crate::{
    modules::{delivery, restaurant::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_id(&ctx.db_conn.pool, payload.restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDeliveryLinks)?
        .ok_or(response::Error::RestaurantNotFound)?;

    delivery::repository::find_many_by_restaurant_id(&ctx.db_conn.pool, &restaurant.id)
        .await
        .map_err(|_| response::Error::FailedToFetchDeliveryLinks)
        .map(response::Success::DeliveryLinks)
}
