use super::types::{request, response};
use crate::{
    modules::{category, delivery, restaurant::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let categories =
        category::repository::find_many_by_restaurant_id(&ctx.db_conn.pool, &restaurant.id)
            .await
            .map_err(|_| response::Error::FailedToFetchRestaurant)?;

    let delivery_links =
        delivery::repository::find_many_by_restaurant_id(&ctx.db_conn.pool, &restaurant.id)
            .await
            .map_err(|_| response::Error::FailedToFetchRestaurant)?;

    Ok(response::Success::Restaurant(response::RestaurantDetails {
        restaurant,
        categories,
        delivery_links,
    }))
}
