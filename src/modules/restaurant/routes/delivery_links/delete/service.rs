use super::types::{request, response};
use crate::{
    modules::{auth::permission, delivery::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let link = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDeliveryLink)?
        .ok_or(response::Error::DeliveryLinkNotFound)?;

    permission::ensure_owner(&payload.auth.user, &link)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    repository::delete_by_id(&ctx.db_conn.pool, link.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDeliveryLink)
        .map(|_| response::Success::DeliveryLinkDeleted)
}
