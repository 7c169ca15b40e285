use super::types::{request, response};
use crate::{
    modules::{
        auth::permission,
        restaurant::{
            assignment::{self, Assignment, Relationship},
            repository,
        },
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

fn into_error<R: Relationship>(err: assignment::Error) -> response::Error {
    match err {
        assignment::Error::NotFound(ids) => response::Error::NotFound(R::NAME, ids),
        assignment::Error::Forbidden => response::Error::NotRestaurantOwner,
        assignment::Error::UnexpectedError => response::Error::FailedToUpdateAssignment,
    }
}

pub async fn service<R: Relationship>(
    ctx: Arc<Context>,
    payload: request::Payload<R::Body>,
) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let ids = assignment::dedup(R::ids(payload.body));

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateAssignment
    })?;

    let restaurant = repository::find_first_by_owner_id(&mut *tx, payload.auth.user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateAssignment)?
        .ok_or(response::Error::RestaurantNotFound)?;

    permission::ensure_owner(&payload.auth.user, &restaurant)
        .map_err(|_| response::Error::NotRestaurantOwner)?;

    R::verify(&mut *tx, &restaurant, &ids)
        .await
        .map_err(into_error::<R>)?;

    let linked = R::linked_ids(&mut *tx, &restaurant)
        .await
        .map_err(into_error::<R>)?;

    let success = match assignment::plan(payload.mode, &linked, ids) {
        Assignment::Assign(ids) => {
            R::replace(&mut *tx, &restaurant, &ids)
                .await
                .map_err(into_error::<R>)?;
            response::Success::Assigned(R::NAME)
        }
        Assignment::Unassign(ids) => {
            R::remove(&mut *tx, &restaurant, &ids)
                .await
                .map_err(into_error::<R>)?;
            response::Success::Unassigned(R::NAME)
        }
    };

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToUpdateAssignment
        })
        .map(|_| success)
}
