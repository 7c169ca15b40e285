use super::types::{request, response};
use crate::{modules::category::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateCategoryPayload {
            name: payload.name.trim().to_string(),
            description: payload.description,
            icon_url: payload.icon_url,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::DuplicateName => response::Error::CategoryAlreadyExists,
        repository::Error::UnexpectedError => response::Error::FailedToCreateCategory,
    })
    .map(response::Success::CategoryCreated)
}
