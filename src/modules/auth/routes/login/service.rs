use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{password, token},
        user,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, payload.email.trim().to_string())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .filter(|user| user.is_active)
        .ok_or(response::Error::InvalidCredentials)?;

    let verified = password::verify_blocking(payload.password, user.password_hash.clone())
        .await
        .map_err(|_| response::Error::InvalidCredentials)?;

    if !verified {
        return Err(response::Error::InvalidCredentials);
    }

    let tokens = token::issue_pair(&ctx.auth, &user.id)
        .map_err(|_| response::Error::FailedToIssueTokens)?;

    Ok(response::Success::LoggedIn((user, tokens)))
}
