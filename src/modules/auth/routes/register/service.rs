use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{password, token},
        user,
    },
    types::Context,
    utils::validation::{field_error, validate_email_domain},
};
use std::{borrow::Cow, sync::Arc};
use validator::{Validate, ValidationError};

fn email_taken() -> response::Error {
    response::Error::FailedToValidate(field_error(
        "email",
        ValidationError::new("EMAIL_TAKEN")
            .with_message(Cow::from("A user with this email already exists.")),
    ))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.trim().to_lowercase();

    validate_email_domain(&email, &ctx.auth.allowed_email_domains)
        .map_err(|err| response::Error::FailedToValidate(field_error("email", err)))?;

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(email_taken());
    }

    let password_hash = password::hash_blocking(payload.password)
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email,
            name: payload.name.trim().to_string(),
            password_hash,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::DuplicateEmail => email_taken(),
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })?;

    let tokens = token::issue_pair(&ctx.auth, &user.id)
        .map_err(|_| response::Error::FailedToIssueTokens)?;

    tracing::info!("Registered user {}", user.id);

    Ok(response::Success::UserRegistered(response::Registered {
        id: user.id,
        name: user.name,
        email: user.email,
        tokens,
    }))
}
