use super::types::{request, response};
use crate::{
    modules::{
        auth::{
            repository,
            service::token::{self, TokenKind},
        },
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let claims = token::decode(&ctx.auth, &payload.refresh, TokenKind::Refresh)
        .map_err(|_| response::Error::InvalidRefreshToken)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToRefreshTokens
    })?;

    user::repository::find_by_id(&mut *tx, claims.sub.clone())
        .await
        .map_err(|_| response::Error::FailedToRefreshTokens)?
        .filter(|user| user.is_active)
        .ok_or(response::Error::InvalidRefreshToken)?;

    let revoked = repository::revoke(
        &mut *tx,
        repository::RevokeTokenPayload {
            jti: claims.jti.clone(),
            user_id: claims.sub.clone(),
            expires_at: claims.expires_at(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToRefreshTokens)?;

    // A token that was already revoked must not be exchanged twice.
    if !revoked {
        return Err(response::Error::InvalidRefreshToken);
    }

    let tokens = token::issue_pair(&ctx.auth, &claims.sub)
        .map_err(|_| response::Error::FailedToRefreshTokens)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToRefreshTokens
        })
        .map(|_| response::Success::Tokens(tokens))
}
