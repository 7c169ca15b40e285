use super::types::{request, response};
use crate::{
    modules::auth::{
        repository,
        service::token::{self, TokenKind},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let refresh = payload
        .body
        .refresh
        .filter(|token| !token.trim().is_empty())
        .ok_or(response::Error::RefreshTokenRequired)?;

    let claims = token::decode(&ctx.auth, &refresh, TokenKind::Refresh)
        .map_err(|_| response::Error::InvalidRefreshToken)?;

    // Users may only revoke their own sessions.
    if claims.sub != payload.auth.user.id {
        return Err(response::Error::InvalidRefreshToken);
    }

    let expires_at = claims.expires_at();
    let revoked = repository::revoke(
        &ctx.db_conn.pool,
        repository::RevokeTokenPayload {
            jti: claims.jti,
            user_id: claims.sub,
            expires_at,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToLogout)?;

    match revoked {
        true => Ok(response::Success::LoggedOut),
        false => Err(response::Error::InvalidRefreshToken),
    }
}
