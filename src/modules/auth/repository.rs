use chrono::NaiveDateTime;
use sqlx::PgExecutor;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct RevokeTokenPayload {
    pub jti: String,
    pub user_id: String,
    pub expires_at: NaiveDateTime,
}

/// Returns `false` when the token had already been revoked. Rows of tokens
/// expired past the decode leeway are purged on the way.
pub async fn revoke<'e, E: PgExecutor<'e>>(e: E, payload: RevokeTokenPayload) -> Result<bool, Error> {
    sqlx::query(
        "
        WITH purged AS (
            DELETE FROM revoked_tokens
            WHERE expires_at < (NOW() AT TIME ZONE 'UTC') - INTERVAL '1 minute'
        )
        INSERT INTO revoked_tokens (jti, user_id, expires_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (jti) DO NOTHING
        ",
    )
    .bind(payload.jti)
    .bind(payload.user_id)
    .bind(payload.expires_at)
    .execute(e)
    .await
    .map(|result| result.rows_affected() == 1)
    .map_err(|err| {
        tracing::error!("Error occurred while revoking a token: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::repository::{self as users, CreateUserPayload};
    use chrono::{Duration, Utc};
    use sqlx::PgPool;
    use ulid::Ulid;

    async fn user_id(pool: &PgPool) -> String {
        users::create(
            pool,
            CreateUserPayload {
                email: "aru@example.com".to_string(),
                name: "Aru".to_string(),
                password_hash: String::new(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn payload(user_id: &str, expires_at: NaiveDateTime) -> RevokeTokenPayload {
        RevokeTokenPayload {
            jti: Ulid::new().to_string(),
            user_id: user_id.to_string(),
            expires_at,
        }
    }

    async fn stored(pool: &PgPool) -> Vec<String> {
        sqlx::query_scalar::<_, String>("SELECT jti FROM revoked_tokens")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn a_token_is_revoked_once(pool: PgPool) {
        let user_id = user_id(&pool).await;
        let token = payload(&user_id, (Utc::now() + Duration::days(1)).naive_utc());
        let again = RevokeTokenPayload {
            jti: token.jti.clone(),
            ..payload(&user_id, token.expires_at)
        };

        assert!(revoke(&pool, token).await.unwrap());
        assert!(!revoke(&pool, again).await.unwrap());
    }

    #[sqlx::test]
    async fn expired_revocations_are_purged(pool: PgPool) {
        let user_id = user_id(&pool).await;
        let expired = payload(&user_id, (Utc::now() - Duration::hours(1)).naive_utc());
        let live = payload(&user_id, (Utc::now() + Duration::days(1)).naive_utc());
        let live_jti = live.jti.clone();

        assert!(revoke(&pool, expired).await.unwrap());
        assert!(revoke(&pool, live).await.unwrap());

        assert_eq!(stored(&pool).await, vec![live_jti]);
    }
}
