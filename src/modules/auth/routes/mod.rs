mod login;
mod logout;
mod refresh;
mod register;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/register", register::get_router())
        .nest("/login", login::get_router())
        .nest("/refresh", refresh::get_router())
        .nest("/logout", logout::get_router())
}

#[cfg(test)]
mod tests {
    use crate::{
        modules::auth::service::token::{self, TokenKind},
        utils::test::{self, request},
    };
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::PgPool;

    #[sqlx::test]
    async fn registering_a_taken_email_is_a_field_error(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let body = json!({ "name": "Aru", "email": "aru@example.com", "password": "Password1" });

        let (status, created) = test::send(
            &ctx,
            request(Method::POST, "/api/auth/register", None, body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["access"].is_string());

        let shouting = json!({ "name": "Aru", "email": "ARU@example.com", "password": "Password1" });
        for body in [body, shouting] {
            let (status, body) =
                test::send(&ctx, request(Method::POST, "/api/auth/register", None, body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["errors"]["email"][0]["code"], "EMAIL_TAKEN");
        }
    }

    #[sqlx::test]
    async fn concurrent_registrations_never_fail_with_a_server_error(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let register = || {
            test::send(
                &ctx,
                request(
                    Method::POST,
                    "/api/auth/register",
                    None,
                    json!({ "name": "Aru", "email": "aru@example.com", "password": "Password1" }),
                ),
            )
        };

        let ((first, _), (second, _)) = tokio::join!(register(), register());
        let mut statuses = [first, second];
        statuses.sort();

        assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    }

    #[sqlx::test]
    async fn login_rejects_a_wrong_password(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        test::send(
            &ctx,
            request(
                Method::POST,
                "/api/auth/register",
                None,
                json!({ "name": "Aru", "email": "aru@example.com", "password": "Password1" }),
            ),
        )
        .await;

        let (status, body) = test::send(
            &ctx,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "email": "aru@example.com", "password": "Password2" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email or password");

        let (status, body) = test::send(
            &ctx,
            request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "email": "aru@example.com", "password": "Password1" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["refresh"].is_string());
    }

    #[sqlx::test]
    async fn refresh_tokens_rotate(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (user, _) = test::signed_in(&ctx, "aru").await;
        let refresh = token::issue(&ctx.auth, &user.id, TokenKind::Refresh).unwrap();

        let (status, body) = test::send(
            &ctx,
            request(Method::POST, "/api/auth/refresh", None, json!({ "refresh": refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["access"].is_string());
        assert_ne!(body["refresh"], refresh.as_str());

        let (status, _) = test::send(
            &ctx,
            request(Method::POST, "/api/auth/refresh", None, json!({ "refresh": refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test]
    async fn logout_revokes_the_refresh_token_once(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (user, access) = test::signed_in(&ctx, "aru").await;
        let (_, other) = test::signed_in(&ctx, "other").await;
        let refresh = token::issue(&ctx.auth, &user.id, TokenKind::Refresh).unwrap();
        let logout = |bearer: &str, body| {
            request(Method::POST, "/api/auth/logout", Some(bearer), body)
        };

        let (status, body) = test::send(&ctx, logout(&access, json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Refresh token is required.");

        let (status, _) = test::send(&ctx, logout(&other, json!({ "refresh": refresh }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = test::send(&ctx, logout(&access, json!({ "refresh": refresh }))).await;
        assert_eq!(status, StatusCode::RESET_CONTENT);

        let (status, body) = test::send(&ctx, logout(&access, json!({ "refresh": refresh }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Token is invalid or expired.");

        let (status, _) = test::send(
            &ctx,
            request(Method::POST, "/api/auth/refresh", None, json!({ "refresh": refresh })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
