use super::{auth, category, comment, like, post, restaurant, subscription, user};
use crate::types::Context;
use axum::{extract::Json, http::StatusCode, response::IntoResponse, routing::get, Router};
use serde_json::json;
use std::sync::Arc;

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Eatly API is up and running" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health))
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/restaurants", restaurant::get_router())
        .nest("/categories", category::get_router())
        .nest("/posts", post::get_router())
        .nest("/comments", comment::get_router())
        .nest("/likes", like::get_router())
        .nest("/subscriptions", subscription::get_router())
}

#[cfg(test)]
mod tests {
    use crate::{
        modules::auth::service::token::{self, TokenKind},
        utils::test::{self, request},
    };
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        test::send(&test::context(), req).await
    }

    #[tokio::test]
    async fn health_check_responds() {
        let (status, body) = send(
            Request::builder()
                .uri("/api")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn owner_scoped_actions_require_a_session() {
        let cases = [
            (Method::POST, "/api/restaurants", json!({ "name": "Diner" })),
            (Method::PATCH, "/api/restaurants/01J0000000000000000000000", json!({})),
            (Method::DELETE, "/api/restaurants/01J0000000000000000000000", json!({})),
            (Method::PUT, "/api/restaurants/profile/image", json!({ "image_url": "https://x.io/a.png" })),
            (Method::POST, "/api/restaurants/profile/categories", json!({ "category_ids": [] })),
            (Method::POST, "/api/restaurants/profile/categories/assign", json!({ "category_ids": [] })),
            (Method::POST, "/api/restaurants/profile/delivery/unassign", json!({ "delivery_ids": [] })),
            (Method::POST, "/api/posts", json!({ "title": "Hello" })),
            (Method::DELETE, "/api/comments/01J0000000000000000000000", json!({})),
            (Method::POST, "/api/categories", json!({ "name": "Soup" })),
        ];

        for (method, uri, body) in cases {
            let (status, body) = send(request(method.clone(), uri, None, body)).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
            assert_eq!(body["error"], "Invalid session token");
        }
    }

    #[tokio::test]
    async fn refresh_tokens_are_not_accepted_as_sessions() {
        let ctx = test::context();
        let refresh = token::issue(&ctx.auth, "01J0000000000000000000000", TokenKind::Refresh).unwrap();

        let (status, _) = send(request(
            Method::GET,
            "/api/users/profile",
            Some(&refresh),
            Value::Null,
        ))
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tampered_tokens_are_rejected() {
        let ctx = test::context();
        let access = token::issue(&ctx.auth, "01J0000000000000000000000", TokenKind::Access).unwrap();
        let tampered = format!("{}x", access);

        for token in [tampered.as_str(), "not-a-jwt"] {
            let (status, _) = send(request(
                Method::GET,
                "/api/users/profile",
                Some(token),
                Value::Null,
            ))
            .await;

            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn invalid_registration_reports_field_errors() {
        let (status, body) = send(request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({ "name": "", "email": "not-an-email", "password": "short" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        for field in ["name", "email", "password"] {
            assert!(body["errors"][field].is_array(), "missing error for {}", field);
        }
    }

    #[tokio::test]
    async fn weak_passwords_are_rejected() {
        let (status, body) = send(request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({ "name": "Aru", "email": "aru@example.com", "password": "alllowercase1" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["password"][0]["code"], "PASSWORD_NO_UPPER");
    }

    #[tokio::test]
    async fn invalid_login_reports_field_errors() {
        let (status, body) = send(request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": "nope" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["email"].is_array());
        assert!(body["errors"]["password"].is_array());
    }

    #[tokio::test]
    async fn invalid_pagination_is_rejected() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/posts?page=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid pagination options");
    }
}
