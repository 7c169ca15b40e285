mod assign;
mod create;
mod delete;
mod delivery_links;
mod get;
mod image;
mod list;
mod owner;
mod update;

use super::assignment::{Categories, DeliveryLinks};
use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", create::get_router())
        .nest("/", list::get_router())
        .nest("/", owner::get_router())
        .nest(
            "/profile",
            Router::new()
                .nest("/", image::get_router())
                .nest("/categories", assign::get_router::<Categories>())
                .nest("/delivery", assign::get_router::<DeliveryLinks>()),
        )
        .nest("/", delivery_links::get_router())
        .nest("/", get::get_router())
        .nest("/", update::get_router())
        .nest("/", delete::get_router())
}

#[cfg(test)]
mod tests {
    use crate::{
        modules::{
            category, delivery,
            restaurant::repository,
            user::{self, repository::Role},
        },
        types::Context,
        utils::test::{self, request},
    };
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use std::sync::Arc;
    use ulid::Ulid;

    async fn restaurant_of(ctx: &Arc<Context>, token: &str, name: &str) -> String {
        let (status, body) = test::send(
            ctx,
            request(
                Method::POST,
                "/api/restaurants",
                Some(token),
                json!({ "name": name }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().expect("restaurant id").to_string()
    }

    async fn category(ctx: &Arc<Context>, name: &str) -> String {
        category::repository::create(
            &ctx.db_conn.pool,
            category::repository::CreateCategoryPayload {
                name: name.to_string(),
                description: None,
                icon_url: None,
            },
        )
        .await
        .expect("category should be stored")
        .id
    }

    async fn linked_categories(ctx: &Arc<Context>, restaurant_id: &str) -> Vec<String> {
        let mut ids = category::repository::find_ids_by_restaurant_id(&ctx.db_conn.pool, restaurant_id)
            .await
            .expect("category ids");
        ids.sort();
        ids
    }

    async fn post(ctx: &Arc<Context>, token: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        test::send(ctx, request(Method::POST, uri, Some(token), body)).await
    }

    fn sorted(ids: &[&String]) -> Vec<String> {
        let mut ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[sqlx::test]
    async fn strangers_cannot_change_a_restaurant(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (_, owner) = test::signed_in(&ctx, "owner").await;
        let (_, stranger) = test::signed_in(&ctx, "stranger").await;
        let id = restaurant_of(&ctx, &owner, "Diner").await;
        let uri = format!("/api/restaurants/{}", id);

        let (status, _) = test::send(
            &ctx,
            request(Method::PATCH, &uri, Some(&stranger), json!({ "name": "Mine now" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) =
            test::send(&ctx, request(Method::DELETE, &uri, Some(&stranger), Value::Null)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let restaurant = repository::find_by_id(&ctx.db_conn.pool, id.clone())
            .await
            .unwrap()
            .expect("restaurant should survive");
        assert_eq!(restaurant.name, "Diner");

        let (status, _) =
            test::send(&ctx, request(Method::DELETE, &uri, Some(&owner), Value::Null)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = test::send(&ctx, request(Method::GET, &uri, None, Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn missing_restaurants_are_not_found_before_ownership_is_checked(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (_, token) = test::signed_in(&ctx, "someone").await;
        let uri = format!("/api/restaurants/{}", Ulid::new());

        let (status, _) = test::send(
            &ctx,
            request(Method::PATCH, &uri, Some(&token), json!({ "name": "Ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            test::send(&ctx, request(Method::DELETE, &uri, Some(&token), Value::Null)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn first_restaurant_promotes_the_customer_once(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (customer, token) = test::signed_in(&ctx, "customer").await;
        assert_eq!(customer.role, Role::Customer);

        restaurant_of(&ctx, &token, "First").await;
        let promoted = user::repository::find_by_id(&ctx.db_conn.pool, customer.id.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(promoted.role, Role::Owner);
        assert!(promoted.updated_at.is_some());

        restaurant_of(&ctx, &token, "Second").await;
        let owner = user::repository::find_by_id(&ctx.db_conn.pool, customer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(owner.role, Role::Owner);
        assert_eq!(owner.updated_at, promoted.updated_at);
    }

    #[sqlx::test]
    async fn category_toggle_assigns_without_overlap_and_removes_with_it(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (_, token) = test::signed_in(&ctx, "owner").await;
        let restaurant_id = restaurant_of(&ctx, &token, "Diner").await;
        let (soup, grill, vegan) = (
            category(&ctx, "Soup").await,
            category(&ctx, "Grill").await,
            category(&ctx, "Vegan").await,
        );
        let toggle = "/api/restaurants/profile/categories";

        let (status, body) =
            post(&ctx, &token, toggle, json!({ "category_ids": [soup, grill] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category assigned successfully");
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&soup, &grill]));

        let (status, body) =
            post(&ctx, &token, toggle, json!({ "category_ids": [grill, vegan] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category unassigned successfully");
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&soup]));

        let (status, _) = post(&ctx, &token, toggle, json!({ "category_ids": [vegan] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&vegan]));

        let (status, _) = post(
            &ctx,
            &token,
            "/api/restaurants/profile/categories/assign",
            json!({ "category_ids": [soup, grill, soup] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&soup, &grill]));

        let (status, _) = post(
            &ctx,
            &token,
            "/api/restaurants/profile/categories/unassign",
            json!({ "category_ids": [grill] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&soup]));

        let (status, body) = post(
            &ctx,
            &token,
            "/api/restaurants/profile/categories/assign",
            json!({ "category_ids": [Ulid::new().to_string()] }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Category not found");
        assert_eq!(linked_categories(&ctx, &restaurant_id).await, sorted(&[&soup]));
    }

    #[sqlx::test]
    async fn category_assignment_needs_a_restaurant(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (_, token) = test::signed_in(&ctx, "customer").await;
        let soup = category(&ctx, "Soup").await;

        let (status, _) = post(
            &ctx,
            &token,
            "/api/restaurants/profile/categories/assign",
            json!({ "category_ids": [soup] }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn delivery_links_of_another_restaurant_are_forbidden(pool: PgPool) {
        let ctx = test::context_with_pool(pool);
        let (_, alice) = test::signed_in(&ctx, "alice").await;
        let (_, bob) = test::signed_in(&ctx, "bob").await;
        let alice_restaurant = restaurant_of(&ctx, &alice, "Alice's").await;
        let bob_restaurant = restaurant_of(&ctx, &bob, "Bob's").await;

        let mut links = vec![];
        for restaurant_id in [&alice_restaurant, &bob_restaurant] {
            let link = delivery::repository::create(
                &ctx.db_conn.pool,
                delivery::repository::CreateDeliveryLinkPayload {
                    restaurant_id: restaurant_id.clone(),
                    platform_name: "Glovo".to_string(),
                    platform_url: format!("https://glovo.example/{}", restaurant_id),
                },
            )
            .await
            .expect("delivery link should be stored");
            links.push(link.id);
        }
        let (alice_link, bob_link) = (links[0].clone(), links[1].clone());

        let (status, _) = post(
            &ctx,
            &bob,
            "/api/restaurants/profile/delivery/assign",
            json!({ "delivery_ids": [alice_link] }),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let untouched = delivery::repository::find_by_id(&ctx.db_conn.pool, alice_link.clone())
            .await
            .unwrap()
            .unwrap();
        assert!(untouched.is_active);

        let (status, _) = post(
            &ctx,
            &bob,
            "/api/restaurants/profile/delivery/unassign",
            json!({ "delivery_ids": [bob_link] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            delivery::repository::find_active_ids_by_restaurant_id(&ctx.db_conn.pool, &bob_restaurant)
                .await
                .unwrap()
                .is_empty()
        );

        let (status, body) = post(
            &ctx,
            &bob,
            "/api/restaurants/profile/delivery/assign",
            json!({ "delivery_ids": [bob_link] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Delivery assigned successfully");
        assert_eq!(
            delivery::repository::find_active_ids_by_restaurant_id(&ctx.db_conn.pool, &bob_restaurant)
                .await
                .unwrap(),
            vec![bob_link]
        );
    }
}
