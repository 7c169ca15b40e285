use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::{modules::auth::permission::Owned, utils::database};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub subscribed_at: NaiveDateTime,
}

impl Owned for Subscription {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadySubscribed,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    restaurant_id: String,
) -> Result<Subscription, Error> {
    sqlx::query_as::<_, Subscription>(
        "
        INSERT INTO subscriptions (id, user_id, restaurant_id)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&user_id)
    .bind(&restaurant_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::AlreadySubscribed;
        }

        tracing::error!(
            "Error occurred while subscribing user {} to restaurant {}: {}",
            user_id,
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Subscription>, Error> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching subscription with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Subscription>, Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY subscribed_at DESC",
    )
    .bind(&user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching subscriptions of user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM subscriptions WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting subscription with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}
