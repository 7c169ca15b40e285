use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::{modules::auth::permission::Owned, utils::database};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub liked_at: NaiveDateTime,
}

impl Owned for Like {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadyLiked,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, user_id: String, post_id: String) -> Result<Like, Error> {
    sqlx::query_as::<_, Like>(
        "
        INSERT INTO likes (id, user_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&user_id)
    .bind(&post_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::AlreadyLiked;
        }

        tracing::error!(
            "Error occurred while user {} liked post {}: {}",
            user_id,
            post_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Like>, Error> {
    sqlx::query_as::<_, Like>("SELECT * FROM likes WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching like with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Like>, Error> {
    sqlx::query_as::<_, Like>("SELECT * FROM likes WHERE user_id = $1 ORDER BY liked_at DESC")
        .bind(&user_id)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching likes of user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM likes WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while deleting like with id {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|_| ())
}

/// Returns `false` when the user had not liked the post.
pub async fn delete_by_user_and_post<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    post_id: String,
) -> Result<bool, Error> {
    sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
        .bind(&user_id)
        .bind(&post_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while user {} unliked post {}: {}",
                user_id,
                post_id,
                err
            );
            Error::UnexpectedError
        })
}
