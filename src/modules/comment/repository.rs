use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use ulid::Ulid;

use crate::{
    modules::auth::permission::Owned,
    utils::pagination::{Paginated, Pagination},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Owned for Comment {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

pub struct CreateCommentPayload {
    pub user_id: String,
    pub post_id: String,
    pub content: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub post: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateCommentPayload) -> Result<Comment> {
    sqlx::query_as::<_, Comment>(
        "
        INSERT INTO comments (id, user_id, post_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.post_id)
    .bind(payload.content)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a comment: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Comment>> {
    sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching comment with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

/// Oldest first. `limit` caps the result when set.
pub async fn find_many_by_post_id<'e, E: PgExecutor<'e>>(
    e: E,
    post_id: &str,
    limit: Option<i64>,
) -> Result<Vec<Comment>> {
    sqlx::query_as::<_, Comment>(
        "
        SELECT * FROM comments
        WHERE post_id = $1
        ORDER BY created_at ASC, id ASC
        LIMIT $2
        ",
    )
    .bind(post_id)
    .bind(limit)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching comments of post {}: {}",
            post_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
    filters: &Filters,
) -> Result<Paginated<Comment>> {
    sqlx::query_as::<_, (Json<Vec<Comment>>, i64)>(
        "
        WITH filtered AS (
            SELECT * FROM comments
            WHERE $1::VARCHAR IS NULL OR post_id = $1
        ),
        page AS (
            SELECT * FROM filtered
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
        )
        SELECT
            COALESCE(
                (SELECT JSONB_AGG(ROW_TO_JSON(page) ORDER BY page.created_at DESC, page.id DESC) FROM page),
                '[]'::JSONB
            ) AS items,
            (SELECT COUNT(*) FROM filtered) AS total
        ",
    )
    .bind(filters.post.as_deref())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_one(e)
    .await
    .map(|(Json(comments), total)| Paginated::new(comments, total, pagination))
    .map_err(|err| {
        tracing::error!("Error occurred while fetching comments: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_content_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    content: String,
) -> Result<Option<Comment>> {
    sqlx::query_as::<_, Comment>(
        "
        UPDATE comments SET content = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        ",
    )
    .bind(content)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating comment with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting comment with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}
