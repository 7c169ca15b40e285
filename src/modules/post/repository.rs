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
pub struct Post {
    pub id: String,
    pub restaurant_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing, default)]
    pub owner_id: String,
}

impl Owned for Post {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct PostSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub post: Post,
    pub like_count: i64,
    pub comment_count: i64,
}

pub struct CreatePostPayload {
    pub restaurant_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub struct UpdatePostPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub restaurant: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_SUMMARY: &str = "
    SELECT
        posts.*,
        restaurants.owner_id,
        (SELECT COUNT(*) FROM likes WHERE likes.post_id = posts.id) AS like_count,
        (SELECT COUNT(*) FROM comments WHERE comments.post_id = posts.id) AS comment_count
    FROM posts
    INNER JOIN restaurants ON restaurants.id = posts.restaurant_id
    WHERE restaurants.deleted_at IS NULL
";

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreatePostPayload) -> Result<Post> {
    sqlx::query_as::<_, Post>(
        "
        WITH inserted AS (
            INSERT INTO posts (id, restaurant_id, title, description, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
        )
        SELECT inserted.*, restaurants.owner_id
        FROM inserted
        INNER JOIN restaurants ON restaurants.id = inserted.restaurant_id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.image_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a post: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Post>> {
    sqlx::query_as::<_, Post>(
        "
        SELECT posts.*, restaurants.owner_id
        FROM posts
        INNER JOIN restaurants ON restaurants.id = posts.restaurant_id
        WHERE posts.id = $1 AND restaurants.deleted_at IS NULL
        ",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching post with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_summary_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<PostSummary>> {
    sqlx::query_as::<_, PostSummary>(&format!("{SELECT_SUMMARY} AND posts.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching post with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
    filters: &Filters,
) -> Result<Paginated<PostSummary>> {
    sqlx::query_as::<_, (Json<Vec<PostSummary>>, i64)>(&format!(
        "
        WITH filtered AS (
            {SELECT_SUMMARY}
            AND ($1::VARCHAR IS NULL OR posts.restaurant_id = $1)
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
        "
    ))
    .bind(filters.restaurant.as_deref())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_one(e)
    .await
    .map(|(Json(posts), total)| Paginated::new(posts, total, pagination))
    .map_err(|err| {
        tracing::error!("Error occurred while fetching posts: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdatePostPayload,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE posts SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            image_url = COALESCE($3, image_url),
            updated_at = NOW()
        WHERE id = $4
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.image_url)
    .bind(&id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating post with id {}: {}", id, err);
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while deleting post with id {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|_| ())
}
