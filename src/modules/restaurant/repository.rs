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
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub address_link: Option<String>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Owned for Restaurant {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub address_link: Option<String>,
    pub owner_id: String,
}

pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub address_link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub has_delivery: Option<bool>,
    pub has_image: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateRestaurantPayload) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (id, name, description, address, address_link, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.address)
    .bind(payload.address_link)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT * FROM restaurants WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurant with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// The owner's oldest live restaurant, which is the one acted on by
/// the `/profile` endpoints.
pub async fn find_first_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        SELECT * FROM restaurants
        WHERE owner_id = $1 AND deleted_at IS NULL
        ORDER BY created_at ASC, id ASC
        LIMIT 1
        ",
    )
    .bind(&owner_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurant of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        SELECT * FROM restaurants
        WHERE owner_id = $1 AND deleted_at IS NULL
        ORDER BY created_at ASC, id ASC
        ",
    )
    .bind(&owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurants of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
    filters: &Filters,
) -> Result<Paginated<Restaurant>> {
    sqlx::query_as::<_, (Json<Vec<Restaurant>>, i64)>(
        "
        WITH filtered AS (
            SELECT * FROM restaurants
            WHERE
                deleted_at IS NULL
                AND (
                    $1::BOOLEAN IS NULL
                    OR EXISTS (
                        SELECT 1 FROM delivery_links
                        WHERE delivery_links.restaurant_id = restaurants.id
                            AND delivery_links.is_active
                    ) = $1
                )
                AND (
                    $2::BOOLEAN IS NULL
                    OR (COALESCE(image_url, '') <> '') = $2
                )
        ),
        page AS (
            SELECT * FROM filtered
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
        )
        SELECT
            COALESCE(
                (SELECT JSONB_AGG(ROW_TO_JSON(page) ORDER BY page.created_at DESC, page.id DESC) FROM page),
                '[]'::JSONB
            ) AS items,
            (SELECT COUNT(*) FROM filtered) AS total
        ",
    )
    .bind(filters.has_delivery)
    .bind(filters.has_image)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_one(e)
    .await
    .map(|(Json(restaurants), total)| Paginated::new(restaurants, total, pagination))
    .map_err(|err| {
        tracing::error!("Error occurred while fetching restaurants: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            image_url = COALESCE($3, image_url),
            address = COALESCE($4, address),
            address_link = COALESCE($5, address_link),
            updated_at = NOW()
        WHERE id = $6 AND deleted_at IS NULL
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.image_url)
    .bind(payload.address)
    .bind(payload.address_link)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating restaurant with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn soft_delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("UPDATE restaurants SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting restaurant with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}
