use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor};
use ulid::Ulid;

use crate::utils::database;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreateCategoryPayload {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    DuplicateName,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateCategoryPayload,
) -> Result<Category, Error> {
    sqlx::query_as::<_, Category>(
        "
        INSERT INTO categories (id, name, description, icon_url)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.icon_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::DuplicateName;
        }

        tracing::error!("Error occurred while creating a category: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: &[String],
) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching categories {:?}: {}", ids, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>(
        "
        SELECT categories.*
        FROM categories
        INNER JOIN restaurant_categories
            ON restaurant_categories.category_id = categories.id
        WHERE restaurant_categories.restaurant_id = $1
        ORDER BY categories.name ASC
        ",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching categories of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_ids_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
) -> Result<Vec<String>, Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT category_id FROM restaurant_categories WHERE restaurant_id = $1",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching category ids of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Makes `ids` the exact category set of the restaurant.
pub async fn set_for_restaurant(
    conn: &mut PgConnection,
    restaurant_id: &str,
    ids: &[String],
) -> Result<(), Error> {
    sqlx::query(
        "
        DELETE FROM restaurant_categories
        WHERE restaurant_id = $1 AND NOT (category_id = ANY($2))
        ",
    )
    .bind(restaurant_id)
    .bind(ids)
    .execute(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while clearing categories of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })?;

    sqlx::query(
        "
        INSERT INTO restaurant_categories (restaurant_id, category_id)
        SELECT $1, UNNEST($2::VARCHAR[])
        ON CONFLICT (restaurant_id, category_id) DO NOTHING
        ",
    )
    .bind(restaurant_id)
    .bind(ids)
    .execute(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while assigning categories to restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn remove_from_restaurant<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
    ids: &[String],
) -> Result<(), Error> {
    sqlx::query(
        "
        DELETE FROM restaurant_categories
        WHERE restaurant_id = $1 AND category_id = ANY($2)
        ",
    )
    .bind(restaurant_id)
    .bind(ids)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while unassigning categories from restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}
