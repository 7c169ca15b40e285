use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::modules::auth::permission::Owned;

/// A link to a restaurant's page on a delivery platform. `is_active` marks
/// the link as currently assigned to the restaurant.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct DeliveryLink {
    pub id: String,
    pub restaurant_id: String,
    pub platform_name: String,
    pub platform_url: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    #[serde(skip_serializing)]
    pub owner_id: String,
}

impl Owned for DeliveryLink {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

pub struct CreateDeliveryLinkPayload {
    pub restaurant_id: String,
    pub platform_name: String,
    pub platform_url: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_WITH_OWNER: &str = "
    SELECT delivery_links.*, restaurants.owner_id
    FROM delivery_links
    INNER JOIN restaurants ON restaurants.id = delivery_links.restaurant_id
    WHERE restaurants.deleted_at IS NULL
";

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateDeliveryLinkPayload,
) -> Result<DeliveryLink, Error> {
    sqlx::query_as::<_, DeliveryLink>(
        "
        WITH inserted AS (
            INSERT INTO delivery_links (id, restaurant_id, platform_name, platform_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
        )
        SELECT inserted.*, restaurants.owner_id
        FROM inserted
        INNER JOIN restaurants ON restaurants.id = inserted.restaurant_id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.platform_name)
    .bind(payload.platform_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a delivery link: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<DeliveryLink>, Error> {
    sqlx::query_as::<_, DeliveryLink>(&format!("{SELECT_WITH_OWNER} AND delivery_links.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching delivery link with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: &[String],
) -> Result<Vec<DeliveryLink>, Error> {
    sqlx::query_as::<_, DeliveryLink>(&format!(
        "{SELECT_WITH_OWNER} AND delivery_links.id = ANY($1)"
    ))
    .bind(ids)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching delivery links {:?}: {}",
            ids,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
) -> Result<Vec<DeliveryLink>, Error> {
    sqlx::query_as::<_, DeliveryLink>(&format!(
        "{SELECT_WITH_OWNER} AND delivery_links.restaurant_id = $1 ORDER BY delivery_links.created_at ASC"
    ))
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching delivery links of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_active_ids_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
) -> Result<Vec<String>, Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT id FROM delivery_links WHERE restaurant_id = $1 AND is_active",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching active delivery links of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Activates exactly `ids` among the restaurant's links.
pub async fn set_active_for_restaurant<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
    ids: &[String],
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE delivery_links
        SET is_active = (id = ANY($2))
        WHERE restaurant_id = $1
        ",
    )
    .bind(restaurant_id)
    .bind(ids)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while assigning delivery links of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn deactivate_for_restaurant<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: &str,
    ids: &[String],
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE delivery_links
        SET is_active = FALSE
        WHERE restaurant_id = $1 AND id = ANY($2)
        ",
    )
    .bind(restaurant_id)
    .bind(ids)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while unassigning delivery links of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM delivery_links WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting delivery link with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}
