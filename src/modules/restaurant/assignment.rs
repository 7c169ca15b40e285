//! Linking categories and delivery links to an owner's restaurant.
//!
//! `assign` replaces the current set with the requested ids, `unassign`
//! removes exactly the requested ids, and `toggle` picks one of the two
//! depending on whether any requested id is already linked.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use sqlx::PgConnection;
use validator::Validate;

use super::repository::Restaurant;
use crate::{
    modules::{category, delivery},
    utils::validation::validate_ids,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Assign,
    Unassign,
    Toggle,
}

#[derive(Debug, PartialEq)]
pub enum Assignment {
    Assign(Vec<String>),
    Unassign(Vec<String>),
}

/// Resolves what a request should do given the ids currently linked.
pub fn plan(mode: Mode, linked: &[String], requested: Vec<String>) -> Assignment {
    match mode {
        Mode::Assign => Assignment::Assign(requested),
        Mode::Unassign => Assignment::Unassign(requested),
        Mode::Toggle if requested.iter().any(|id| linked.contains(id)) => {
            Assignment::Unassign(requested)
        }
        Mode::Toggle => Assignment::Assign(requested),
    }
}

/// Drops repeated ids, keeping first occurrences in order.
pub fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound(Vec<String>),
    Forbidden,
    UnexpectedError,
}

#[async_trait]
pub trait Relationship: Send + Sync + 'static {
    type Body: DeserializeOwned + Validate + Send;

    /// Singular name used in response messages.
    const NAME: &'static str;

    fn ids(body: Self::Body) -> Vec<String>;

    /// Fails when an id is unknown or cannot be linked to `restaurant`.
    async fn verify(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error>;

    async fn linked_ids(conn: &mut PgConnection, restaurant: &Restaurant)
        -> Result<Vec<String>, Error>;

    async fn replace(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error>;

    async fn remove(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error>;
}

fn missing(requested: &[String], found: &[&str]) -> Vec<String> {
    requested
        .iter()
        .filter(|id| !found.contains(&id.as_str()))
        .cloned()
        .collect()
}

#[derive(Deserialize, Validate)]
pub struct CategoryIds {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one category id is required"),
        custom(function = "validate_ids")
    )]
    pub category_ids: Vec<String>,
}

pub struct Categories;

#[async_trait]
impl Relationship for Categories {
    type Body = CategoryIds;

    const NAME: &'static str = "Category";

    fn ids(body: Self::Body) -> Vec<String> {
        body.category_ids
    }

    async fn verify(
        conn: &mut PgConnection,
        _: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        let found = category::repository::find_many_by_ids(&mut *conn, ids)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        let found = found.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        match missing(ids, &found) {
            missing if missing.is_empty() => Ok(()),
            missing => Err(Error::NotFound(missing)),
        }
    }

    async fn linked_ids(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
    ) -> Result<Vec<String>, Error> {
        category::repository::find_ids_by_restaurant_id(&mut *conn, &restaurant.id)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn replace(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        category::repository::set_for_restaurant(conn, &restaurant.id, ids)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn remove(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        category::repository::remove_from_restaurant(&mut *conn, &restaurant.id, ids)
            .await
            .map_err(|_| Error::UnexpectedError)
    }
}

#[derive(Deserialize, Validate)]
pub struct DeliveryIds {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one delivery id is required"),
        custom(function = "validate_ids")
    )]
    pub delivery_ids: Vec<String>,
}

pub struct DeliveryLinks;

#[async_trait]
impl Relationship for DeliveryLinks {
    type Body = DeliveryIds;

    const NAME: &'static str = "Delivery";

    fn ids(body: Self::Body) -> Vec<String> {
        body.delivery_ids
    }

    async fn verify(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        let links = delivery::repository::find_many_by_ids(&mut *conn, ids)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        let found = links.iter().map(|l| l.id.as_str()).collect::<Vec<_>>();
        let missing = missing(ids, &found);
        if !missing.is_empty() {
            return Err(Error::NotFound(missing));
        }

        match links.iter().all(|link| link.restaurant_id == restaurant.id) {
            true => Ok(()),
            false => Err(Error::Forbidden),
        }
    }

    async fn linked_ids(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
    ) -> Result<Vec<String>, Error> {
        delivery::repository::find_active_ids_by_restaurant_id(&mut *conn, &restaurant.id)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn replace(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        delivery::repository::set_active_for_restaurant(&mut *conn, &restaurant.id, ids)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn remove(
        conn: &mut PgConnection,
        restaurant: &Restaurant,
        ids: &[String],
    ) -> Result<(), Error> {
        delivery::repository::deactivate_for_restaurant(&mut *conn, &restaurant.id, ids)
            .await
            .map_err(|_| Error::UnexpectedError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn toggle_without_overlap_assigns_the_requested_set() {
        assert_eq!(
            plan(Mode::Toggle, &ids(&["a", "b"]), ids(&["c", "d"])),
            Assignment::Assign(ids(&["c", "d"]))
        );
        assert_eq!(
            plan(Mode::Toggle, &[], ids(&["c"])),
            Assignment::Assign(ids(&["c"]))
        );
    }

    #[test]
    fn toggle_with_any_overlap_unassigns_exactly_the_requested_ids() {
        assert_eq!(
            plan(Mode::Toggle, &ids(&["a", "b"]), ids(&["b", "c"])),
            Assignment::Unassign(ids(&["b", "c"]))
        );
    }

    #[test]
    fn explicit_modes_ignore_the_current_links() {
        assert_eq!(
            plan(Mode::Assign, &ids(&["a"]), ids(&["a", "b"])),
            Assignment::Assign(ids(&["a", "b"]))
        );
        assert_eq!(
            plan(Mode::Unassign, &[], ids(&["a"])),
            Assignment::Unassign(ids(&["a"]))
        );
    }

    #[test]
    fn dedup_keeps_first_occurrences() {
        assert_eq!(dedup(ids(&["b", "a", "b", "c", "a"])), ids(&["b", "a", "c"]));
    }

    #[test]
    fn missing_reports_unknown_ids_in_request_order() {
        assert_eq!(missing(&ids(&["a", "b", "c"]), &["b"]), ids(&["a", "c"]));
        assert!(missing(&ids(&["a"]), &["a"]).is_empty());
    }

    #[test]
    fn empty_id_lists_fail_validation() {
        let body: CategoryIds = serde_json::from_str("{}").unwrap();
        assert!(body.validate().is_err());

        let body: DeliveryIds = serde_json::from_str(r#"{"delivery_ids": ["nope"]}"#).unwrap();
        assert!(body.validate().is_err());
    }
}
