use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use std::fmt;
use ulid::Ulid;

use crate::utils::{
    database,
    pagination::{Paginated, Pagination},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Owner,
}

impl Role {
    /// The role a user moves to after creating their first restaurant.
    pub fn promotion(&self) -> Option<Role> {
        match self {
            Role::Customer => Some(Role::Owner),
            Role::Owner => None,
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_ref() {
            "customer" => Ok(Role::Customer),
            "owner" => Ok(Role::Owner),
            role => Err(format!("Invalid user role: {}", role)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Owner => write!(f, "owner"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    DuplicateEmail,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, name, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.name)
    .bind(payload.password_hash)
    .bind(Role::Customer.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::DuplicateEmail;
        }

        tracing::error!("Error occurred while creating a user account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
        .bind(&email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching user with email {}: {}",
                email,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
) -> Result<Paginated<User>> {
    sqlx::query_as::<_, (Json<Vec<User>>, i64)>(
        "
        WITH page AS (
            SELECT * FROM users
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
        )
        SELECT
            COALESCE(
                (SELECT JSONB_AGG(ROW_TO_JSON(page) ORDER BY page.created_at ASC, page.id ASC) FROM page),
                '[]'::JSONB
            ) AS items,
            (SELECT COUNT(*) FROM users) AS total
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_one(e)
    .await
    .map(|(Json(users), total)| Paginated::new(users, total, pagination))
    .map_err(|err| {
        tracing::error!("Error occurred while fetching users: {}", err);
        Error::UnexpectedError
    })
}

/// Persists the role column only. Returns `false` when the user already had
/// `role`, so concurrent promotions write it once.
pub async fn update_role_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    role: Role,
) -> Result<bool> {
    sqlx::query("UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2 AND role <> $1")
        .bind(role.to_string())
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() == 1)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while setting role of user {} to {}: {}",
                id,
                role,
                err
            );
            Error::UnexpectedError
        })
}

pub fn is_admin(user: &User) -> bool {
    user.is_admin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test;

    #[test]
    fn only_customers_get_promoted() {
        assert_eq!(Role::Customer.promotion(), Some(Role::Owner));
        assert_eq!(Role::Owner.promotion(), None);
    }

    #[test]
    fn roles_round_trip_through_their_column_value() {
        for role in [Role::Customer, Role::Owner] {
            assert_eq!(Role::try_from(role.to_string()), Ok(role));
        }
        assert!(Role::try_from("admin".to_string()).is_err());
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = test::user("01HZY3J8N0Q9W2XKX7T6B5C4D3", Role::Customer);
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "customer");
    }

    fn payload(email: &str) -> CreateUserPayload {
        CreateUserPayload {
            email: email.to_string(),
            name: "Aru".to_string(),
            password_hash: String::new(),
        }
    }

    #[sqlx::test]
    async fn duplicate_emails_are_reported_as_such(pool: sqlx::PgPool) {
        create(&pool, payload("aru@example.com")).await.unwrap();

        assert!(matches!(
            create(&pool, payload("aru@example.com")).await,
            Err(Error::DuplicateEmail)
        ));
    }

    #[sqlx::test]
    async fn role_is_written_only_when_it_changes(pool: sqlx::PgPool) {
        let user = create(&pool, payload("aru@example.com")).await.unwrap();

        assert!(update_role_by_id(&pool, user.id.clone(), Role::Owner).await.unwrap());
        assert!(!update_role_by_id(&pool, user.id.clone(), Role::Owner).await.unwrap());

        let stored = find_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(stored.role, Role::Owner);
    }
}
