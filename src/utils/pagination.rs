use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

const MAX_PER_PAGE: u32 = 100;

#[derive(Serialize, Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginatedMeta,
}

#[derive(Serialize, Clone, Debug)]
pub struct PaginatedMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Paginated<T> {
        Self {
            items,
            meta: PaginatedMeta {
                total: u32::try_from(total).unwrap_or(u32::MAX),
                page: pagination.page,
                per_page: pagination.per_page,
            },
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    fn is_valid(&self) -> bool {
        self.page >= 1 && (1..=MAX_PER_PAGE).contains(&self.per_page)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Pagination>>().await {
            Ok(Query(pagination)) if pagination.is_valid() => Ok(pagination),
            _ => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid pagination options"})),
            )
                .into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_derived_from_page() {
        let pagination = Pagination {
            page: 3,
            per_page: 20,
        };

        assert_eq!(pagination.limit(), 20);
        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn zero_page_and_oversized_pages_are_rejected() {
        assert!(!Pagination { page: 0, per_page: 10 }.is_valid());
        assert!(!Pagination { page: 1, per_page: 0 }.is_valid());
        assert!(!Pagination { page: 1, per_page: 101 }.is_valid());
        assert!(Pagination { page: 1, per_page: 100 }.is_valid());
    }

    #[test]
    fn meta_echoes_the_request() {
        let pagination = Pagination {
            page: 2,
            per_page: 5,
        };
        let paginated = Paginated::new(vec!["a", "b"], 7, &pagination);

        assert_eq!(paginated.meta.total, 7);
        assert_eq!(paginated.meta.page, 2);
        assert_eq!(paginated.meta.per_page, 5);
    }
}
