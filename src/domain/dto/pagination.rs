//! 페이지네이션 쿼리 파라미터

use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;

/// `?limit=&offset=` 쿼리
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PaginationQuery {
    #[validate(range(min = 0, max = 50, message = "limit must be between 0 and 50"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "offset must not be less than 0"))]
    pub offset: Option<i64>,
}

impl PaginationQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_bounds() {
        let query = PaginationQuery { limit: Some(51), offset: Some(-1) };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("limit"));
        assert!(errors.field_errors().contains_key("offset"));

        let query = PaginationQuery { limit: Some(0), offset: Some(5) };
        assert!(query.validate().is_ok());
        assert_eq!(query.limit(), 0);
    }
}
