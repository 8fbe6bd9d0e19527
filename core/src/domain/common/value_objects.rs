use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 1-based page request. `per_page` is clamped to 1..=100 at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageQuery {
    pub page: u64,
    pub per_page: u64,
}

impl PageQuery {
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(10).clamp(1, 100),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of repository results plus the unpaged row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_and_clamps() {
        let q = PageQuery::new(None, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 10);

        let q = PageQuery::new(Some(0), Some(1000));
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 100);
    }

    #[test]
    fn offset_is_zero_based() {
        let q = PageQuery::new(Some(3), Some(20));
        assert_eq!(q.offset(), 40);
        assert_eq!(q.limit(), 20);
    }
}
