use larder_core::domain::common::value_objects::{PageQuery, Paged};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    #[param(example = 1)]
    pub page: Option<u64>,
    #[param(example = 10)]
    pub per_page: Option<u64>,
}

impl From<PaginationQuery> for PageQuery {
    fn from(query: PaginationQuery) -> Self {
        PageQuery::new(query.page, query.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: &PageQuery) -> Self {
        let pages = total.div_ceil(page.per_page).max(1);

        Self {
            items,
            pagination: PageInfo {
                page: page.page,
                per_page: page.per_page,
                total,
                pages,
                has_prev: page.page > 1,
                has_next: page.page < pages,
            },
        }
    }

    pub fn from_paged<U>(paged: Paged<U>, page: &PageQuery, map: impl Fn(U) -> T) -> Self {
        let items = paged.items.into_iter().map(map).collect();
        Self::new(items, paged.total, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_info_for_middle_page() {
        let page = PageQuery::new(Some(2), Some(10));
        let paginated = Paginated::new(vec![1, 2, 3], 35, &page);

        assert_eq!(paginated.pagination.pages, 4);
        assert!(paginated.pagination.has_prev);
        assert!(paginated.pagination.has_next);
    }

    #[test]
    fn page_info_for_single_page() {
        let page = PageQuery::new(Some(1), Some(10));
        let paginated = Paginated::new(vec![1], 1, &page);

        assert_eq!(paginated.pagination.pages, 1);
        assert!(!paginated.pagination.has_prev);
        assert!(!paginated.pagination.has_next);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let page = PageQuery::new(Some(1), Some(10));
        let paginated = Paginated::new(Vec::<i32>::new(), 0, &page);

        assert_eq!(paginated.pagination.pages, 1);
        assert!(!paginated.pagination.has_next);
    }
}
