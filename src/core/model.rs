//! Defines application business models.

use crate::PER_PAGE;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use validify::Validate;

pub mod account;
pub mod company;
pub mod employee;

/// Used to obtain paginated lists with the total number of items in
/// the tables.
#[derive(Debug, Serialize)]
pub struct List<T> {
    /// Total amount of records, across all pages.
    pub total: usize,

    /// The current page, starting from 1.
    pub page: usize,

    pub per_page: usize,

    /// The last page that can contain items. Always at least 1.
    pub last_page: usize,

    pub items: Vec<T>,
}

impl<T> List<T> {
    pub fn new(p: Pagination, total: usize, items: Vec<T>) -> Self {
        Self {
            total,
            page: p.page,
            per_page: p.per_page,
            last_page: p.last_page(total),
            items,
        }
    }

    /// Project every item while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> List<U> {
        List {
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            last_page: self.last_page,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Used to paginate queries.
#[derive(Debug, Clone, Copy, Validate)]
pub struct Pagination {
    /// The limit.
    #[validate(range(min = 1., max = 1000.))]
    pub per_page: usize,

    /// The page, starting from 1.
    #[validate(range(min = 1., max = 100000000.))]
    pub page: usize,
}

impl Pagination {
    pub fn new(per_page: usize, page: usize) -> Self {
        Self { per_page, page }
    }

    /// Pagination with the application wide page size.
    pub fn page(page: usize) -> Self {
        Self::new(PER_PAGE, page)
    }

    /// Returns a tuple whose first element is the LIMIT and second
    /// the OFFSET for the query.
    pub fn to_limit_offset(&self) -> (i64, i64) {
        let Self { page, per_page } = *self;
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        (
            i64::try_from(per_page).unwrap_or(i64::MAX),
            i64::try_from(offset).unwrap_or(i64::MAX),
        )
    }

    /// The number of the last page for `total` records.
    pub fn last_page(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.max(1)).max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::page(1)
    }
}

/// Query parameters of list pages. The page size is fixed, only the page can be chosen.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<usize>,
}

impl From<PageQuery> for Pagination {
    fn from(value: PageQuery) -> Self {
        Pagination::page(value.page.unwrap_or(1))
    }
}
