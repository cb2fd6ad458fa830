use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: u64 = 12;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Offset pagination request. Construct through [`PageRequest::new`] so that
/// `page >= 1` and `1 <= limit <= MAX_PAGE_LIMIT` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page = match page {
            Some(0) | None => 1,
            Some(p) => p,
        };
        let limit = match limit {
            Some(0) | None => DEFAULT_PAGE_LIMIT,
            Some(l) => l.min(MAX_PAGE_LIMIT),
        };

        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            limit: request.limit(),
            total,
        }
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_twelve() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 12);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn zero_values_fall_back_to_defaults() {
        let req = PageRequest::new(Some(0), Some(0));
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn limit_is_capped() {
        let req = PageRequest::new(Some(2), Some(10_000));
        assert_eq!(req.limit(), MAX_PAGE_LIMIT);
        assert_eq!(req.offset(), MAX_PAGE_LIMIT);
    }

    #[test]
    fn offset_follows_page() {
        let req = PageRequest::new(Some(3), Some(12));
        assert_eq!(req.offset(), 24);
    }

    #[test]
    fn total_pages_rounds_up() {
        let cases = [(0, 12, 0), (1, 12, 1), (12, 12, 1), (13, 12, 2), (25, 5, 5)];

        for (total, limit, expected) in cases {
            let page: PageResult<()> =
                PageResult::new(vec![], PageRequest::new(Some(1), Some(limit)), total);
            assert_eq!(page.total_pages(), expected, "total={total} limit={limit}");
        }
    }
}
