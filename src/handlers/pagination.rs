//! Offset/limit pagination shared by list endpoints

use serde::Deserialize;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// `?offset=&limit=` query for list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Effective `(offset, limit)` pair
    pub fn window(&self) -> (i64, i64) {
        page_window(self.offset, self.limit)
    }
}

/// Clamp raw paging parameters: offset is never negative, limit stays in `1..=MAX_PAGE_SIZE`
pub fn page_window(offset: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let offset = offset.unwrap_or(0).max(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (offset, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ListQuery::default().window(), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(page_window(Some(-5), Some(0)), (0, 1));
        assert_eq!(page_window(Some(20), Some(10_000)), (20, MAX_PAGE_SIZE));
        assert_eq!(page_window(None, Some(25)), (0, 25));
    }
}
