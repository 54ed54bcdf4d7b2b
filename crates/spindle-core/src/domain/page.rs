//! Listing results for the two pagination strategies.

use super::cursor::Cursor;
use super::task::Task;

/// Result of an offset-based listing.
#[derive(Debug, Clone)]
pub struct OffsetPage {
    pub items: Vec<Task>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
}

impl OffsetPage {
    /// ceil(total_count / page_size).
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }
}

/// Result of a cursor-based listing. `next_cursor` is present iff more
/// matching records remain beyond the returned page.
#[derive(Debug, Clone)]
pub struct CursorPage {
    pub items: Vec<Task>,
    pub next_cursor: Option<Cursor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(3, 2, 2)]
    fn total_pages_rounds_up(#[case] total: u64, #[case] size: u64, #[case] expected: u64) {
        let page = OffsetPage {
            items: Vec::new(),
            total_count: total,
            page: 1,
            page_size: size,
        };
        assert_eq!(page.total_pages(), expected);
    }
}
