use std::ops::Range;

use crate::errors::EngineError;

/// Caller-supplied page coordinates. `page` is echoed back verbatim, even when it falls
/// outside the available pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: i64, page_size: usize) -> Result<Self, EngineError> {
        if page_size == 0 {
            return Err(EngineError::InvalidInput("page size must be at least 1".to_string()));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero for an empty sequence.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Unclamped `[start, end)` positions of the requested page. `start` is negative for
    /// pages below 1; extreme coordinates saturate at the `i128` range.
    pub fn bounds(&self) -> (i128, i128) {
        let page_size = self.page_size as i128;
        let start = (i128::from(self.page) - 1).saturating_mul(page_size);
        (start, start.saturating_add(page_size))
    }

    /// Page window clamped to `[0, total]`.
    pub fn window(&self, total: usize) -> Range<usize> {
        let (start, end) = self.bounds();
        let clamp = |value: i128| value.clamp(0, total as i128) as usize;
        clamp(start)..clamp(end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;
    use crate::errors::EngineError;

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(PageRequest::new(1, 0), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn window_is_clamped_to_the_sequence() {
        let request = PageRequest::new(3, 4).expect("valid request");
        assert_eq!(request.window(10), 8..10);
        assert_eq!(request.window(5), 5..5);
        assert_eq!(request.total_pages(10), 3);
        assert_eq!(request.total_pages(0), 0);
    }

    #[test]
    fn pages_below_one_yield_empty_windows() {
        assert_eq!(PageRequest::new(0, 10).expect("valid").window(25), 0..0);
        assert_eq!(PageRequest::new(-2, 10).expect("valid").window(25), 0..0);
    }

    #[test]
    fn extreme_coordinates_clamp_instead_of_overflowing() {
        let lowest = PageRequest::new(i64::MIN, usize::MAX).expect("valid");
        assert_eq!(lowest.window(25), 0..0);

        let highest = PageRequest::new(i64::MAX, usize::MAX).expect("valid");
        assert_eq!(highest.window(25), 25..25);
        assert_eq!(highest.slice(&[1, 2, 3]), &[] as &[i32]);
    }

    #[test]
    fn item_count_matches_pagination_formula() {
        for total in 0..30usize {
            for page_size in 1..7usize {
                for page in -1..8i64 {
                    let request = PageRequest::new(page, page_size).expect("valid");
                    let items: Vec<usize> = (0..total).collect();
                    let offset = (page - 1) * page_size as i64;
                    let expected =
                        (page_size as i64).min((total as i64 - offset).max(0)).max(0) as usize;
                    let expected = if page < 1 { 0 } else { expected };
                    assert_eq!(request.slice(&items).len(), expected, "total={total} page={page}");
                }
            }
        }
    }
}
