use serde::Serialize;

/// One page of an ordered result sequence.
///
/// `total_pages` is `None` when the query never produced a sequence to paginate (for example a
/// recommendation request whose product name matched nothing).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: Option<usize>,
    pub current_page: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: usize, current_page: i64) -> Self {
        Self { items, total_pages: Some(total_pages), current_page }
    }

    pub fn unresolved(current_page: i64) -> Self {
        Self { items: Vec::new(), total_pages: None, current_page }
    }
}
