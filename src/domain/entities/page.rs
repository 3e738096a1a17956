//! Page container for windowed listings.

/// A bounded window over the full ordered entity set plus the total row
/// count.
///
/// `page` is the zero-based page index that was requested, `size` the
/// requested page size. `total_items` is the count of all rows in the
/// underlying table, independent of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_items: i64,
}

impl<T> Page<T> {
    /// Map the items of this page, keeping the pagination metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
        }
    }
}
