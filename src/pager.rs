//! Client-side pagination state.
//!
//! [`PageState`] tracks the page size and the zero-based page index, and
//! knows how to slice a row collection into the current page. It does not
//! hold the rows themselves; callers pass the row count (or slice) in.
//!
//! The page index is deliberately never clamped. Navigation guards
//! ([`PageState::next_page`], [`PageState::prev_page`], and the
//! [`can_prev`](PageState::can_prev)/[`can_next`](PageState::can_next) flags
//! for external controls) are what keep it in range; an index set out of
//! range directly yields an empty page, not an error or a reset.

/// Page size and position over a paged row collection.
///
/// # Examples
///
/// ```
/// use headless_table::pager::PageState;
///
/// let mut pager = PageState::new().with_page_size(10);
/// let rows: Vec<u32> = (0..25).collect();
///
/// assert_eq!(pager.slice_bounds(rows.len()), (0, 10));
/// assert_eq!(pager.total_pages(rows.len()), 2);
///
/// pager.next_page(rows.len());
/// pager.next_page(rows.len());
/// let (start, end) = pager.slice_bounds(rows.len());
/// assert_eq!(&rows[start..end], [20, 21, 22, 23, 24]);
/// assert!(!pager.can_next(rows.len()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    page_index: usize,
}

impl Default for PageState {
    /// Ten rows per page, starting on the first page.
    fn default() -> Self {
        Self {
            page_size: 10,
            page_index: 0,
        }
    }
}

impl PageState {
    /// Creates page state with the default size of 10 and index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Sizes below 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the page index (builder pattern). Not range-checked.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the page size. Sizes below 1 are clamped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// The current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Sets the page index.
    ///
    /// The index is not range-checked; an out-of-range index is legal and
    /// produces an empty page until the index moves back into range.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Slice bounds of the current page within a collection of `len` rows.
    ///
    /// Returns `(start, end)` suitable for direct slicing. The page starts at
    /// `page_index * page_size` and holds at most `page_size` rows; an
    /// out-of-range index yields an empty `(len, len)` slice.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = self.page_index.saturating_mul(self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    /// The zero-based index of the last page, as a signed count.
    ///
    /// `ceil(len / page_size) - 1`. For an empty collection this is `-1`,
    /// one less than the first valid index, which keeps
    /// [`can_next`](Self::can_next) false on every index.
    pub fn total_pages(&self, len: usize) -> i64 {
        len.div_ceil(self.page_size) as i64 - 1
    }

    /// True when a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    /// True when a next page exists within a collection of `len` rows.
    pub fn can_next(&self, len: usize) -> bool {
        (self.page_index as i64) < self.total_pages(len)
    }

    /// Moves to the previous page if one exists.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page_index -= 1;
        }
    }

    /// Moves to the next page if one exists within `len` rows.
    pub fn next_page(&mut self, len: usize) {
        if self.can_next(len) {
            self.page_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults() {
        let pager = PageState::new();
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn page_size_clamps_to_one() {
        assert_eq!(PageState::new().with_page_size(0).page_size(), 1);
        let mut pager = PageState::new();
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn slice_bounds_walk_the_collection() {
        let mut pager = PageState::new().with_page_size(10);
        assert_eq!(pager.slice_bounds(25), (0, 10));
        pager.set_page_index(1);
        assert_eq!(pager.slice_bounds(25), (10, 20));
        pager.set_page_index(2);
        assert_eq!(pager.slice_bounds(25), (20, 25));
    }

    #[test]
    fn out_of_range_index_yields_an_empty_slice() {
        let pager = PageState::new().with_page_size(10).with_page_index(7);
        assert_eq!(pager.slice_bounds(25), (25, 25));
    }

    #[test]
    fn set_page_index_does_not_clamp() {
        let mut pager = PageState::new();
        pager.set_page_index(99);
        assert_eq!(pager.page_index(), 99);
    }

    #[test]
    fn total_pages_is_the_zero_based_last_index() {
        let pager = PageState::new().with_page_size(10);
        assert_eq!(pager.total_pages(25), 2);
        assert_eq!(pager.total_pages(20), 1);
        assert_eq!(pager.total_pages(10), 0);
        assert_eq!(pager.total_pages(1), 0);
    }

    #[test]
    fn total_pages_of_nothing_is_minus_one() {
        let pager = PageState::new().with_page_size(10);
        assert_eq!(pager.total_pages(0), -1);
        assert!(!pager.can_next(0));
        assert!(!pager.can_prev());
    }

    #[test]
    fn navigation_is_guarded_at_both_ends() {
        let mut pager = PageState::new().with_page_size(10);
        pager.prev_page();
        assert_eq!(pager.page_index(), 0);

        pager.next_page(25);
        pager.next_page(25);
        assert_eq!(pager.page_index(), 2);
        pager.next_page(25);
        assert_eq!(pager.page_index(), 2);

        pager.prev_page();
        assert_eq!(pager.page_index(), 1);
    }

    proptest! {
        #[test]
        fn page_never_exceeds_page_size(
            len in 0usize..500,
            page_size in 1usize..50,
            page_index in 0usize..100,
        ) {
            let pager = PageState::new()
                .with_page_size(page_size)
                .with_page_index(page_index);
            let (start, end) = pager.slice_bounds(len);
            prop_assert!(start <= end);
            prop_assert!(end <= len);
            prop_assert!(end - start <= page_size);
        }

        #[test]
        fn can_next_iff_below_last_page(
            len in 0usize..500,
            page_size in 1usize..50,
            page_index in 0usize..100,
        ) {
            let pager = PageState::new()
                .with_page_size(page_size)
                .with_page_index(page_index);
            let expected = (page_index as i64) < pager.total_pages(len);
            prop_assert_eq!(pager.can_next(len), expected);
        }
    }
}
