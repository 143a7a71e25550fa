//! Fixed-size pages over an already sorted sequence.

use std::num::NonZeroUsize;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page cut out of a longer slice.
#[derive(Debug, PartialEq)]
pub struct PageSlice<'s, T> {
    pub items: &'s [T],
    /// The requested page after clamping, 1-based.
    pub current_page: usize,
    /// `ceil(len / page_size)`; zero for an empty sequence.
    pub total_pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size())
    }

    /// Clamp into `[1, max(1, total_pages)]`.
    pub fn clamp_page(&self, requested: usize, len: usize) -> usize {
        requested.clamp(1, self.total_pages(len).max(1))
    }

    pub fn paginate<'s, T>(&self, items: &'s [T], requested: usize) -> PageSlice<'s, T> {
        let current_page = self.clamp_page(requested, items.len());
        let start = ((current_page - 1) * self.page_size()).min(items.len());
        let end = (start + self.page_size()).min(items.len());
        PageSlice {
            items: &items[start..end],
            current_page,
            total_pages: self.total_pages(items.len()),
        }
    }
}
