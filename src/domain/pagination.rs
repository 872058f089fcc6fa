// src/domain/pagination.rs
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page index and page size after normalization.
///
/// Page indexes are zero-based. A missing or non-positive size falls back to
/// [`DEFAULT_PAGE_SIZE`], an oversized one is capped at [`MAX_PAGE_SIZE`], and
/// a negative page becomes the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn normalize(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(0).max(0);
        let page = u32::try_from(page).unwrap_or(u32::MAX);

        let size = match size {
            Some(value) if value >= 1 => {
                u32::try_from(value.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE)
            }
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, size }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Bounds and navigation flags of one page over `total_elements` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total_pages: u64,
    pub start_offset: u64,
    pub end_offset: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageWindow {
    pub fn compute(total_elements: u64, page: u32, size: u32) -> Self {
        let size = u64::from(size.max(1));
        let page = u64::from(page);

        let total_pages = total_elements.div_ceil(size);
        let start_offset = page.saturating_mul(size);
        let end_offset = start_offset.saturating_add(size).min(total_elements);

        Self {
            total_pages,
            start_offset,
            end_offset,
            has_next: page.saturating_add(1) < total_pages,
            has_previous: total_pages > 0 && page > 0,
        }
    }

    /// True when the window starts at or past the last element.
    pub const fn is_beyond_end(&self, total_elements: u64) -> bool {
        self.start_offset >= total_elements
    }

    /// Cut this window out of an already materialized, fully filtered sequence.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let len = items.len();
        if self.is_beyond_end(len as u64) {
            return Vec::new();
        }
        let start = usize::try_from(self.start_offset).unwrap_or(usize::MAX);
        let end = usize::try_from(self.end_offset).unwrap_or(len).min(len);

        items.into_iter().skip(start).take(end - start).collect()
    }
}
