//! Page arithmetic and navigation links.
//!
//! Pages are 1-based. All sizes are computed with integer arithmetic; the
//! page count is an exact ceiling division so totals that are a multiple of
//! the page size never produce a trailing empty page.

/// Page number used when the request does not specify one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the request does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest page size a client may ask for.
pub const MAX_PER_PAGE: u32 = 20;

/// A request for one page of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a page request, clamping `page` to at least 1 and `per_page`
    /// into `1..=MAX_PER_PAGE`.
    ///
    /// Callers reject out-of-range input at their own boundary; this only
    /// guarantees the arithmetic below never sees a zero page or size.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Zero-based number of rows to skip.
    pub fn offset(&self) -> i64 {
        (u64::from(self.page) - 1) as i64 * i64::from(self.per_page)
    }

    /// Maximum number of rows to take.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_pages: u64) -> bool {
        u64::from(self.page) < total_pages
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Number of pages needed to hold `total_items` at `per_page` items each.
///
/// `per_page` is never 0 for a [`PageRequest`]; a zero page size yields 0 pages.
pub fn total_pages(total_items: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(u64::from(per_page))
}

/// Builds relative `?page=&per_page=` links against a configurable base path.
#[derive(Debug, Clone)]
pub struct PageLinks {
    base_path: String,
}

impl PageLinks {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Link to an arbitrary page.
    pub fn link(&self, page: u32, per_page: u32) -> String {
        format!("{}?page={}&per_page={}", self.base_path, page, per_page)
    }

    /// Link to the page before `request`, absent on the first page.
    pub fn previous(&self, request: &PageRequest) -> Option<String> {
        request
            .has_previous()
            .then(|| self.link(request.page() - 1, request.per_page()))
    }

    /// Link to the page after `request`, absent on the last page.
    pub fn next(&self, request: &PageRequest, total_pages: u64) -> Option<String> {
        request
            .has_next(total_pages)
            .then(|| self.link(request.page() + 1, request.per_page()))
    }
}
