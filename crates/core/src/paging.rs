// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pagination contract shared by all list operations.
//!
//! Pages are 1-based. A page past the end of the collection returns an
//! empty item set rather than an error, with the requested page echoed
//! back and the real page count reported.

/// Default page size when the caller specifies none.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper clamp for caller-supplied page sizes.
pub const MAX_LIMIT: u32 = 100;

/// A validated pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a pagination request, clamping `limit` to `[1, MAX_LIMIT]`
    /// and `page` to at least 1.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        let page: u32 = if page == 0 { 1 } else { page };
        let limit: u32 = if limit == 0 {
            1
        } else if limit > MAX_LIMIT {
            MAX_LIMIT
        } else {
            limit
        };
        Self { page, limit }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the clamped page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of records to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page (empty when `page` is past the end).
    pub items: Vec<T>,
    /// The total number of matching records across all pages.
    pub total: u64,
    /// The requested 1-based page number, echoed back unchanged.
    pub page: u32,
    /// The total number of pages (at least 1, even for an empty result).
    pub pages: u32,
}

impl<T> Page<T> {
    /// Assembles a page from pre-sliced items and the total match count.
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        let pages: u32 =
            u32::try_from(total.div_ceil(u64::from(request.limit()))).unwrap_or(u32::MAX);
        Self {
            items,
            total,
            page: request.page(),
            pages: pages.max(1),
        }
    }
}
