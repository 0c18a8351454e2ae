use serde::{Deserialize, Serialize};

// ============================================================================
// Envelope
// ============================================================================

/// Standard envelope returned by every backend endpoint
///
/// ```json
/// { "success": true, "message": "...", "data": [...], "pagination": {...} }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationMeta) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Same arithmetic the backend uses when it builds a paginated response
    pub fn compute(page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page as u64) as u32;
        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// One page of a filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Builds a page from the items and the optional pagination block.
    ///
    /// Without a pagination block the items are treated as the whole
    /// collection on a single page. `page` is kept inside `[1, total_pages]`
    /// whenever there is at least one page.
    pub fn from_parts(items: Vec<T>, meta: Option<PaginationMeta>, per_page: u32) -> Self {
        let meta = meta.unwrap_or_else(|| {
            let total = items.len() as u64;
            PaginationMeta::compute(1, per_page.max(total as u32), total)
        });

        let page = if meta.total_pages == 0 {
            meta.page.max(1)
        } else {
            meta.page.clamp(1, meta.total_pages)
        };

        Self {
            items,
            page,
            per_page: meta.per_page,
            total: meta.total,
            total_pages: meta.total_pages,
            has_prev: meta.has_prev && page > 1,
            has_next: meta.has_next && page < meta.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
