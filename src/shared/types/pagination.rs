use serde::Serialize;

use super::errors::DomainError;

pub const DEFAULT_PAGE_SIZE: u64 = 30;
pub const MAX_PAGE_SIZE: u64 = 1000;
pub const DEFAULT_SORT: &str = "created_at desc";

/// Normalized page request. Construct with [`PageRequest::new`] so the
/// page is 1-based and the size stays within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let page_size = match page_size.unwrap_or(0) {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };
        Self { page, page_size }
    }

    /// Rows to skip. Saturates at `i64::MAX`, the largest offset the
    /// database drivers accept, so an absurd `page` yields an empty page.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_rows: u64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total_rows: u64) -> Self {
        Self {
            page: request.page,
            page_size: request.page_size,
            total_pages: total_rows.div_ceil(request.page_size),
            total_rows,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_rows: u64, request: PageRequest) -> Self {
        Self {
            items,
            meta: PageMeta::new(request, total_rows),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// `"<column> [asc|desc]"`. The column is resolved against the entity
/// by the repository, so an unknown name is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SORT);
        let mut parts = raw.split_whitespace();

        let column = parts.next().unwrap_or("created_at").to_string();
        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(DomainError::Validation(format!(
                    "invalid sort direction '{}'",
                    other
                )))
            }
        };

        if parts.next().is_some() {
            return Err(DomainError::Validation(format!("invalid sort '{}'", raw)));
        }

        Ok(Self { column, direction })
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: "created_at".to_string(),
            direction: SortDirection::Desc,
        }
    }
}
