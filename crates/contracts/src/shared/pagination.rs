use serde::{Deserialize, Serialize};

/// Paging metadata as the backend reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// Response envelope of every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// What the table needs to draw its pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

impl PaginationDescriptor {
    /// 1-based, inclusive row numbers shown on the current page.
    /// `None` when there is nothing to show.
    pub fn display_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let page = self.current_page.max(1);
        let first = (page - 1).saturating_mul(self.per_page).saturating_add(1);
        let last = page.saturating_mul(self.per_page).min(self.total);
        Some((first, last))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Uses `current_page * per_page >= total` as the end condition rather than
    /// `last_page`. The two disagree when the server's `last_page` is off.
    pub fn has_next(&self) -> bool {
        self.current_page.max(1).saturating_mul(self.per_page) < self.total
    }
}

impl From<&PaginationMeta> for PaginationDescriptor {
    fn from(meta: &PaginationMeta) -> Self {
        Self {
            current_page: meta.current_page,
            per_page: meta.per_page,
            total: meta.total,
            last_page: meta.last_page,
        }
    }
}

impl From<PaginationMeta> for PaginationDescriptor {
    fn from(meta: PaginationMeta) -> Self {
        Self::from(&meta)
    }
}
