//! Render model of [`super::DataTable`], kept free of the view layer

use contracts::shared::filters::{FilterState, SortDirection};
use contracts::shared::pagination::PaginationDescriptor;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shown for missing or empty cells
pub const PLACEHOLDER: &str = "—";

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Table rows are JSON objects keyed by column key
pub type Row = Value;

type Formatter = dyn Fn(&Value, &Row, usize) -> String + Send + Sync;

/// How a column turns a cell value into text
#[derive(Clone, Default)]
pub enum CellRenderer {
    /// The raw value, or [`PLACEHOLDER`] when there is none
    #[default]
    Text,
    /// Formatter receiving the cell value, the whole row and the row index
    Custom(Arc<Formatter>),
}

impl CellRenderer {
    pub fn custom(f: impl Fn(&Value, &Row, usize) -> String + Send + Sync + 'static) -> Self {
        CellRenderer::Custom(Arc::new(f))
    }

    pub fn render(&self, value: &Value, row: &Row, index: usize) -> String {
        match self {
            CellRenderer::Text => default_text(value),
            CellRenderer::Custom(f) => f(value, row, index),
        }
    }
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRenderer::Text => f.write_str("Text"),
            CellRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub key: String,
    pub title: String,
    pub width: Option<String>,
    pub renderer: CellRenderer,
    pub sortable: bool,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            renderer: CellRenderer::Text,
            sortable: false,
        }
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn render(
        mut self,
        f: impl Fn(&Value, &Row, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.renderer = CellRenderer::custom(f);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn cell(&self, row: &Row, index: usize) -> String {
        self.renderer.render(cell_value(row, &self.key), row, index)
    }
}

static NULL: Value = Value::Null;

pub fn cell_value<'a>(row: &'a Row, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&NULL)
}

pub fn default_text(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) if s.is_empty() => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Column the list is currently sorted by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn from_filters(state: &FilterState) -> Option<Self> {
        Some(Self {
            field: state.sort_by()?.to_string(),
            direction: state.sort_direction().unwrap_or_default(),
        })
    }
}

/// The three mutually exclusive states of the table body
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Single full-width row while a request is in flight
    Loading { colspan: usize },
    /// Single full-width row when there is nothing to show
    Empty { colspan: usize },
    /// Rendered cell text, one inner vec per row
    Rows(Vec<Vec<String>>),
}

pub fn table_body(columns: &[ColumnDescriptor], data: &[Row], loading: bool) -> TableBody {
    let colspan = columns.len().max(1);
    if loading {
        return TableBody::Loading { colspan };
    }
    if data.is_empty() {
        return TableBody::Empty { colspan };
    }
    TableBody::Rows(
        data.iter()
            .enumerate()
            .map(|(index, row)| columns.iter().map(|c| c.cell(row, index)).collect())
            .collect(),
    )
}

/// The pager shows only for a non-empty page, when the caller asked for it
pub fn shows_pagination(
    pagination: Option<&PaginationDescriptor>,
    row_count: usize,
    enabled: bool,
) -> bool {
    enabled && pagination.is_some() && row_count > 0
}

/// "11–20 of 35"
pub fn pagination_info(pagination: &PaginationDescriptor) -> String {
    match pagination.display_range() {
        Some((first, last)) => format!("{}–{} of {}", first, last, pagination.total),
        None => "0 of 0".to_string(),
    }
}

/// Serializes DTOs into table rows. Items that fail to serialize become
/// null rows and render as placeholders.
pub fn to_rows<T: Serialize>(items: &[T]) -> Vec<Row> {
    items
        .iter()
        .map(|item| {
            serde_json::to_value(item).unwrap_or_else(|e| {
                log::warn!("Failed to convert row for table: {}", e);
                Value::Null
            })
        })
        .collect()
}
