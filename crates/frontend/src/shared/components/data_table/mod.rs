pub mod component;
pub mod model;

pub use component::DataTable;
pub use model::{to_rows, CellRenderer, ColumnDescriptor, Row, SortState, PLACEHOLDER};
