//! Filter, pagination and query normalization for list views
//!
//! Flow: intent -> [`reducer`] -> [`validator::validate`] -> [`query::build_params`].

pub mod defaults;
pub mod error;
pub mod query;
pub mod reducer;
pub mod state;
pub mod validator;

pub use defaults::{active_filter_count, active_filters, get_defaults, seed, EntityType};
pub use error::FilterError;
pub use query::{build_params, ParamMap};
pub use reducer::{apply, FilterIntent};
pub use state::{FilterState, FilterValue, SortDirection, PER_PAGE_OPTIONS};
pub use validator::validate;
