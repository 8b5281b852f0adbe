//! Types and pure logic shared by the admin frontend and its API
//!
//! - [`shared::filters`]: list filter state and its normalization
//! - [`shared::pagination`]: list response envelope and pager metadata
//! - [`domain`]: customer and transaction DTOs
//! - [`dashboards`]: summary dashboard DTOs and shaping

pub mod dashboards;
pub mod domain;
pub mod shared;
