//! Shared selection types and errors used across the launchdash crates.

pub mod error;
pub mod selection;

// Re-export commonly used types
pub use error::{ApiError, DashError, Result};
pub use selection::{PayloadRange, SiteSelection, ALL_SITES, ALL_SITES_LABEL};
