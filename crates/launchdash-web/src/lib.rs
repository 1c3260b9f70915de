//! HTTP host for the launch records dashboard.
//! Provides:
//!   - the dashboard page (site dropdown, payload slider, pie + scatter charts)
//!   - JSON chart endpoints re-evaluated on every input change
//!   - the layout descriptor and a health probe

pub mod figure;
pub mod handlers;
pub mod router;
pub mod state;
