//! Launch record dataset loading.
//!
//! Reads the launch records CSV once at start-up into an immutable
//! [`LaunchTable`]. The table is the only data source for the dashboard
//! charts; nothing writes to it after loading.
//!
//! # Required columns
//!
//! | Column | Type | Meaning |
//! |--------|------|---------|
//! | `Launch Site` | string | launch location |
//! | `Payload Mass (kg)` | number ≥ 0 | payload mass |
//! | `class` | 0 or 1 | launch outcome (1 = success) |
//! | `Booster Version Category` | string | booster family, used as chart colour |
//!
//! Other columns are ignored.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchdash_data::LaunchTable;
//!
//! #[tokio::main]
//! async fn main() -> launchdash_common::Result<()> {
//!     let table = LaunchTable::load("spacex_launch_dash.csv").await?;
//!     let (min, max) = table.payload_bounds();
//!     println!("{} launches, payload {}..{} kg", table.len(), min, max);
//!     Ok(())
//! }
//! ```

pub mod record;
pub mod table;

pub use record::{LaunchRecord, OutcomeClass};
pub use table::{LaunchTable, REQUIRED_COLUMNS};
