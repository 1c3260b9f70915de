//! Chart descriptions computed from the launch table.
//!
//! Every operation here is a pure function of its inputs and the immutable
//! [`LaunchTable`](launchdash_data::LaunchTable):
//!   - [`success_pie`]: success counts per site, or outcome split for one site
//!   - [`payload_scatter`]: payload vs outcome, coloured by booster category
//!   - [`Layout`]: the declarative page tree the host renders
//!   - [`DashboardContext`]: table + layout, built once at start-up

pub mod chart;
pub mod context;
pub mod layout;
pub mod pie;
pub mod scatter;

pub use chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
pub use context::DashboardContext;
pub use layout::{Component, DropdownOption, Layout, SiteDropdown, PayloadSlider, SliderMark};
pub use pie::success_pie;
pub use scatter::payload_scatter;
