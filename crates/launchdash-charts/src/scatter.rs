//! Payload-filter / scatter-data handler.

use launchdash_common::{PayloadRange, SiteSelection};
use launchdash_data::LaunchTable;
use tracing::debug;

use crate::chart::{ScatterChart, ScatterPoint};

pub const SCATTER_TITLE_PREFIX: &str = "Correlation between Payload and Success For";

/// Scatter data for the site dropdown and payload slider values.
///
/// Keeps rows with payload in `range` (inclusive), then rows matching
/// `site`. Points keep table order.
pub fn payload_scatter(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points: Vec<ScatterPoint> = table
        .in_payload_range(range)
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.class.as_u8(),
            color: r.booster_version_category.clone(),
            launch_site: r.launch_site.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => format!("{} all Sites", SCATTER_TITLE_PREFIX),
        SiteSelection::Site(name) => format!("{} Site {}", SCATTER_TITLE_PREFIX, name),
    };

    debug!(site = %site, range = %range, points = points.len(), "scatter chart computed");

    ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        color_label: "Booster Version Category".to_string(),
        points,
    }
}
