//! Site-filter / pie-data handler.

use launchdash_common::SiteSelection;
use launchdash_data::{LaunchTable, OutcomeClass};
use tracing::debug;

use crate::chart::{PieChart, PieSlice};

pub const ALL_SITES_PIE_TITLE: &str = "Total Success Launches By Site";
pub const SITE_PIE_TITLE_PREFIX: &str = "Total Success Launches For Site";

/// Pie data for the site dropdown value.
///
/// `All`: one slice per site, valued by its success count (sum of `class`).
/// `Site(name)`: one slice per outcome class present at that site, valued
/// by row count, class 0 first. An unknown site gives no slices.
pub fn success_pie(table: &LaunchTable, site: &SiteSelection) -> PieChart {
    let chart = match site {
        SiteSelection::All => {
            let slices = table
                .sites()
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: table
                        .at_site(name)
                        .map(|r| u64::from(r.class.as_u8()))
                        .sum(),
                })
                .collect();

            PieChart {
                title: ALL_SITES_PIE_TITLE.to_string(),
                names: "Launch Site".to_string(),
                values: "class".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut counts = [0u64; 2];
            for record in table.at_site(name) {
                counts[record.class.as_u8() as usize] += 1;
            }

            let slices = [OutcomeClass::Failure, OutcomeClass::Success]
                .into_iter()
                .filter(|class| counts[class.as_u8() as usize] > 0)
                .map(|class| PieSlice {
                    label: class.to_string(),
                    value: counts[class.as_u8() as usize],
                })
                .collect();

            PieChart {
                title: format!("{} {}", SITE_PIE_TITLE_PREFIX, name),
                names: "class".to_string(),
                values: "class count".to_string(),
                slices,
            }
        }
    };

    debug!(site = %site, slices = chart.slices.len(), "pie chart computed");
    chart
}
