//! Immutable dashboard context, built once at start-up and shared read-only.

use launchdash_common::{DashError, PayloadRange, Result, SiteSelection};
use launchdash_config::DashboardConfig;
use launchdash_data::LaunchTable;

use crate::chart::{PieChart, ScatterChart};
use crate::layout::Layout;
use crate::pie::success_pie;
use crate::scatter::payload_scatter;

#[derive(Debug, Clone)]
pub struct DashboardContext {
    table: LaunchTable,
    layout: Layout,
}

impl DashboardContext {
    pub fn new(table: LaunchTable, config: &DashboardConfig) -> Result<Self> {
        let layout = Layout::build(&table, config)?;
        Ok(Self { table, layout })
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The slider's initial value.
    pub fn default_range(&self) -> Result<PayloadRange> {
        match self.layout.slider() {
            Some(slider) => Ok(slider.value),
            None => self.table.full_range(),
        }
    }

    /// Reject site values that are not dropdown options.
    pub fn check_site(&self, site: &SiteSelection) -> Result<()> {
        match site {
            SiteSelection::All => Ok(()),
            SiteSelection::Site(name) => {
                let known = self
                    .layout
                    .dropdown()
                    .map(|d| d.has_option(name))
                    .unwrap_or_else(|| self.table.has_site(name));
                if known {
                    Ok(())
                } else {
                    Err(DashError::UnknownSite(name.clone()))
                }
            }
        }
    }

    pub fn pie(&self, site: &SiteSelection) -> PieChart {
        success_pie(&self.table, site)
    }

    pub fn scatter(&self, site: &SiteSelection, range: PayloadRange) -> ScatterChart {
        payload_scatter(&self.table, site, range)
    }
}
