//! Declarative page layout.
//!
//! The layout is pure data: an ordered list of components the host turns
//! into markup. Nothing here renders anything.

use launchdash_common::{DashError, PayloadRange, Result, SiteSelection, ALL_SITES, ALL_SITES_LABEL};
use launchdash_config::DashboardConfig;
use launchdash_data::LaunchTable;
use serde::Serialize;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_GRAPH_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_GRAPH_ID: &str = "success-payload-scatter-chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStyle {
    pub font_family: String,
    pub width: String,
    pub margin: String,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            font_family: "Tahoma, Geneva, sans-serif".to_string(),
            width: "67%".to_string(),
            margin: "auto".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            text_align: "center".to_string(),
            color: "#503D36".to_string(),
            font_size: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

impl SiteDropdown {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading { text: String, style: HeadingStyle },
    Break,
    Dropdown(SiteDropdown),
    Graph { id: String },
    Paragraph { text: String },
    RangeSlider(PayloadSlider),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub style: PageStyle,
    pub children: Vec<Component>,
}

impl Layout {
    /// Build the page for `table`.
    ///
    /// Dropdown sites come from `config.sites`, or from the table when that
    /// list is empty. The slider starts at the observed payload bounds,
    /// clamped to the slider's own bounds. An invalid `config` is rejected
    /// before any component is built.
    pub fn build(table: &LaunchTable, config: &DashboardConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| DashError::InvalidInput(e.to_string()))?;

        let sites: Vec<String> = if config.sites.is_empty() {
            table.sites().to_vec()
        } else {
            config.sites.clone()
        };

        let mut options = vec![DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(sites.into_iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site,
        }));

        let (observed_min, observed_max) = table.payload_bounds();
        let clamp = |v: f64| v.max(config.slider_min).min(config.slider_max);
        let value = PayloadRange::new(clamp(observed_min), clamp(observed_max))?;

        let children = vec![
            Component::Heading {
                text: config.title.clone(),
                style: HeadingStyle::default(),
            },
            Component::Break,
            Component::Dropdown(SiteDropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: SiteSelection::All,
                placeholder: "Select a Launch Site here:".to_string(),
                searchable: true,
            }),
            Component::Break,
            Component::Graph { id: PIE_GRAPH_ID.to_string() },
            Component::Break,
            Component::Paragraph { text: "Payload range (Kg):".to_string() },
            Component::RangeSlider(PayloadSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                marks: slider_marks(config.slider_min, config.slider_max, config.slider_step),
                value,
            }),
            Component::Graph { id: SCATTER_GRAPH_ID.to_string() },
        ];

        Ok(Self {
            title: config.title.clone(),
            style: PageStyle::default(),
            children,
        })
    }

    pub fn dropdown(&self) -> Option<&SiteDropdown> {
        self.children.iter().find_map(|c| match c {
            Component::Dropdown(d) => Some(d),
            _ => None,
        })
    }

    pub fn slider(&self) -> Option<&PayloadSlider> {
        self.children.iter().find_map(|c| match c {
            Component::RangeSlider(s) => Some(s),
            _ => None,
        })
    }
}

/// One labelled mark per step from `min` to `max` inclusive.
fn slider_marks(min: f64, max: f64, step: f64) -> Vec<SliderMark> {
    let steps = ((max - min) / step).floor() as usize;
    (0..=steps)
        .map(|i| {
            let value = min + i as f64 * step;
            SliderMark { value, label: format!("{}", value) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_data::{LaunchRecord, OutcomeClass};

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_layout_structure() {
        let layout = Layout::build(&table(), &DashboardConfig::default()).unwrap();
        assert_eq!(layout.title, "SpaceX Launch Records Dashboard");
        assert_eq!(layout.children.len(), 9);

        let dropdown = layout.dropdown().unwrap();
        assert_eq!(dropdown.id, "site-dropdown");
        assert_eq!(dropdown.options[0].label, "All Sites");
        assert_eq!(dropdown.options[0].value, "ALL");
        assert_eq!(dropdown.options.len(), 3);
        assert_eq!(dropdown.value, SiteSelection::All);
        assert!(dropdown.searchable);
    }

    #[test]
    fn test_slider_defaults() {
        let layout = Layout::build(&table(), &DashboardConfig::default()).unwrap();
        let slider = layout.slider().unwrap();
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10_000.0, 1_000.0));
        assert_eq!(slider.marks.len(), 11);
        assert_eq!(slider.marks[3].label, "3000");
        assert_eq!(slider.marks[10].value, 10_000.0);
        assert_eq!((slider.value.lo(), slider.value.hi()), (0.0, 9600.0));
    }

    #[test]
    fn test_configured_sites_override_data() {
        let config = DashboardConfig {
            sites: vec!["VAFB SLC-4E".to_string()],
            ..Default::default()
        };
        let layout = Layout::build(&table(), &config).unwrap();
        let dropdown = layout.dropdown().unwrap();
        assert!(dropdown.has_option("VAFB SLC-4E"));
        assert!(!dropdown.has_option("KSC LC-39A"));
    }

    #[test]
    fn test_slider_value_clamped_to_bounds() {
        let config = DashboardConfig { slider_max: 5_000.0, ..Default::default() };
        let layout = Layout::build(&table(), &config).unwrap();
        assert_eq!(layout.slider().unwrap().value.hi(), 5_000.0);
    }

    #[test]
    fn test_invalid_slider_config_is_an_error() {
        let zero_step = DashboardConfig { slider_step: 0.0, ..Default::default() };
        let err = Layout::build(&table(), &zero_step).unwrap_err();
        assert!(matches!(err, DashError::InvalidInput(ref m) if m.contains("slider_step")), "{err}");

        let huge = DashboardConfig { slider_max: 1e300, slider_step: 1.0, ..Default::default() };
        assert!(Layout::build(&table(), &huge).is_err());
    }

    #[test]
    fn test_layout_serializes_component_tags() {
        let layout = Layout::build(&table(), &DashboardConfig::default()).unwrap();
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["children"][0]["component"], "heading");
        assert_eq!(json["children"][2]["component"], "dropdown");
        assert_eq!(json["children"][7]["value"], serde_json::json!([0.0, 9600.0]));
    }
}
