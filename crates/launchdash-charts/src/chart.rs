//! Typed chart descriptions handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Column the slice labels come from
    pub names: String,
    /// Column the slice values come from
    pub values: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<u64> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub color: String,
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Points sharing one colour category; one trace in the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub launch_sites: Vec<String>,
}

impl ScatterChart {
    /// Group points by colour, categories in first-appearance order.
    pub fn series(&self) -> Vec<ScatterSeries> {
        let mut series: Vec<ScatterSeries> = Vec::new();
        for point in &self.points {
            let idx = match series.iter().position(|s| s.name == point.color) {
                Some(idx) => idx,
                None => {
                    series.push(ScatterSeries {
                        name: point.color.clone(),
                        x: Vec::new(),
                        y: Vec::new(),
                        launch_sites: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            let entry = &mut series[idx];
            entry.x.push(point.x);
            entry.y.push(point.y);
            entry.launch_sites.push(point.launch_site.clone());
        }
        series
    }
}

/// Either chart, tagged with its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(chart) => &chart.title,
            ChartSpec::Scatter(chart) => &chart.title,
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(chart: PieChart) -> Self {
        ChartSpec::Pie(chart)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(chart: ScatterChart) -> Self {
        ChartSpec::Scatter(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: u8, color: &str) -> ScatterPoint {
        ScatterPoint { x, y, color: color.to_string(), launch_site: "KSC LC-39A".to_string() }
    }

    #[test]
    fn test_series_groups_by_color_in_order() {
        let chart = ScatterChart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            color_label: "c".to_string(),
            points: vec![point(1.0, 0, "FT"), point(2.0, 1, "B4"), point(3.0, 1, "FT")],
        };
        let series = chart.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "FT");
        assert_eq!(series[0].x, vec![1.0, 3.0]);
        assert_eq!(series[0].y, vec![0, 1]);
        assert_eq!(series[1].name, "B4");
    }

    #[test]
    fn test_chart_spec_is_tagged() {
        let spec: ChartSpec = PieChart {
            title: "Total".to_string(),
            names: "Launch Site".to_string(),
            values: "class".to_string(),
            slices: vec![],
        }
        .into();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(spec.title(), "Total");
    }
}
