//! Plotly figure encoding for chart descriptions.
//!
//! The browser passes `data` and `layout` straight to `Plotly.react`.

use launchdash_charts::{ChartSpec, PieChart, ScatterChart};
use serde_json::{json, Value};

pub fn figure(spec: &ChartSpec) -> Value {
    match spec {
        ChartSpec::Pie(chart) => pie_figure(chart),
        ChartSpec::Scatter(chart) => scatter_figure(chart),
    }
}

pub fn pie_figure(chart: &PieChart) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = chart.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hovertemplate": format!("{}=%{{label}}<br>{}=%{{value}}<extra></extra>", chart.names, chart.values),
        }],
        "layout": {
            "title": { "text": chart.title },
        }
    })
}

pub fn scatter_figure(chart: &ScatterChart) -> Value {
    let traces: Vec<Value> = chart
        .series()
        .into_iter()
        .map(|series| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": series.name,
                "legendgroup": series.name,
                "x": series.x,
                "y": series.y,
                "text": series.launch_sites,
                "hovertemplate": format!(
                    "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<br>Launch Site=%{{text}}<extra></extra>",
                    chart.color_label, series.name, chart.x_label, chart.y_label
                ),
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": chart.title },
            "xaxis": { "title": { "text": chart.x_label } },
            "yaxis": { "title": { "text": chart.y_label } },
            "legend": { "title": { "text": chart.color_label } },
        }
    })
}
