//! The single dashboard page with the site dropdown, payload slider and both charts.

use axum::{extract::State, response::Html};
use launchdash_charts::{Component, Layout, PayloadSlider, SiteDropdown};

use crate::state::SharedState;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// The dropdown re-fetches both charts; the slider only the scatter.
const DASHBOARD_JS: &str = r#"
(function () {
    const site = document.getElementById('site-dropdown');
    const lo = document.getElementById('payload-slider-min');
    const hi = document.getElementById('payload-slider-max');
    const readout = document.getElementById('payload-slider-value');

    async function fetchFigure(url) {
        const resp = await fetch(url);
        const body = await resp.json();
        if (!resp.ok) {
            throw new Error(body.error || resp.statusText);
        }
        return body.figure;
    }

    async function refreshPie() {
        const s = encodeURIComponent(site.value);
        try {
            const pie = await fetchFigure('/api/charts/pie?site=' + s);
            Plotly.react('success-pie-chart', pie.data, pie.layout);
        } catch (err) {
            console.error('pie update failed', err);
        }
    }

    async function refreshScatter() {
        let a = Number(lo.value);
        let b = Number(hi.value);
        if (a > b) { [a, b] = [b, a]; }
        readout.textContent = a + ' - ' + b + ' kg';
        const s = encodeURIComponent(site.value);
        try {
            const scatter = await fetchFigure('/api/charts/scatter?site=' + s + '&min=' + a + '&max=' + b);
            Plotly.react('success-payload-scatter-chart', scatter.data, scatter.layout);
        } catch (err) {
            console.error('scatter update failed', err);
        }
    }

    site.addEventListener('change', function () {
        refreshPie();
        refreshScatter();
    });
    lo.addEventListener('input', refreshScatter);
    hi.addEventListener('input', refreshScatter);
    refreshPie();
    refreshScatter();
})();
"#;

const DASHBOARD_CSS: &str = r#"
    .range-slider { position: relative; display: flex; flex-direction: column; gap: 0.25rem; }
    .range-slider input[type=range] { width: 100%; }
    .range-readout { font-size: 0.9rem; color: #503D36; }
    .graph { min-height: 450px; }
    select { width: 100%; padding: 0.4rem; font-family: inherit; }
"#;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    Html(render_dashboard(state.dashboard.layout()))
}

pub fn render_dashboard(layout: &Layout) -> String {
    let body: String = layout.children.iter().map(render_component).collect();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
<div style="font-family: {font}; width: {width}; margin: {margin};">
{body}
</div>
<script>{js}</script>
</body>
</html>"#,
        title = escape_html(&layout.title),
        plotly = PLOTLY_CDN,
        css = DASHBOARD_CSS,
        font = layout.style.font_family,
        width = layout.style.width,
        margin = layout.style.margin,
        body = body,
        js = DASHBOARD_JS,
    )
}

fn render_component(component: &Component) -> String {
    match component {
        Component::Heading { text, style } => format!(
            r#"<h1 style="text-align: {}; color: {}; font-size: {}px;">{}</h1>
"#,
            style.text_align, style.color, style.font_size, escape_html(text)
        ),
        Component::Break => "<br>\n".to_string(),
        Component::Dropdown(dropdown) => render_dropdown(dropdown),
        Component::Graph { id } => format!(
            r#"<div><div id="{}" class="graph"></div></div>
"#,
            escape_html(id)
        ),
        Component::Paragraph { text } => format!("<p>{}</p>\n", escape_html(text)),
        Component::RangeSlider(slider) => render_slider(slider),
    }
}

fn render_dropdown(dropdown: &SiteDropdown) -> String {
    let options: String = dropdown
        .options
        .iter()
        .map(|o| {
            let selected = if o.value == dropdown.value.as_value() { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&o.value),
                selected,
                escape_html(&o.label)
            )
        })
        .collect();

    format!(
        r#"<select id="{}" title="{}">{}</select>
"#,
        escape_html(&dropdown.id),
        escape_html(&dropdown.placeholder),
        options
    )
}

fn render_slider(slider: &PayloadSlider) -> String {
    let marks: String = slider
        .marks
        .iter()
        .map(|m| format!(r#"<option value="{}" label="{}"></option>"#, m.value, escape_html(&m.label)))
        .collect();

    // Unstepped: browsers snap a stepped range value onto the mark grid.
    let input = |suffix: &str, value: f64| {
        format!(
            r#"<input type="range" id="{id}-{suffix}" min="{min}" max="{max}" step="any" data-step="{step}" value="{value}" list="{id}-marks">"#,
            id = escape_html(&slider.id),
            suffix = suffix,
            min = slider.min,
            max = slider.max,
            step = slider.step,
            value = value,
        )
    };

    format!(
        r#"<div id="{id}" class="range-slider">
    {lo}
    {hi}
    <datalist id="{id}-marks">{marks}</datalist>
    <span id="{id}-value" class="range-readout">{lo_value} - {hi_value} kg</span>
</div>
"#,
        id = escape_html(&slider.id),
        lo = input("min", slider.value.lo()),
        hi = input("max", slider.value.hi()),
        marks = marks,
        lo_value = slider.value.lo(),
        hi_value = slider.value.hi(),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_config::DashboardConfig;
    use launchdash_data::{LaunchRecord, LaunchTable, OutcomeClass};

    fn layout() -> Layout {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap();
        Layout::build(&table, &DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_page_contains_every_control() {
        let html = render_dashboard(&layout());
        assert!(html.contains("<title>SpaceX Launch Records Dashboard</title>"));
        assert!(html.contains(r#"<select id="site-dropdown""#));
        assert!(html.contains(r#"<option value="ALL" selected>All Sites</option>"#));
        assert!(html.contains(r#"<option value="KSC LC-39A">KSC LC-39A</option>"#));
        assert!(html.contains(r#"id="success-pie-chart""#));
        assert!(html.contains(r#"id="success-payload-scatter-chart""#));
        assert!(html.contains(r#"id="payload-slider-min""#));
        assert!(html.contains(r#"value="9600""#));
        assert!(html.contains("<p>Payload range (Kg):</p>"));
    }

    #[test]
    fn test_slider_markup_keeps_observed_bounds() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, OutcomeClass::Success, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, OutcomeClass::Failure, "B4"),
        ])
        .unwrap();
        let layout = Layout::build(&table, &DashboardConfig::default()).unwrap();
        let html = render_dashboard(&layout);

        assert!(html.contains(
            r#"id="payload-slider-min" min="0" max="10000" step="any" data-step="1000" value="500""#
        ));
        assert!(html.contains(r#"id="payload-slider-max" min="0" max="10000" step="any" data-step="1000" value="9600""#));
        assert!(!html.contains(r#" step="1000""#));
        assert!(html.contains(r#"<option value="1000" label="1000"></option>"#));
        assert!(html.contains("500 - 9600 kg"));
    }

    #[test]
    fn test_slider_input_only_refreshes_scatter() {
        assert!(DASHBOARD_JS.contains("lo.addEventListener('input', refreshScatter)"));
        assert!(DASHBOARD_JS.contains("hi.addEventListener('input', refreshScatter)"));
        let pie_fetch = DASHBOARD_JS.find("/api/charts/pie").unwrap();
        let scatter_fn = DASHBOARD_JS.find("async function refreshScatter").unwrap();
        assert!(pie_fetch < scatter_fn);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
