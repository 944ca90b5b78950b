//! End-to-end tests from DSL source to visual tree and HTML

use std::f64::consts::PI;

use infographic::layout::NodeKind;
use infographic::{
    build_tree, render_with_config, render_with_lint, HtmlConfig, RenderConfig, RenderOptions,
    Stylesheet, ThemeMode, VisualNode,
};
use pretty_assertions::assert_eq;

fn tree(source: &str) -> VisualNode {
    build_tree(source, &RenderConfig::default()).expect("Should render")
}

fn texts(root: &VisualNode, class: &str) -> Vec<String> {
    root.find_all(class)
        .iter()
        .filter_map(|n| n.text.clone())
        .collect()
}

fn chart_source(template: &str, values: &[&str]) -> String {
    let mut source = format!("infographic {}\ndata\n  items\n", template);
    for (i, value) in values.iter().enumerate() {
        source.push_str(&format!("    - S{}\n      value {}\n", i + 1, value));
    }
    source
}

#[test]
fn test_pie_fractions_and_legend() {
    let root = tree(&chart_source("chart-pie-plain-text", &["10", "20", "30", "40"]));

    let wedges: Vec<_> = root
        .find_all("pie-slice")
        .into_iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Wedge(w) => Some(w.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(wedges.len(), 4);
    assert!((wedges[0].start_angle + PI / 2.0).abs() < 1e-12);
    for (wedge, expected) in wedges.iter().zip([0.1, 0.2, 0.3, 0.4]) {
        assert!((wedge.fraction() - expected).abs() < 1e-9);
    }

    assert_eq!(
        texts(&root, "legend-label"),
        vec!["S1 (10.0%)", "S2 (20.0%)", "S3 (30.0%)", "S4 (40.0%)"]
    );
}

#[test]
fn test_pie_without_total() {
    let root = tree(&chart_source("chart-pie-plain-text", &["0", "zero"]));
    assert_eq!(texts(&root, "legend-label"), vec!["S1 (0%)", "S2 (0%)"]);

    let empty = tree("infographic chart-pie-plain-text\ndata\n  items\n");
    assert!(empty.find("pie-slice").is_none());
    assert!(empty.find("pie-legend").unwrap().children.is_empty());
}

#[test]
fn test_pie_percent_suffixed_values() {
    let root = tree(&chart_source("chart-pie-plain-text", &["45%", "55%"]));
    assert_eq!(texts(&root, "legend-label"), vec!["S1 (45.0%)", "S2 (55.0%)"]);
}

#[test]
fn test_bar_widths_relative_to_max() {
    let root = tree(&chart_source("chart-bar-plain-text", &["5", "10"]));
    let widths: Vec<_> = root
        .find_all("bar")
        .iter()
        .filter_map(|n| n.style("width").and_then(|v| v.as_percent()))
        .collect();
    assert_eq!(widths, vec![50.0, 100.0]);
}

#[test]
fn test_unknown_chart_name_uses_bars() {
    let root = tree(&chart_source("chart-donut", &["1"]));
    assert!(root.find("bar-chart").is_some());
}

#[test]
fn test_swot_with_six_items() {
    let source = "infographic compare-swot\ndata\n  items\n    - A\n    - B\n    - C\n    - D\n    - E\n    - F\n";
    let root = tree(source);
    assert_eq!(texts(&root, "swot-header"), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_swot_with_two_items() {
    let source = "infographic compare-swot\ndata\n  items\n    - Speed\n      desc Fast\n    - Cost\n";
    let root = tree(source);
    assert_eq!(
        texts(&root, "swot-header"),
        vec!["Speed", "Cost", "Opportunities", "Threats"]
    );
    let quadrants = root.find_all("swot-quadrant");
    for quadrant in &quadrants[2..] {
        assert!(quadrant.find("swot-content").is_none());
        assert!(quadrant.find("swot-list").is_none());
    }
}

#[test]
fn test_hierarchy_levels() {
    let root = tree(include_str!("../demos/org-chart.ig"));
    let levels: Vec<_> = root
        .find_all("tree-node-wrapper")
        .iter()
        .filter_map(|n| n.style("--level").and_then(|v| v.as_index()))
        .collect();
    assert_eq!(levels, vec![0, 1, 2, 2, 1, 2, 2]);
}

#[test]
fn test_timeline_parity() {
    let root = tree(include_str!("../demos/timeline.ig"));
    let entries = root.find_all("timeline-entry");
    let sides: Vec<_> = entries.iter().map(|e| e.has_class("left")).collect();
    assert_eq!(sides, vec![true, false, true, false]);
}

#[test]
fn test_document_theme_selects_scheme() {
    let root = tree(include_str!("../demos/revenue-columns.ig"));
    assert!(root.has_class("scheme-nord"));
}

#[test]
fn test_dark_theme_pie_colors() {
    let config = RenderConfig::new().with_options(RenderOptions::new().with_theme(ThemeMode::Dark));
    let root = build_tree(&chart_source("chart-pie-plain-text", &["1"]), &config).unwrap();
    let fill = root
        .find("legend-color")
        .and_then(|n| n.style("background-color"))
        .cloned();
    let expected = Stylesheet::default().pie_color(ThemeMode::Dark, 0).to_string();
    assert_eq!(fill, Some(infographic::layout::StyleValue::Color(expected)));
}

#[test]
fn test_user_stylesheet_scheme() {
    let stylesheet = Stylesheet::from_str(
        r##"
[schemes.ocean.light]
bg = "#e0f7fa"
surface = "#ffffff"
border = "#80deea"
text = "#004d40"
text-muted = "#00796b"
accent = "#0097a7"
accent-light = "#b2ebf2"
success = "#2e7d32"
warning = "#f9a825"
error = "#c62828"
info = "#0277bd"

[schemes.ocean.dark]
bg = "#002f35"
surface = "#00474f"
border = "#006064"
text = "#e0f7fa"
text-muted = "#80deea"
accent = "#26c6da"
accent-light = "#00838f"
success = "#66bb6a"
warning = "#ffca28"
error = "#ef5350"
info = "#29b6f6"
"##,
    )
    .expect("Should load stylesheet");

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_html(HtmlConfig::new().with_standalone(false).with_pretty_print(false));
    let html = render_with_config("infographic list-grid-badge-card\ntheme ocean\n", &config).unwrap();
    assert!(html.contains("ig-scheme-ocean"));
    assert!(html.contains("--ig-bg: #e0f7fa"));
}

#[test]
fn test_render_with_lint_still_renders() {
    let source = "infographic compare-binary-horizontal-simple-fold\ndata\n  items\n    - A\n    - B\n    - C\n";
    let (html, warnings) = render_with_lint(source, &RenderConfig::default()).unwrap();
    assert!(html.contains("ig-compare-right"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].category.to_string(), "cardinality");
}

#[test]
fn test_icon_fallback_in_html() {
    let source = "infographic list-grid-compact-card\ndata\n  items\n    - A\n      icon mdi:star\n    - B\n      icon star\n";
    let config = RenderConfig::new().with_html(HtmlConfig::new().with_standalone(false));
    let html = render_with_config(source, &config).unwrap();
    assert!(html.contains(r#"<span class="iconify" data-icon="mdi:star"></span>"#));
    assert!(html.contains(r#"<span class="ig-icon-fallback">●</span>"#));
}
