//! Pie, bar and column charts
//!
//! Every numeric consumer goes through [`Item::magnitude`], so absent, text,
//! negative and non-finite values all count as 0. Both the pie total and the
//! bar/column maximum are checked before dividing.

use std::f64::consts::PI;

use crate::parser::Item;
use crate::stylesheet::{Stylesheet, ThemeMode};
use crate::template::ChartLayout;

use super::types::{NodeKind, StyleValue, VisualNode, Wedge, PIE_VIEW_BOX};

/// Angle of the first slice edge: 12 o'clock
pub const PIE_START_ANGLE: f64 = -PI / 2.0;

pub fn render(items: &[Item], layout: ChartLayout, stylesheet: &Stylesheet, mode: ThemeMode) -> VisualNode {
    match layout {
        ChartLayout::Pie => pie(items, |index| stylesheet.pie_color(mode, index).to_string()),
        ChartLayout::Bar => bars(items),
        ChartLayout::Column => columns(items),
    }
}

/// Slices in item order, clockwise from 12 o'clock
pub fn wedges(items: &[Item], fill: impl Fn(usize) -> String) -> Vec<Wedge> {
    let total: f64 = items.iter().map(Item::magnitude).sum();
    let mut angle = PIE_START_ANGLE;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let sweep = if total > 0.0 {
                item.magnitude() / total * 2.0 * PI
            } else {
                0.0
            };
            let wedge = Wedge {
                start_angle: angle,
                sweep_angle: sweep,
                fill: fill(index),
            };
            angle += sweep;
            wedge
        })
        .collect()
}

/// Legend entry text: `<label> (<pct>%)`, one decimal, `0%` when the total is 0
pub fn legend_text(label: &str, value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{} ({:.1}%)", label, value / total * 100.0)
    } else {
        format!("{} (0%)", label)
    }
}

/// `value` as a percentage of `max`, 0 when `max` is not positive
pub fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max * 100.0
    } else {
        0.0
    }
}

fn pie(items: &[Item], fill: impl Fn(usize) -> String) -> VisualNode {
    let total: f64 = items.iter().map(Item::magnitude).sum();
    let slices = wedges(items, fill);

    let mut surface = VisualNode::new(NodeKind::Chart(PIE_VIEW_BOX)).with_class("pie-svg");
    let mut legend = VisualNode::block("pie-legend");

    for (item, wedge) in items.iter().zip(slices) {
        legend.push(
            VisualNode::block("legend-item")
                .with_child(
                    VisualNode::block("legend-color")
                        .with_style("background-color", StyleValue::Color(wedge.fill.clone())),
                )
                .with_child(VisualNode::inline(
                    "legend-label",
                    legend_text(&item.label, item.magnitude(), total),
                )),
        );
        surface.push(VisualNode::new(NodeKind::Wedge(wedge)).with_class("pie-slice"));
    }

    VisualNode::block("pie-chart")
        .with_child(surface)
        .with_child(legend)
}

fn max_magnitude(items: &[Item]) -> f64 {
    items.iter().map(Item::magnitude).fold(0.0, f64::max)
}

fn value_text(item: &Item) -> String {
    item.value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn bars(items: &[Item]) -> VisualNode {
    let max = max_magnitude(items);
    let mut chart = VisualNode::block("bar-chart");

    for item in items {
        let bar = VisualNode::block("bar")
            .with_style("width", StyleValue::Percent(scale(item.magnitude(), max)));
        chart.push(
            VisualNode::block("bar-row")
                .with_child(VisualNode::text_block("bar-label", &item.label))
                .with_child(
                    VisualNode::block("bar-wrapper")
                        .with_child(bar)
                        .with_child(VisualNode::text_block("bar-value", value_text(item))),
                ),
        );
    }

    chart
}

fn columns(items: &[Item]) -> VisualNode {
    let max = max_magnitude(items);
    let mut row = VisualNode::block("columns");

    for item in items {
        let column = VisualNode::block("column")
            .with_style("height", StyleValue::Percent(scale(item.magnitude(), max)))
            .with_child(VisualNode::text_block("column-value", value_text(item)));
        row.push(
            VisualNode::block("column-wrapper")
                .with_child(column)
                .with_child(VisualNode::text_block("column-label", &item.label)),
        );
    }

    VisualNode::block("column-chart").with_child(row)
}
