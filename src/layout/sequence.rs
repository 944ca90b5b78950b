//! Sequence layouts
//!
//! All five variants build the same ordered step shape. They differ in the
//! marker (number or dot), whether steps alternate sides, and the decoration
//! attached to each step, so each variant is a row in [`StepStyle`] terms
//! rather than a separate builder.

use crate::parser::Item;
use crate::template::SequenceLayout;

use super::types::{StyleValue, VisualNode};

#[derive(Debug, Clone, Copy)]
enum Marker {
    Number,
    Dot,
}

#[derive(Debug, Clone, Copy)]
struct StepStyle {
    /// Class prefix for the step's parts (`<family>-label`, ...)
    family: &'static str,
    container: &'static str,
    step: &'static str,
    marker: Marker,
    /// `left` on even indices, `right` on odd
    alternate: bool,
    /// `step-line` connector after every step but the last
    connector: bool,
    /// `--step-index` custom property
    step_index: bool,
    /// Label and description wrapped in a `<family>-content` block
    content_block: bool,
    underline: bool,
}

impl StepStyle {
    fn for_layout(layout: SequenceLayout) -> Self {
        let base = StepStyle {
            family: "step",
            container: "simple-steps",
            step: "step",
            marker: Marker::Number,
            alternate: false,
            connector: false,
            step_index: false,
            content_block: true,
            underline: false,
        };
        match layout {
            SequenceLayout::Steps => StepStyle {
                connector: true,
                ..base
            },
            SequenceLayout::Timeline => StepStyle {
                family: "timeline",
                container: "timeline",
                step: "timeline-entry",
                marker: Marker::Dot,
                alternate: true,
                ..base
            },
            SequenceLayout::Snake => StepStyle {
                family: "snake",
                container: "snake-steps",
                step: "snake-step",
                alternate: true,
                ..base
            },
            SequenceLayout::Ascending => StepStyle {
                family: "ascending",
                container: "ascending-steps",
                step: "ascending-step",
                step_index: true,
                content_block: false,
                ..base
            },
            SequenceLayout::Zigzag => StepStyle {
                family: "zigzag",
                container: "zigzag-steps",
                step: "zigzag-step",
                alternate: true,
                underline: true,
                ..base
            },
        }
    }

    fn part(&self, name: &str) -> String {
        format!("{}-{}", self.family, name)
    }
}

/// Side class for an alternating layout
pub fn side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "left"
    } else {
        "right"
    }
}

pub fn render(items: &[Item], layout: SequenceLayout) -> VisualNode {
    let style = StepStyle::for_layout(layout);
    let mut container = VisualNode::block(style.container);

    for (index, item) in items.iter().enumerate() {
        container.push(step(&style, item, index, index + 1 == items.len()));
    }

    container
}

fn step(style: &StepStyle, item: &Item, index: usize, is_last: bool) -> VisualNode {
    let mut node = VisualNode::block(style.step);
    if style.alternate {
        node = node.with_class(side(index));
    }
    if style.step_index {
        node = node.with_style("--step-index", StyleValue::Index(index));
    }

    node.push(match style.marker {
        Marker::Number => VisualNode::text_block(&style.part("num"), (index + 1).to_string()),
        Marker::Dot => VisualNode::block(&style.part("dot")),
    });

    let mut text = vec![VisualNode::text_block(&style.part("label"), &item.label)];
    if let Some(desc) = &item.desc {
        text.push(VisualNode::text_block(&style.part("desc"), desc));
    }
    if style.underline {
        text.push(VisualNode::block("underline"));
    }

    if style.content_block {
        let mut content = VisualNode::block(&style.part("content"));
        content.children = text;
        node.push(content);
    } else {
        node.children.extend(text);
    }

    if style.connector && !is_last {
        node.push(VisualNode::block("step-line"));
    }

    node
}
