//! SWOT grid and two-sided comparison

use crate::parser::Item;
use crate::template::CompareLayout;

use super::types::{NodeKind, VisualNode};

/// Positional SWOT headers and their quadrant classes
pub const SWOT_QUADRANTS: [(&str, &str); 4] = [
    ("Strengths", "swot-s"),
    ("Weaknesses", "swot-w"),
    ("Opportunities", "swot-o"),
    ("Threats", "swot-t"),
];

pub fn render(items: &[Item], layout: CompareLayout) -> VisualNode {
    match layout {
        CompareLayout::Swot => swot(items),
        CompareLayout::Binary => binary(items),
    }
}

/// Bullet list of child labels, present whenever the item has a `children` block
pub(super) fn child_list(item: &Item, class: &str, entry: impl Fn(&Item) -> VisualNode) -> Option<VisualNode> {
    let children = item.children.as_ref()?;
    let mut list = VisualNode::new(NodeKind::List).with_class(class);
    list.children = children.iter().map(entry).collect();
    Some(list)
}

pub(super) fn bullet(child: &Item) -> VisualNode {
    VisualNode::new(NodeKind::ListItem).with_text(&child.label)
}

/// Always four quadrants; items past the fourth are ignored and missing ones
/// keep their positional header with no content.
fn swot(items: &[Item]) -> VisualNode {
    let mut grid = VisualNode::block("swot");

    for (index, (default_header, class)) in SWOT_QUADRANTS.iter().enumerate() {
        let item = items.get(index);
        let header = match item {
            Some(item) if !item.label.is_empty() => item.label.as_str(),
            _ => *default_header,
        };

        let mut quadrant = VisualNode::block("swot-quadrant")
            .with_class(*class)
            .with_child(VisualNode::text_block("swot-header", header));

        if let Some(item) = item {
            if let Some(desc) = &item.desc {
                quadrant.push(VisualNode::text_block("swot-content", desc));
            }
            if let Some(list) = child_list(item, "swot-list", bullet) {
                quadrant.push(list);
            }
        }
        grid.push(quadrant);
    }

    grid
}

/// First two items as left and right panels
fn binary(items: &[Item]) -> VisualNode {
    let mut panels = VisualNode::block("binary-compare");

    for (index, item) in items.iter().take(2).enumerate() {
        let side = if index == 0 { "compare-left" } else { "compare-right" };
        let mut panel = VisualNode::block("compare-side")
            .with_class(side)
            .with_child(VisualNode::text_block("compare-header", &item.label));

        if let Some(desc) = &item.desc {
            panel.push(VisualNode::text_block("compare-desc", desc));
        }
        let list = child_list(item, "compare-list", |child| {
            let mut entry = bullet(child);
            if let Some(desc) = &child.desc {
                entry.push(VisualNode::inline("compare-item-desc", format!(" - {}", desc)));
            }
            entry
        });
        if let Some(list) = list {
            panel.push(list);
        }
        panels.push(panel);
    }

    panels
}
