//! List layouts: arrow chain, card grid, checklist

use crate::parser::Item;
use crate::template::ListLayout;

use super::icon::resolve_icon;
use super::types::VisualNode;

pub const ARROW_GLYPH: &str = "→";
pub const CHECK_GLYPH: &str = "✓";

pub fn render(items: &[Item], layout: ListLayout) -> VisualNode {
    match layout {
        ListLayout::HorizontalArrow => arrow_chain(items),
        ListLayout::Grid { compact } => card_grid(items, compact),
        ListLayout::DoneList => done_list(items),
    }
}

/// Numbered nodes joined by arrows; no arrow after the last node
fn arrow_chain(items: &[Item]) -> VisualNode {
    let mut list = VisualNode::block("horizontal-arrow-list");

    for (index, item) in items.iter().enumerate() {
        let mut content =
            VisualNode::block("item-content").with_child(VisualNode::text_block("item-label", &item.label));
        if let Some(desc) = &item.desc {
            content.push(VisualNode::text_block("item-desc", desc));
        }

        let mut entry = VisualNode::block("arrow-item")
            .with_child(VisualNode::text_block("step-number", (index + 1).to_string()))
            .with_child(content);
        if index + 1 < items.len() {
            entry.push(VisualNode::glyph("arrow", ARROW_GLYPH));
        }
        list.push(entry);
    }

    list
}

fn card_grid(items: &[Item], compact: bool) -> VisualNode {
    let card_class = if compact { "compact-card" } else { "badge-card" };
    let mut grid = VisualNode::block("grid-list");

    for item in items {
        let mut card = VisualNode::block(card_class);
        if let Some(icon) = &item.icon {
            card.push(VisualNode::block("card-icon").with_child(resolve_icon(icon)));
        }
        card.push(VisualNode::text_block("card-label", &item.label));
        if let Some(desc) = &item.desc {
            card.push(VisualNode::text_block("card-desc", desc));
        }
        if let Some(value) = &item.value {
            card.push(VisualNode::text_block("card-value", value.to_string()));
        }
        grid.push(card);
    }

    grid
}

fn done_list(items: &[Item]) -> VisualNode {
    let mut list = VisualNode::block("done-list");

    for item in items {
        let mut content =
            VisualNode::block("done-content").with_child(VisualNode::text_block("done-label", &item.label));
        if let Some(desc) = &item.desc {
            content.push(VisualNode::text_block("done-desc", desc));
        }
        list.push(
            VisualNode::block("done-item")
                .with_child(VisualNode::glyph("check", CHECK_GLYPH))
                .with_child(content),
        );
    }

    list
}
