//! Four-cell quadrant grid

use crate::parser::Item;

use super::compare::{bullet, child_list};
use super::types::VisualNode;

pub const QUADRANT_CELLS: usize = 4;

/// Items fill cells `quadrant-1..4` in order; extra items are dropped and
/// cells without an item stay empty.
pub fn render(items: &[Item]) -> VisualNode {
    let mut grid = VisualNode::block("quadrant");

    for index in 0..QUADRANT_CELLS {
        let mut cell = VisualNode::block("quadrant-cell").with_class(format!("quadrant-{}", index + 1));

        if let Some(item) = items.get(index) {
            cell.push(VisualNode::text_block("quadrant-header", &item.label));
            if let Some(desc) = &item.desc {
                cell.push(VisualNode::text_block("quadrant-desc", desc));
            }
            if let Some(list) = child_list(item, "quadrant-list", bullet) {
                cell.push(list);
            }
        }
        grid.push(cell);
    }

    grid
}
