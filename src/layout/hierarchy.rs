//! Recursive tree and mindmap layout

use crate::parser::Item;
use crate::template::HierarchyLayout;

use super::types::{StyleValue, VisualNode};

pub fn render(items: &[Item], layout: HierarchyLayout) -> VisualNode {
    let class = match layout {
        HierarchyLayout::Tree => "tree",
        HierarchyLayout::Mindmap => "mindmap",
    };
    let mut container = VisualNode::block(class);
    container.children = nodes(items, 0);
    container
}

/// One wrapper per item, carrying `--level`; children recurse one level down
fn nodes(items: &[Item], level: usize) -> Vec<VisualNode> {
    items
        .iter()
        .map(|item| {
            let mut node =
                VisualNode::block("tree-node").with_child(VisualNode::text_block("tree-label", &item.label));
            if let Some(desc) = &item.desc {
                node.push(VisualNode::text_block("tree-desc", desc));
            }

            let mut wrapper = VisualNode::block("tree-node-wrapper")
                .with_style("--level", StyleValue::Index(level))
                .with_child(node);

            let children = item.children();
            if !children.is_empty() {
                let mut group = VisualNode::block("tree-children");
                group.children = nodes(children, level + 1);
                wrapper.push(group);
            }
            wrapper
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(node: &VisualNode) -> Option<usize> {
        node.style("--level").and_then(StyleValue::as_index)
    }

    #[test]
    fn test_levels_follow_depth() {
        let items = vec![
            Item::new("Root").with_children(vec![Item::new("Child")
                .with_children(vec![Item::new("Grandchild").with_children(vec![Item::new("Leaf")])])]),
            Item::new("Second root"),
        ];
        let tree = render(&items, HierarchyLayout::Tree);
        assert!(tree.has_class("tree"));

        let levels: Vec<_> = tree
            .find_all("tree-node-wrapper")
            .into_iter()
            .map(|w| (w.find("tree-label").and_then(|l| l.text.clone()), level(w)))
            .collect();
        assert_eq!(
            levels,
            vec![
                (Some("Root".to_string()), Some(0)),
                (Some("Child".to_string()), Some(1)),
                (Some("Grandchild".to_string()), Some(2)),
                (Some("Leaf".to_string()), Some(3)),
                (Some("Second root".to_string()), Some(0)),
            ]
        );
    }

    #[test]
    fn test_empty_children_group_is_omitted() {
        let items = vec![Item::new("A").with_children(vec![])];
        let tree = render(&items, HierarchyLayout::Mindmap);
        assert!(tree.has_class("mindmap"));
        assert!(tree.find("tree-children").is_none());
    }
}
