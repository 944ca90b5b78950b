//! Template names, categories, and the per-category layout tables

use std::fmt;

/// Every template name the renderer knows by exact match
pub const VALID_TEMPLATES: [&str; 17] = [
    "list-row-simple-horizontal-arrow",
    "list-grid-badge-card",
    "list-grid-compact-card",
    "list-column-done-list",
    "sequence-steps-simple",
    "sequence-timeline-simple",
    "sequence-snake-steps-simple",
    "sequence-ascending-steps",
    "sequence-zigzag-steps-underline-text",
    "hierarchy-tree-curved-line-rounded-rect-node",
    "hierarchy-mindmap-curved-line-compact-card",
    "chart-pie-plain-text",
    "chart-bar-plain-text",
    "chart-column-simple",
    "compare-swot",
    "compare-binary-horizontal-simple-fold",
    "quadrant-quarter-simple-card",
];

/// True if `name` is one of [`VALID_TEMPLATES`]
pub fn is_valid_template(name: &str) -> bool {
    VALID_TEMPLATES.contains(&name)
}

/// Template family, derived from the name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    List,
    Sequence,
    Hierarchy,
    Chart,
    Compare,
    Quadrant,
    Unknown,
}

impl TemplateCategory {
    const PREFIXES: [(&'static str, TemplateCategory); 6] = [
        ("list-", TemplateCategory::List),
        ("sequence-", TemplateCategory::Sequence),
        ("hierarchy-", TemplateCategory::Hierarchy),
        ("chart-", TemplateCategory::Chart),
        ("compare-", TemplateCategory::Compare),
        ("quadrant-", TemplateCategory::Quadrant),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::List => "list",
            TemplateCategory::Sequence => "sequence",
            TemplateCategory::Hierarchy => "hierarchy",
            TemplateCategory::Chart => "chart",
            TemplateCategory::Compare => "compare",
            TemplateCategory::Quadrant => "quadrant",
            TemplateCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a template name by its prefix
pub fn template_category(name: &str) -> TemplateCategory {
    TemplateCategory::PREFIXES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, category)| *category)
        .unwrap_or(TemplateCategory::Unknown)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// Numbered nodes chained by arrows
    HorizontalArrow,
    /// Card grid; `compact` switches the card style
    Grid { compact: bool },
    /// Checklist rows
    DoneList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceLayout {
    Steps,
    Timeline,
    Snake,
    Ascending,
    Zigzag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyLayout {
    Tree,
    Mindmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayout {
    Pie,
    Bar,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareLayout {
    Swot,
    Binary,
}

/// Concrete layout strategy chosen for a template name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    List(ListLayout),
    Sequence(SequenceLayout),
    Hierarchy(HierarchyLayout),
    Chart(ChartLayout),
    Compare(CompareLayout),
    Quadrant,
}

/// Exact-name table for one category plus the layout used for any other name
struct CategoryTable<L: 'static> {
    known: &'static [(&'static str, L)],
    default: L,
}

impl<L: Copy + 'static> CategoryTable<L> {
    fn lookup(&self, name: &str) -> Option<L> {
        self.known
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, layout)| *layout)
    }

    fn resolve(&self, name: &str) -> L {
        self.lookup(name).unwrap_or(self.default)
    }
}

const LIST_TABLE: CategoryTable<ListLayout> = CategoryTable {
    known: &[
        ("list-row-simple-horizontal-arrow", ListLayout::HorizontalArrow),
        ("list-grid-badge-card", ListLayout::Grid { compact: false }),
        ("list-grid-compact-card", ListLayout::Grid { compact: true }),
        ("list-column-done-list", ListLayout::DoneList),
    ],
    default: ListLayout::Grid { compact: false },
};

const SEQUENCE_TABLE: CategoryTable<SequenceLayout> = CategoryTable {
    known: &[
        ("sequence-steps-simple", SequenceLayout::Steps),
        ("sequence-timeline-simple", SequenceLayout::Timeline),
        ("sequence-snake-steps-simple", SequenceLayout::Snake),
        ("sequence-ascending-steps", SequenceLayout::Ascending),
        ("sequence-zigzag-steps-underline-text", SequenceLayout::Zigzag),
    ],
    default: SequenceLayout::Steps,
};

const CHART_TABLE: CategoryTable<ChartLayout> = CategoryTable {
    known: &[
        ("chart-pie-plain-text", ChartLayout::Pie),
        ("chart-bar-plain-text", ChartLayout::Bar),
        ("chart-column-simple", ChartLayout::Column),
    ],
    default: ChartLayout::Bar,
};

const COMPARE_TABLE: CategoryTable<CompareLayout> = CategoryTable {
    known: &[("compare-swot", CompareLayout::Swot)],
    default: CompareLayout::Binary,
};

/// List fallback: the card grid, compact when the name mentions it
fn list_fallback(name: &str) -> ListLayout {
    if name.contains("compact") {
        ListLayout::Grid { compact: true }
    } else {
        LIST_TABLE.default
    }
}

/// Resolve a template name to a layout: category first, then the category's
/// exact-name table, then that category's default. Unknown categories use the
/// list fallback, so every name renders with some layout.
pub fn resolve_layout(name: &str) -> Layout {
    match template_category(name) {
        TemplateCategory::List => Layout::List(
            LIST_TABLE
                .lookup(name)
                .unwrap_or_else(|| list_fallback(name)),
        ),
        TemplateCategory::Sequence => Layout::Sequence(SEQUENCE_TABLE.resolve(name)),
        TemplateCategory::Hierarchy => Layout::Hierarchy(if name.contains("mindmap") {
            HierarchyLayout::Mindmap
        } else {
            HierarchyLayout::Tree
        }),
        TemplateCategory::Chart => Layout::Chart(CHART_TABLE.resolve(name)),
        TemplateCategory::Compare => Layout::Compare(COMPARE_TABLE.resolve(name)),
        TemplateCategory::Quadrant => Layout::Quadrant,
        TemplateCategory::Unknown => Layout::List(list_fallback(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_templates() {
        assert!(is_valid_template("chart-pie-plain-text"));
        assert!(is_valid_template("compare-swot"));
        assert!(!is_valid_template("nonexistent"));
        assert!(!is_valid_template("chart-pie"));
    }

    #[test]
    fn test_category_by_prefix() {
        assert_eq!(
            template_category("sequence-timeline-simple"),
            TemplateCategory::Sequence
        );
        assert_eq!(template_category("list-anything"), TemplateCategory::List);
        assert_eq!(template_category("zzz-unknown"), TemplateCategory::Unknown);
        assert_eq!(template_category("chart"), TemplateCategory::Unknown);
        assert_eq!(TemplateCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_every_valid_template_has_a_known_category() {
        for name in VALID_TEMPLATES {
            assert_ne!(template_category(name), TemplateCategory::Unknown, "{name}");
        }
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(
            resolve_layout("list-row-simple-horizontal-arrow"),
            Layout::List(ListLayout::HorizontalArrow)
        );
        assert_eq!(
            resolve_layout("list-grid-compact-card"),
            Layout::List(ListLayout::Grid { compact: true })
        );
        assert_eq!(
            resolve_layout("sequence-zigzag-steps-underline-text"),
            Layout::Sequence(SequenceLayout::Zigzag)
        );
        assert_eq!(
            resolve_layout("chart-pie-plain-text"),
            Layout::Chart(ChartLayout::Pie)
        );
        assert_eq!(
            resolve_layout("compare-swot"),
            Layout::Compare(CompareLayout::Swot)
        );
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(
            resolve_layout("list-something-new"),
            Layout::List(ListLayout::Grid { compact: false })
        );
        assert_eq!(
            resolve_layout("list-other-compact"),
            Layout::List(ListLayout::Grid { compact: true })
        );
        assert_eq!(
            resolve_layout("sequence-future"),
            Layout::Sequence(SequenceLayout::Steps)
        );
        assert_eq!(resolve_layout("chart-pie"), Layout::Chart(ChartLayout::Bar));
        assert_eq!(
            resolve_layout("compare-swot-v2"),
            Layout::Compare(CompareLayout::Binary)
        );
        assert_eq!(resolve_layout("quadrant-anything"), Layout::Quadrant);
    }

    #[test]
    fn test_hierarchy_mode_by_substring() {
        assert_eq!(
            resolve_layout("hierarchy-mindmap-curved-line-compact-card"),
            Layout::Hierarchy(HierarchyLayout::Mindmap)
        );
        assert_eq!(
            resolve_layout("hierarchy-org"),
            Layout::Hierarchy(HierarchyLayout::Tree)
        );
    }

    #[test]
    fn test_unknown_uses_list_default() {
        assert_eq!(
            resolve_layout("zzz-unknown"),
            Layout::List(ListLayout::Grid { compact: false })
        );
    }
}
