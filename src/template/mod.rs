//! Template catalogue
//!
//! Template names are grouped into categories by prefix (`list-`, `sequence-`,
//! `hierarchy-`, `chart-`, `compare-`, `quadrant-`). Each category owns a small
//! table of exact names and a default layout, so any name sharing a known
//! prefix still renders with that category's generic layout.
//!
//! # Example
//!
//! ```text
//! infographic chart-pie-plain-text      -> Layout::Chart(ChartLayout::Pie)
//! infographic chart-donut               -> Layout::Chart(ChartLayout::Bar)   (category default)
//! infographic whatever                  -> Layout::List(ListLayout::Grid)    (unknown category)
//! ```

mod registry;

pub use registry::{
    is_valid_template, resolve_layout, template_category, ChartLayout, CompareLayout,
    HierarchyLayout, Layout, ListLayout, SequenceLayout, TemplateCategory, VALID_TEMPLATES,
};
