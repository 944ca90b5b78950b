//! HTML renderer for the visual node tree
//!
//! This module serialises a [`VisualNode`](crate::layout::VisualNode) tree to
//! HTML, with the pie chart as inline SVG, applying the configured class
//! prefix to every class name and custom property.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_html, to_data_url};
