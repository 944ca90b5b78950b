//! Layout engine: turns a parsed document into a tree of visual nodes
//!
//! The template name picks a category and then a concrete layout (see
//! [`crate::template`]). Each category module builds its part of the tree
//! from the document items; [`engine`] wraps it with the theme and title.
//! Nothing here fails: degenerate input degrades to empty or zero-sized
//! output, and [`lint`] reports where that happened.

pub mod chart;
pub mod compare;
pub mod config;
pub mod engine;
pub mod hierarchy;
pub mod icon;
pub mod lint;
pub mod list;
pub mod quadrant;
pub mod sequence;
pub mod types;

pub use config::RenderOptions;
pub use engine::{render, render_into};
pub use icon::resolve_icon;
pub use lint::{LintCategory, LintWarning};
pub use types::*;
