//! Infographic - a small indentation-based DSL for infographics
//!
//! This library provides a parser, a template-dispatch layout engine, and an
//! HTML renderer for the infographic DSL.
//!
//! # Example
//!
//! ```rust
//! use infographic::render;
//!
//! let html = render("infographic list-grid-badge-card\ndata\n  items\n    - Fast\n").unwrap();
//! assert!(html.contains("ig-badge-card"));
//! ```

pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod stylesheet;
pub mod template;

pub use error::ParseError;
pub use layout::{LintWarning, RenderOptions, VisualNode};
pub use parser::{parse, Document, Item, ItemValue};
pub use renderer::{render_html, to_data_url, HtmlConfig};
pub use template::{is_valid_template, resolve_layout, template_category, TemplateCategory};

use thiserror::Error;
use tracing::{debug, warn};

// Re-export Stylesheet for public API
pub use stylesheet::{ColorScheme, Stylesheet, ThemeMode};

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Theme, animation flag and color scheme
    pub options: RenderOptions,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: log the visual tree
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render DSL source to HTML with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// builds the visual tree for the document's template, and serialises it.
///
/// # Example
///
/// ```rust
/// use infographic::render;
///
/// let html = render(r#"
/// infographic chart-pie-plain-text
/// data
///   title Market share
///   items
///     - A
///       value 60
///     - B
///       value 40
/// "#).unwrap();
///
/// assert!(html.contains("<svg"));
/// assert!(html.contains("A (60.0%)"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render DSL source to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use infographic::{render_with_config, HtmlConfig, RenderConfig, RenderOptions, ThemeMode};
///
/// let config = RenderConfig::new()
///     .with_options(RenderOptions::new().with_theme(ThemeMode::Dark))
///     .with_html(HtmlConfig::new().with_standalone(false));
///
/// let html = render_with_config("infographic compare-swot", &config).unwrap();
/// assert!(html.starts_with("<div class=\"ig-wrapper ig-dark"));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let tree = build_tree(source, config)?;
    Ok(render_html(&tree, &config.html))
}

/// Render DSL source to HTML and also return the lint findings
///
/// The output is produced even when warnings are present; they describe
/// input the renderer degraded rather than rejected.
pub fn render_with_lint(
    source: &str,
    config: &RenderConfig,
) -> Result<(String, Vec<LintWarning>), RenderError> {
    let doc = parse(source)?;
    let warnings = layout::lint::check(&doc);
    let tree = tree_for(&doc, config);
    Ok((render_html(&tree, &config.html), warnings))
}

/// Parse the source and build its visual tree without serialising it
pub fn build_tree(source: &str, config: &RenderConfig) -> Result<VisualNode, RenderError> {
    let doc = parse(source)?;

    for warning in layout::lint::check(&doc) {
        warn!(category = %warning.category, "{}", warning.message);
    }

    Ok(tree_for(&doc, config))
}

fn tree_for(doc: &Document, config: &RenderConfig) -> VisualNode {
    let tree = layout::render(doc, &config.options, &config.stylesheet);

    if config.debug {
        fn log_tree(node: &VisualNode, depth: usize) {
            debug!(
                "{}{:?} [{}]{}",
                "  ".repeat(depth),
                node.kind,
                node.classes.join(" "),
                node.text.as_deref().map(|t| format!(" {:?}", t)).unwrap_or_default()
            );
            for child in &node.children {
                log_tree(child, depth + 1);
            }
        }
        log_tree(&tree, 0);
    }

    tree
}
