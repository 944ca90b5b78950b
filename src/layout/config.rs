//! Options for building the visual tree

use crate::stylesheet::{ColorScheme, ThemeMode};

/// Render options supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Light or dark variant of the color scheme
    pub theme: ThemeMode,

    /// Adds the `animated` class to the wrapper; no animation is computed here
    pub enable_animations: bool,

    /// Named palette; a document `theme` line naming a known scheme overrides it
    pub color_scheme: ColorScheme,
}

impl RenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the light/dark theme
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the animation flag
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.enable_animations = enabled;
        self
    }

    /// Set the color scheme
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }
}
