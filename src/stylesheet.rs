//! Color schemes for infographic output
//!
//! A stylesheet maps scheme names to a light and a dark [`Palette`] of eleven
//! semantic color roles, plus the categorical palette used for pie slices.
//! The built-in table is embedded as TOML; user stylesheets use the same
//! format and are merged over it.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Error for an unrecognised option string such as a theme or scheme name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

/// Light or dark rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseOptionError {
                kind: "theme",
                value: other.to_string(),
                expected: "light, dark".to_string(),
            }),
        }
    }
}

/// Built-in color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Default,
    Antv,
    Catppuccin,
    Github,
    Dracula,
    Nord,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Default,
        ColorScheme::Antv,
        ColorScheme::Catppuccin,
        ColorScheme::Github,
        ColorScheme::Dracula,
        ColorScheme::Nord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Default => "default",
            ColorScheme::Antv => "antv",
            ColorScheme::Catppuccin => "catppuccin",
            ColorScheme::Github => "github",
            ColorScheme::Dracula => "dracula",
            ColorScheme::Nord => "nord",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "color scheme",
                value: s.to_string(),
                expected: ColorScheme::ALL.map(|c| c.as_str()).join(", "),
            })
    }
}

/// The eleven semantic color roles of one scheme in one mode
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Palette {
    pub bg: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_light: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl Palette {
    /// Role names paired with colors, in a fixed order
    pub fn roles(&self) -> [(&'static str, &str); 11] {
        [
            ("bg", self.bg.as_str()),
            ("surface", self.surface.as_str()),
            ("border", self.border.as_str()),
            ("text", self.text.as_str()),
            ("text-muted", self.text_muted.as_str()),
            ("accent", self.accent.as_str()),
            ("accent-light", self.accent_light.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("info", self.info.as_str()),
        ]
    }
}

/// A scheme's light and dark palettes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemeColors {
    pub light: Palette,
    pub dark: Palette,
}

impl SchemeColors {
    pub fn for_mode(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Categorical colors for pie slices
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PieColors {
    pub light: Vec<String>,
    pub dark: Vec<String>,
}

impl PieColors {
    pub fn for_mode(&self, mode: ThemeMode) -> &[String] {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// A stylesheet mapping scheme names to palettes
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub schemes: HashMap<String, SchemeColors>,
    pub pie: PieColors,
    /// Built-in `default` scheme, kept apart so lookups survive its removal
    /// from `schemes`
    fallback: SchemeColors,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    schemes: HashMap<String, SchemeColors>,
    pie: Option<PieColors>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Scheme every lookup falls back to
pub const FALLBACK_SCHEME: &str = "default";

const FALLBACK_PIE: &str = "#888888";

/// Built-in schemes and pie palettes
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "built-in"

[pie]
light = ["#3b82f6", "#22c55e", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16"]
dark = ["#89b4fa", "#a6e3a1", "#f9e2af", "#f38ba8", "#cba6f7", "#89dceb", "#f5c2e7", "#a6e3a1"]

[schemes.default.light]
bg = "#ffffff"
surface = "#f8fafc"
border = "#e2e8f0"
text = "#1e293b"
text-muted = "#64748b"
accent = "#3b82f6"
accent-light = "#dbeafe"
success = "#22c55e"
warning = "#f59e0b"
error = "#ef4444"
info = "#06b6d4"

[schemes.default.dark]
bg = "#1e1e2e"
surface = "#313244"
border = "#45475a"
text = "#cdd6f4"
text-muted = "#a6adc8"
accent = "#89b4fa"
accent-light = "#313244"
success = "#a6e3a1"
warning = "#f9e2af"
error = "#f38ba8"
info = "#89dceb"

[schemes.antv.light]
bg = "#ffffff"
surface = "#fafafa"
border = "#e8e8e8"
text = "#2c3e50"
text-muted = "#7f8c8d"
accent = "#5b8ff9"
accent-light = "#e6f7ff"
success = "#52c41a"
warning = "#faad14"
error = "#ff4d4f"
info = "#1890ff"

[schemes.antv.dark]
bg = "#1f1f1f"
surface = "#2c2c2c"
border = "#383838"
text = "#e8e8e8"
text-muted = "#a0a0a0"
accent = "#5b8ff9"
accent-light = "#262626"
success = "#52c41a"
warning = "#faad14"
error = "#ff4d4f"
info = "#1890ff"

[schemes.catppuccin.light]
bg = "#eff1f5"
surface = "#e6e9ef"
border = "#ccd0da"
text = "#4c4f69"
text-muted = "#6c6f85"
accent = "#1e66f5"
accent-light = "#dce0f8"
success = "#40a02b"
warning = "#df8e1d"
error = "#d20f39"
info = "#04a5e5"

[schemes.catppuccin.dark]
bg = "#1e1e2e"
surface = "#313244"
border = "#45475a"
text = "#cdd6f4"
text-muted = "#a6adc8"
accent = "#89b4fa"
accent-light = "#313244"
success = "#a6e3a1"
warning = "#f9e2af"
error = "#f38ba8"
info = "#89dceb"

[schemes.github.light]
bg = "#ffffff"
surface = "#f6f8fa"
border = "#e1e4e8"
text = "#24292f"
text-muted = "#586069"
accent = "#0366d6"
accent-light = "#f1f8ff"
success = "#2ea44f"
warning = "#d29922"
error = "#cf222e"
info = "#1f883d"

[schemes.github.dark]
bg = "#0d1117"
surface = "#161b22"
border = "#30363d"
text = "#c9d1d9"
text-muted = "#8b949e"
accent = "#58a6ff"
accent-light = "#161b22"
success = "#3fb950"
warning = "#d29922"
error = "#f85149"
info = "#2f81f7"

[schemes.dracula.light]
bg = "#ffffff"
surface = "#f8f8fa"
border = "#e0e0e0"
text = "#282a36"
text-muted = "#6272a4"
accent = "#bd93f9"
accent-light = "#f3f3f3"
success = "#50fa7b"
warning = "#ffb86c"
error = "#ff5555"
info = "#8be9fd"

[schemes.dracula.dark]
bg = "#282a36"
surface = "#44475a"
border = "#6272a4"
text = "#f8f8f2"
text-muted = "#bd93f9"
accent = "#ff79c6"
accent-light = "#44475a"
success = "#50fa7b"
warning = "#ffb86c"
error = "#ff5555"
info = "#8be9fd"

[schemes.nord.light]
bg = "#eceff4"
surface = "#e5e9f0"
border = "#d8dee9"
text = "#2e3440"
text-muted = "#4c566a"
accent = "#5e81ac"
accent-light = "#eceff4"
success = "#a3be8c"
warning = "#ebcb8b"
error = "#bf616a"
info = "#88c0d0"

[schemes.nord.dark]
bg = "#2e3440"
surface = "#3b4252"
border = "#4c566a"
text = "#d8dee9"
text-muted = "#aeb8c1"
accent = "#88c0d0"
accent-light = "#3b4252"
success = "#a3be8c"
warning = "#ebcb8b"
error = "#bf616a"
info = "#81a1c1"

"##;

impl Stylesheet {
    /// Load stylesheet from TOML file and merge it over the built-in table
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string and merge it over the built-in table
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        Ok(Self::builtin().merged(parsed))
    }

    fn builtin() -> Self {
        let parsed: TomlStylesheet =
            toml::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML");
        let fallback = parsed
            .schemes
            .get(FALLBACK_SCHEME)
            .cloned()
            .expect("Default palette should define the default scheme");
        Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            schemes: parsed.schemes,
            fallback,
            pie: parsed
                .pie
                .expect("Default palette should define pie colors"),
        }
    }

    fn merged(mut self, overrides: TomlStylesheet) -> Self {
        if let Some(metadata) = overrides.metadata {
            self.name = metadata.name.or(self.name);
            self.description = metadata.description.or(self.description);
        }
        self.schemes.extend(overrides.schemes);
        if let Some(pie) = overrides.pie {
            self.pie = pie;
        }
        self
    }

    pub fn has_scheme(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    /// Palette for a scheme and mode, falling back to the `default` scheme
    /// when the name is not defined. If `default` itself was removed from
    /// `schemes`, the built-in one is used.
    pub fn palette(&self, scheme: &str, mode: ThemeMode) -> &Palette {
        self.schemes
            .get(scheme)
            .or_else(|| self.schemes.get(FALLBACK_SCHEME))
            .unwrap_or(&self.fallback)
            .for_mode(mode)
    }

    /// Color of the `index`-th pie slice, cycling through the palette
    pub fn pie_color(&self, mode: ThemeMode, index: usize) -> &str {
        let colors = self.pie.for_mode(mode);
        if colors.is_empty() {
            return FALLBACK_PIE;
        }
        &colors[index % colors.len()]
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::builtin()
    }
}
