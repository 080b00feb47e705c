//! Theme support for mark styling
//!
//! Maps symbolic style tokens to concrete color values so the same chart can
//! be rendered under different palettes. Hosts (and the demo CLI) look up
//! tokens like `mark-fill` when styling freshly created marks.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A theme mapping symbolic style tokens to concrete values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

// Default palette: neutral marks on a light canvas
const DEFAULT_PALETTE: &str = r##"
[colors]
# Mark styling
mark-fill = "#e3f2fd"
mark-stroke = "#1565c0"

# Canvas chrome
canvas-background = "#ffffff"
canvas-grid = "#eeeeee"

# Editing affordances
guide = "#f50057"
handle = "#2196f3"
anchor = "#4caf50"
dropzone = "#ff9800"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(Theme {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a token, or None if this theme does not define it
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a token with fallback to the default palette, then to a
    /// category default based on the token prefix.
    pub fn resolve_or_default(&self, token: &str) -> String {
        self.resolve(token)
            .map(str::to_string)
            .or_else(|| Theme::default().resolve(token).map(str::to_string))
            .unwrap_or_else(|| {
                let fallback = if token.starts_with("canvas") {
                    "#ffffff"
                } else {
                    "#333333"
                };
                fallback.to_string()
            })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night_theme() -> Theme {
        Theme::from_toml(
            r##"
[metadata]
name = "Night"

[colors]
mark-fill = "#0d1b2a"
canvas-background = "#000000"
"##,
        )
        .expect("test theme should parse")
    }

    #[test]
    fn test_theme_override_beats_default_palette() {
        let theme = night_theme();
        assert_eq!(theme.name, Some("Night".to_string()));
        // The token the theme defines wins over the built-in palette...
        assert_eq!(theme.resolve_or_default("mark-fill"), "#0d1b2a");
        // ...while undefined tokens keep falling through to it
        assert_eq!(theme.resolve_or_default("mark-stroke"), "#1565c0");
    }

    #[test]
    fn test_unknown_tokens_use_category_fallback() {
        let theme = night_theme();
        // Neither the theme nor the default palette knows these; canvas
        // tokens default light, everything else dark
        assert_eq!(theme.resolve("canvas-shadow"), None);
        assert_eq!(theme.resolve_or_default("canvas-shadow"), "#ffffff");
        assert_eq!(theme.resolve_or_default("connector"), "#333333");
    }

    #[test]
    fn test_default_palette_covers_editor_affordances() {
        let theme = Theme::default();
        for token in ["mark-fill", "mark-stroke", "guide", "handle", "anchor", "dropzone"] {
            assert!(
                theme.resolve(token).is_some(),
                "default palette is missing '{}'",
                token
            );
        }
    }

    #[test]
    fn test_colors_table_is_required() {
        // A theme without a [colors] table is malformed, not empty
        let result = Theme::from_toml("[metadata]\nname = \"Bare\"\n");
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }
}
