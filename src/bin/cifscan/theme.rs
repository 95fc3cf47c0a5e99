//! Color themes for the highlight command.
//!
//! A theme maps each token category to a terminal color. Themes load from
//! YAML files naming crossterm colors:
//!
//! ```yaml
//! keyword: magenta
//! tag: cyan
//! complex_value: green
//! comment: dark_grey
//! simple_value: yellow
//! ```
//!
//! Use `Theme::from_yaml()` to load a theme from a string and
//! `Theme::from_yaml_file()` to load one from a file; `Theme::default()` is
//! the built-in palette.

use cifscan::cif::TokenCategory;
use crossterm::style::Color;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;

/// Color names accepted in theme files, mapped to terminal colors.
static NAMED_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color::Black),
        ("dark_grey", Color::DarkGrey),
        ("red", Color::Red),
        ("dark_red", Color::DarkRed),
        ("green", Color::Green),
        ("dark_green", Color::DarkGreen),
        ("yellow", Color::Yellow),
        ("dark_yellow", Color::DarkYellow),
        ("blue", Color::Blue),
        ("dark_blue", Color::DarkBlue),
        ("magenta", Color::Magenta),
        ("dark_magenta", Color::DarkMagenta),
        ("cyan", Color::Cyan),
        ("dark_cyan", Color::DarkCyan),
        ("white", Color::White),
        ("grey", Color::Grey),
    ])
});

/// Errors from resolving a theme configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    UnknownColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownColor(name) => write!(f, "Unknown color name '{}'", name),
        }
    }
}

impl std::error::Error for ThemeError {}

/// On-disk theme shape: one color name per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub keyword: String,
    pub tag: String,
    pub complex_value: String,
    pub comment: String,
    pub simple_value: String,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        Ok(Theme {
            keyword: resolve_color(&self.keyword)?,
            tag: resolve_color(&self.tag)?,
            complex_value: resolve_color(&self.complex_value)?,
            comment: resolve_color(&self.comment)?,
            simple_value: resolve_color(&self.simple_value)?,
        })
    }
}

fn resolve_color(name: &str) -> Result<Color, ThemeError> {
    NAMED_COLORS
        .get(name)
        .copied()
        .ok_or_else(|| ThemeError::UnknownColor(name.to_string()))
}

/// Resolved theme: a terminal color per token category.
#[derive(Debug, Clone)]
pub struct Theme {
    keyword: Color,
    tag: Color,
    complex_value: Color,
    comment: Color,
    simple_value: Color,
}

impl Theme {
    pub fn color_for(&self, category: TokenCategory) -> Color {
        match category {
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Tag => self.tag,
            TokenCategory::ComplexValue => self.complex_value,
            TokenCategory::Comment => self.comment,
            TokenCategory::SimpleValue => self.simple_value,
        }
    }

    /// Load a theme from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: ThemeConfig = serde_yaml::from_str(yaml_str)?;
        Ok(config.into_theme()?)
    }

    /// Load a theme from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            keyword: Color::Magenta,
            tag: Color::Cyan,
            complex_value: Color::Green,
            comment: Color::DarkGrey,
            simple_value: Color::Yellow,
        }
    }
}
