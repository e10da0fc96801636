//! Catalog configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a user config file placed in the project root:
//!
//! ```text
//! library/
//! ├── config.toml              # Optional overrides
//! ├── pdfs/                    # Documents (flat or one category level)
//! └── covers/                  # Generated thumbnails
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [library]
//! documents_dir = "pdfs"
//! covers_dir = "covers"
//! extension = "pdf"
//! general_label = "Genel"
//!
//! [index]
//! full = "books.json"
//! minimal = "books_min.json"
//! collation_locale = "tr"
//!
//! [covers]
//! target_width = 600
//! width = 600
//! height = 800
//! wrap_ratio = 0.8
//! font_size = 40.0
//! fallback_fonts = ["C:/Windows/Fonts/DejaVuSans.ttf", "C:/Windows/Fonts/arial.ttf"]
//! gradient_top = [20, 20, 40]
//! gradient_bottom = [60, 40, 120]
//! text_color = [255, 255, 255]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [covers]
//! font = "/usr/share/fonts/noto/NotoSerif-Regular.ttf"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::classify::Conventions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory conventions shared by the index and the cover generator.
    pub library: LibraryConfig,
    /// Index output files and ordering.
    pub index: IndexConfig,
    /// Thumbnail rendering settings.
    pub covers: CoversConfig,
}

impl CatalogConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("library.documents_dir", &self.library.documents_dir),
            ("library.covers_dir", &self.library.covers_dir),
            ("library.extension", &self.library.extension),
            ("index.full", &self.index.full),
            ("index.minimal", &self.index.minimal),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        // Classification compares the first path segment with these names.
        for (key, value) in [
            ("library.documents_dir", &self.library.documents_dir),
            ("library.covers_dir", &self.library.covers_dir),
        ] {
            if !is_single_folder_name(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single folder name directly under the project root, got {value:?}"
                )));
            }
        }
        let covers = &self.covers;
        if covers.target_width == 0 || covers.width == 0 || covers.height == 0 {
            return Err(ConfigError::Validation(
                "covers.target_width, covers.width and covers.height must be non-zero".into(),
            ));
        }
        if !(covers.wrap_ratio > 0.0 && covers.wrap_ratio <= 1.0) {
            return Err(ConfigError::Validation(
                "covers.wrap_ratio must be in (0, 1]".into(),
            ));
        }
        if covers.font_size <= 0.0 || !covers.font_size.is_finite() {
            return Err(ConfigError::Validation(
                "covers.font_size must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// True for a plain folder name such as `pdfs`: one normal path component,
/// no separators of either platform.
fn is_single_folder_name(value: &str) -> bool {
    if value.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Directory conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Document-root folder name under the project root (case-insensitive).
    pub documents_dir: String,
    /// Cover tree root under the project root.
    pub covers_dir: String,
    /// Document file extension, without the dot.
    pub extension: String,
    /// Category label for documents placed directly in the document root.
    pub general_label: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            documents_dir: "pdfs".to_string(),
            covers_dir: "covers".to_string(),
            extension: "pdf".to_string(),
            general_label: "Genel".to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn conventions(&self) -> Conventions<'_> {
        Conventions {
            documents_dir: &self.documents_dir,
            covers_dir: &self.covers_dir,
            general_label: &self.general_label,
        }
    }
}

/// Index output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Full view: every field, indented.
    pub full: String,
    /// Minimal view: title/category/file/cover, compact.
    pub minimal: String,
    /// BCP-47 tag for collation. Empty selects code-point order.
    pub collation_locale: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            full: "books.json".to_string(),
            minimal: "books_min.json".to_string(),
            collation_locale: "tr".to_string(),
        }
    }
}

/// Thumbnail rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoversConfig {
    /// Width in pixels of a rasterized first page.
    pub target_width: u32,
    /// Placeholder canvas width.
    pub width: u32,
    /// Placeholder canvas height.
    pub height: u32,
    /// Longest placeholder line as a share of canvas width.
    pub wrap_ratio: f32,
    /// Placeholder font size in pixels.
    pub font_size: f32,
    /// Preferred TrueType/OpenType font. Tried before `fallback_fonts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
    /// Fonts tried in order when the preferred one does not load.
    pub fallback_fonts: Vec<PathBuf>,
    pub gradient_top: [u8; 3],
    pub gradient_bottom: [u8; 3],
    pub text_color: [u8; 3],
    /// Directory holding the PDFium shared library. System lookup when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdfium_library: Option<PathBuf>,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            target_width: 600,
            width: 600,
            height: 800,
            wrap_ratio: 0.8,
            font_size: 40.0,
            font: None,
            fallback_fonts: vec![
                PathBuf::from("C:/Windows/Fonts/DejaVuSans.ttf"),
                PathBuf::from("C:/Windows/Fonts/arial.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/Library/Fonts/Arial Unicode.ttf"),
            ],
            gradient_top: [20, 20, 40],
            gradient_bottom: [60, 40, 120],
            text_color: [255, 255, 255],
            pdfium_library: None,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CatalogConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<CatalogConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CatalogConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the project root.
pub fn load_config(root: &Path) -> Result<CatalogConfig, ConfigError> {
    resolve_config(load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# shelfgen configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Library layout
# ---------------------------------------------------------------------------
[library]
# Folder holding the documents, directly under the project root.
# Either flat (pdfs/Book.pdf) or one category level (pdfs/Category/Book.pdf).
documents_dir = "pdfs"

# Folder receiving cover thumbnails. Mirrors the document layout.
covers_dir = "covers"

# Document file extension (matched case-insensitively).
extension = "pdf"

# Category label for documents placed directly in documents_dir.
general_label = "Genel"

# ---------------------------------------------------------------------------
# Index files
# ---------------------------------------------------------------------------
[index]
# Full index: every field, indented.
full = "books.json"

# Minimal index: title, category, file, cover; compact.
minimal = "books_min.json"

# Locale used to order entries by (category, title).
# An empty string orders by code point.
collation_locale = "tr"

# ---------------------------------------------------------------------------
# Covers
# ---------------------------------------------------------------------------
[covers]
# Width of a cover rendered from the first page. Height keeps the page ratio.
target_width = 600

# Placeholder canvas, used when a page cannot be rendered.
width = 600
height = 800

# Longest placeholder text line as a share of the canvas width.
wrap_ratio = 0.8

# Placeholder font size in pixels.
font_size = 40.0

# Preferred font for placeholder titles.
# font = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"

# Tried in order when the preferred font does not load. When none loads,
# a built-in bitmap face is used.
fallback_fonts = [
    "C:/Windows/Fonts/DejaVuSans.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
]

# Placeholder background, top to bottom, and title color as [r, g, b].
gradient_top = [20, 20, 40]
gradient_bottom = [60, 40, 120]
text_color = [255, 255, 255]

# Directory containing the PDFium shared library.
# Omit to use the system library search path.
# pdfium_library = "/opt/pdfium/lib"
"##
}
