use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::component::Component;
use crate::error::{Error, IoResultExt, Result};

lazy_static! {
    static ref CATEGORY_LABEL: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

const UI: &[&str] = &["DarkModeToggle", "LightModeToggle", "FontControls"];
const LAYOUT: &[&str] = &["PageHeader", "OptionCard"];
const FEATURES: &[&str] = &[
    "QuranReader",
    "SurahSelector",
    "Verse",
    "VerseCard",
    "VerseSpeedDial",
    "PrayerTimes",
    "SearchResultsList",
];
const COMMON: &[&str] = &[
    "BackToggle",
    "ScrollToTop",
    "SearchInput",
    "Pagination",
    "DecorativeElements",
    "WaqfGuide",
];
const ROOT_EXPORTS: &[&str] = &["common", "features", "layout", "ui"];
const DUPLICATES: &[&str] = &[
    "QuranReader.tsx",
    "QuranReader.module.css",
    "SurahSelector.tsx",
    "SurahSelector.module.css",
    "Verse.tsx",
    "Verse.module.css",
    "VerseCard.tsx",
    "VerseCard.module.css",
    "VerseSpeedDial.tsx",
    "PrayerTimes.tsx",
    "PrayerTimes.module.css",
    "SearchResultsList.tsx",
    "DarkModeToggle.tsx",
    "DarkModeToggle.module.css",
    "LightModeToggle.tsx",
    "LightModeToggle.module.css",
    "FontControls.tsx",
    "FontControls.module.css",
    "PageHeader.tsx",
    "PageHeader.module.css",
    "OptionCard.tsx",
    "OptionCard.module.css",
    "BackToggle.tsx",
    "BackToggle.module.css",
    "DecorativeElements.tsx",
    "DecorativeElements.module.css",
    "Pagination.tsx",
    "Pagination.module.css",
    "ScrollToTop.tsx",
    "ScrollToTop.module.css",
    "SearchInput.tsx",
    "SearchInput.module.css",
    "WaqfGuide.tsx",
    "WaqfGuide.module.css",
];

/// A category subdirectory and the components that belong in it, in export order
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub components: Vec<Component>,
}

/// Everything a cleanup or organize run acts on
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Component source extension, without the leading dot
    pub source_extension: String,
    /// Paired stylesheet extension, without the leading dot
    pub style_extension: String,
    /// Barrel file name written into each category and the base directory
    pub index_file: String,
    /// Categories populated by the move phase
    pub moves: Vec<Category>,
    /// Categories that get a generated barrel
    pub indices: Vec<Category>,
    /// Category directories re-exported from the root barrel
    pub root_exports: Vec<String>,
    /// File names removed by cleanup
    pub duplicates: Vec<String>,
}

/// On-disk shape of a layout file; every field falls back to the built-in table
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LayoutFile {
    source_extension: String,
    style_extension: String,
    index_file: String,
    moves: Vec<CategoryFile>,
    indices: Vec<CategoryFile>,
    root_exports: Vec<String>,
    duplicates: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryFile {
    name: String,
    #[serde(default)]
    components: Vec<String>,
}

fn category(name: &str, components: &[&str]) -> CategoryFile {
    CategoryFile {
        name: name.to_string(),
        components: components.iter().map(|c| c.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LayoutFile {
    fn default() -> Self {
        Self {
            source_extension: "tsx".to_string(),
            style_extension: "module.css".to_string(),
            index_file: "index.ts".to_string(),
            moves: vec![
                category("ui", UI),
                category("layout", LAYOUT),
                category("features", FEATURES),
            ],
            indices: vec![
                category("common", COMMON),
                category("ui", UI),
                category("layout", LAYOUT),
                category("features", FEATURES),
            ],
            root_exports: strings(ROOT_EXPORTS),
            duplicates: strings(DUPLICATES),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        // The built-in table is valid by construction
        Layout::from_raw(LayoutFile::default()).unwrap()
    }
}

/// A single path segment: non-empty, no separators, not `.` or `..`
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

fn check_category_label(label: &str) -> Result<()> {
    if CATEGORY_LABEL.is_match(label) {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "'{}' is not a valid category directory name",
            label
        )))
    }
}

fn check_file_name(kind: &str, name: &str) -> Result<()> {
    if is_plain_file_name(name) {
        Ok(())
    } else {
        Err(Error::Config(format!("{} '{}' must be a plain file name", kind, name)))
    }
}

fn build_categories(raw: Vec<CategoryFile>) -> Result<Vec<Category>> {
    raw.into_iter()
        .map(|entry| {
            check_category_label(&entry.name)?;
            let components = entry
                .components
                .iter()
                .map(|name| Component::new(name))
                .collect::<Result<Vec<_>>>()?;
            Ok(Category {
                name: entry.name,
                components,
            })
        })
        .collect()
}

impl Layout {
    fn from_raw(raw: LayoutFile) -> Result<Self> {
        check_file_name("source extension", &raw.source_extension)?;
        check_file_name("style extension", &raw.style_extension)?;
        check_file_name("index file", &raw.index_file)?;
        for label in &raw.root_exports {
            check_category_label(label)?;
        }
        for name in &raw.duplicates {
            check_file_name("duplicate", name)?;
        }

        Ok(Self {
            source_extension: raw.source_extension,
            style_extension: raw.style_extension,
            index_file: raw.index_file,
            moves: build_categories(raw.moves)?,
            indices: build_categories(raw.indices)?,
            root_exports: raw.root_exports,
            duplicates: raw.duplicates,
        })
    }

    /// Parse and validate a layout from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: LayoutFile = toml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Load a layout file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).at_path(path)?;
        Self::from_toml(&text)
    }
}
