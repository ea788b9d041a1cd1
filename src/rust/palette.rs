use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::warn;

use crate::labels::HateCategory;

/// Three band colors followed by the bar color.
pub type Palette = [&'static str; 4];

const WARM: Palette = ["#ff7f0e", "#ffbb78", "#2ca02c", "#d62728"];
const COOL: Palette = ["#1f77b4", "#aec7e8", "#ff7f0e", "#d62728"];
const ALARM: Palette = ["#d62728", "#ff9896", "#2ca02c", "#bcbd22"];
const PUZZLED: Palette = ["#9467bd", "#c5b0d5", "#ff7f0e", "#d62728"];

/// Palette used for labels missing from the table
pub const FALLBACK_LABEL: &str = "neutral";

lazy_static! {
    static ref BUILTIN: ColorMap = ColorMap::from_entries([
        ("admiration", COOL),
        ("amusement", WARM),
        ("anger", ALARM),
        ("annoyance", ALARM),
        ("approval", COOL),
        ("caring", COOL),
        ("confusion", PUZZLED),
        ("curiosity", PUZZLED),
        ("desire", WARM),
        ("disappointment", ALARM),
        ("disapproval", ALARM),
        ("disgust", ALARM),
        ("embarrassment", PUZZLED),
        ("excitement", WARM),
        ("fear", ALARM),
        ("gratitude", COOL),
        ("grief", ALARM),
        ("joy", WARM),
        ("love", COOL),
        ("nervousness", PUZZLED),
        ("optimism", COOL),
        ("pride", COOL),
        ("realization", PUZZLED),
        ("relief", COOL),
        ("remorse", ALARM),
        ("sadness", ALARM),
        ("surprise", PUZZLED),
        ("neutral", COOL),
    ]);
}

/// Emotion label to gauge palette.
#[derive(Debug, Clone)]
pub struct ColorMap {
    palettes: HashMap<String, Palette>,
}

impl ColorMap {
    /// The palettes of the 28 GoEmotions labels, built on first use.
    pub fn builtin() -> &'static ColorMap {
        &BUILTIN
    }

    pub fn from_entries<L: Into<String>>(entries: impl IntoIterator<Item = (L, Palette)>) -> Self {
        Self {
            palettes: entries.into_iter().map(|(l, p)| (l.into(), p)).collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Palette> {
        self.palettes.get(label)
    }

    /// Like [`ColorMap::get`], falling back to the neutral palette.
    pub fn palette_for(&self, label: &str) -> Palette {
        if let Some(palette) = self.palettes.get(label) {
            return *palette;
        }
        warn!("No palette for emotion '{}', using '{}'", label, FALLBACK_LABEL);
        self.palettes.get(FALLBACK_LABEL).copied().unwrap_or(COOL)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

/// Resolves hate-speech categories to their image files. Paths are built,
/// never opened.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    assets_dir: PathBuf,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetResolver {
    pub fn new<P: AsRef<Path>>(assets_dir: P) -> Self {
        Self {
            assets_dir: assets_dir.as_ref().to_path_buf(),
        }
    }

    pub fn image_for(&self, category: HateCategory) -> PathBuf {
        self.assets_dir.join(format!("{}.png", category.as_str()))
    }
}
