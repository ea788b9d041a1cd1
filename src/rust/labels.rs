use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Severity categories of the hate-speech classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HateCategory {
    Acceptable,
    Inappropriate,
    Offensive,
    Violent,
}

impl HateCategory {
    /// Display text, which is also the stem of the category's image asset
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acceptable => "Acceptable",
            Self::Inappropriate => "inappropriate",
            Self::Offensive => "Offensive",
            Self::Violent => "Violent",
        }
    }
}

impl fmt::Display for HateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hate-speech label: {0}")]
pub struct UnknownLabelError(pub String);

/// Lookup from raw classifier codes to [`HateCategory`].
#[derive(Debug, Clone)]
pub struct HateLabelMap {
    codes: HashMap<&'static str, HateCategory>,
}

impl Default for HateLabelMap {
    fn default() -> Self {
        let codes = HashMap::from([
            ("LABEL_0", HateCategory::Acceptable),
            ("LABEL_1", HateCategory::Inappropriate),
            ("LABEL_2", HateCategory::Offensive),
            ("LABEL_3", HateCategory::Violent),
        ]);
        Self { codes }
    }
}

impl HateLabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a raw code such as `LABEL_2` into its category.
    ///
    /// # Example
    /// ```
    /// use goemotions::HateLabelMap;
    ///
    /// let map = HateLabelMap::new();
    /// assert_eq!(map.map_hate_label("LABEL_2").unwrap().as_str(), "Offensive");
    /// assert!(map.map_hate_label("LABEL_9").is_err());
    /// ```
    pub fn map_hate_label(&self, code: &str) -> Result<HateCategory, UnknownLabelError> {
        self.codes
            .get(code)
            .copied()
            .ok_or_else(|| UnknownLabelError(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
