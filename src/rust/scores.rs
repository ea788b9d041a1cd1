use std::fmt;

use serde::Serialize;

use crate::inference::{ClassificationResult, LabelScore};

/// Number of gauges on the dashboard
pub const GAUGE_COUNT: usize = 4;

/// Represents the ways a classifier distribution can fail to yield gauges.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Fewer categories were returned than gauges requested
    InsufficientData { needed: usize, got: usize },
    /// The selected scores sum to zero, so they cannot be rescaled
    DegenerateInput,
    /// A score is negative, infinite or NaN
    InvalidScore { label: String },
    /// Zero labels were requested
    EmptySelection,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { needed, got } => {
                write!(f, "Insufficient data: need {} categories, got {}", needed, got)
            }
            Self::DegenerateInput => write!(f, "Degenerate input: top scores sum to zero"),
            Self::InvalidScore { label } => write!(f, "Invalid score for label '{}'", label),
            Self::EmptySelection => write!(f, "Top-k selection needs k > 0"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// A selected label with its score rescaled to the 0-100 gauge range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedScore {
    pub label: String,
    /// Probability as returned by the classifier
    pub score: f64,
    pub display_value: f64,
}

/// The top-K labels of a distribution, rescaled so their display values sum
/// to 100 and ordered by descending original score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTopK {
    entries: Vec<NormalizedScore>,
}

impl NormalizedTopK {
    pub fn entries(&self) -> &[NormalizedScore] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&NormalizedScore> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.display_value).sum()
    }
}

/// Entries ordered by descending score; equal scores keep response order.
fn sorted_desc(results: &ClassificationResult) -> Result<Vec<&LabelScore>, ScoreError> {
    if let Some(bad) = results.iter().find(|e| !e.score.is_finite() || e.score < 0.0) {
        return Err(ScoreError::InvalidScore {
            label: bad.label.clone(),
        });
    }
    let mut sorted: Vec<&LabelScore> = results.iter().collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(sorted)
}

/// Selects the `k` highest-scoring labels and rescales them to sum to 100.
///
/// # Example
/// ```
/// use goemotions::{top_k, ClassificationResult};
///
/// let results: ClassificationResult =
///     [("joy", 0.6), ("fear", 0.2), ("anger", 0.1), ("love", 0.1)].into_iter().collect();
/// let top = top_k(&results, 2).unwrap();
/// assert_eq!(top.entries()[0].label, "joy");
/// assert!((top.entries()[0].display_value - 75.0).abs() < 1e-9);
/// ```
pub fn top_k(results: &ClassificationResult, k: usize) -> Result<NormalizedTopK, ScoreError> {
    if k == 0 {
        return Err(ScoreError::EmptySelection);
    }
    if results.len() < k {
        return Err(ScoreError::InsufficientData {
            needed: k,
            got: results.len(),
        });
    }

    let selected: Vec<&LabelScore> = sorted_desc(results)?.into_iter().take(k).collect();
    let total: f64 = selected.iter().map(|e| e.score).sum();
    if total == 0.0 {
        return Err(ScoreError::DegenerateInput);
    }

    let entries = selected
        .into_iter()
        .map(|e| NormalizedScore {
            label: e.label.clone(),
            score: e.score,
            display_value: e.score / total * 100.0,
        })
        .collect();

    Ok(NormalizedTopK { entries })
}

/// The single highest-scoring entry; ties go to the earliest in the response.
pub fn top_label(results: &ClassificationResult) -> Result<&LabelScore, ScoreError> {
    sorted_desc(results)?
        .into_iter()
        .next()
        .ok_or(ScoreError::InsufficientData { needed: 1, got: 0 })
}
