use serde::{Deserialize, Serialize};

use super::error::InferenceError;

/// One category returned by a classifier together with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// The full distribution returned by one classifier call, in response order.
///
/// # Example
/// ```
/// use goemotions::ClassificationResult;
///
/// let result = ClassificationResult::from_json(
///     r#"[[{"label": "joy", "score": 0.9}, {"label": "neutral", "score": 0.1}]]"#,
/// ).unwrap();
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.entries()[0].label, "joy");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationResult {
    entries: Vec<LabelScore>,
}

/// Result shapes the inference API answers with on a 2xx reply.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseBody {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResult {
    pub fn new(entries: Vec<LabelScore>) -> Self {
        Self { entries }
    }

    /// Decodes a response body. The first inner array is used when the body
    /// is nested, which is how the API answers a single `inputs` string.
    ///
    /// Only result shapes are accepted. A service `{"error": ...}` object is
    /// a [`InferenceError::Decode`] here; [`crate::InferenceClient::classify`]
    /// checks for it first and reports it as [`InferenceError::Service`].
    pub fn from_json(body: &str) -> Result<Self, InferenceError> {
        let parsed: ResponseBody = serde_json::from_str(body).map_err(|e| {
            InferenceError::Decode(format!("expected a list of label/score objects: {}", e))
        })?;

        let entries = match parsed {
            ResponseBody::Nested(mut batches) => {
                if batches.is_empty() {
                    return Err(InferenceError::Decode("response contained no results".into()));
                }
                batches.swap_remove(0)
            }
            ResponseBody::Flat(entries) => entries,
        };

        if let Some(bad) = entries.iter().find(|e| !e.score.is_finite() || e.score < 0.0) {
            return Err(InferenceError::Decode(format!(
                "invalid score {} for label '{}'",
                bad.score, bad.label
            )));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LabelScore] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LabelScore>> for ClassificationResult {
    fn from(entries: Vec<LabelScore>) -> Self {
        Self::new(entries)
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(l, s)| LabelScore::new(l, s)).collect())
    }
}
