use std::path::PathBuf;

use log::{debug, error, info};
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::inference::{ClassificationResult, InferenceClient, InferenceError};
use crate::labels::{HateCategory, HateLabelMap, UnknownLabelError};
use crate::palette::AssetResolver;
use crate::scores::{top_k, top_label, NormalizedTopK, ScoreError, GAUGE_COUNT};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input text cannot be empty")]
    EmptyInput,
    #[error("Failed to create HTTP client: {0}")]
    Client(InferenceError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelError),
}

/// What the hate-speech classifier concluded about a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HateVerdict {
    pub category: HateCategory,
    /// Raw code that won, e.g. `LABEL_0`
    pub code: String,
    pub score: f64,
    pub image: PathBuf,
}

/// Everything the presentation layer needs to draw one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub text: String,
    pub emotions: NormalizedTopK,
    pub hate: Option<HateVerdict>,
}

/// Runs submissions against the two hosted classifiers.
///
/// Holds no per-submission state, so one instance serves every submission.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: InferenceClient,
    config: DashboardConfig,
    hate_labels: HateLabelMap,
    assets: AssetResolver,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self, PipelineError> {
        let client = InferenceClient::new(config.timeout).map_err(PipelineError::Client)?;
        debug!("HTTP client ready (timeout {:?})", client.timeout());
        let assets = AssetResolver::new(&config.assets_dir);
        Ok(Self {
            client,
            config,
            hate_labels: HateLabelMap::new(),
            assets,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Classifies `text` with both endpoints concurrently and derives the
    /// gauge values and hate verdict. Any failure fails the whole submission.
    pub async fn submit(&self, text: &str) -> Result<Submission, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        info!("Submitting {} chars (hate speech: {})", text.len(), self.config.hate_speech);

        let emotion_call = self.client.classify(text, &self.config.emotion);
        let (emotion_result, hate_result) = if self.config.hate_speech {
            let hate_call = self.client.classify(text, &self.config.hate);
            let (emotions, hate) = tokio::try_join!(emotion_call, hate_call).map_err(|e| {
                error!("Submission aborted: {}", e);
                e
            })?;
            (emotions, Some(hate))
        } else {
            (emotion_call.await?, None)
        };

        let emotions = top_k(&emotion_result, GAUGE_COUNT)?;
        let hate = hate_result
            .as_ref()
            .map(|result| self.verdict(result))
            .transpose()?;

        Ok(Submission {
            text: text.to_string(),
            emotions,
            hate,
        })
    }

    fn verdict(&self, result: &ClassificationResult) -> Result<HateVerdict, PipelineError> {
        let best = top_label(result)?;
        let category = self.hate_labels.map_hate_label(&best.label)?;
        Ok(HateVerdict {
            category,
            code: best.label.clone(),
            score: best.score,
            image: self.assets.image_for(category),
        })
    }
}
