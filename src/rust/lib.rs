//! Emotion and hate-speech gauges for free text, backed by hosted Hugging Face
//! classifiers.
//!
//! A submission sends the text to an emotion classifier and a hate-speech
//! classifier concurrently. The four strongest emotions are rescaled so their
//! gauge values sum to 100, and the winning hate-speech code is mapped to a
//! severity category.
//!
//! # Basic Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use goemotions::{ColorMap, Dashboard, DashboardConfig};
//!
//! let config = DashboardConfig::from_env().with_api_key("hf_...");
//! let dashboard = Dashboard::new(config)?;
//!
//! let submission = dashboard.submit("I'm so excited for my vacation next week!").await?;
//! for emotion in submission.emotions.iter() {
//!     println!("{}: {:.1}", emotion.label, emotion.display_value);
//! }
//! print!("{}", goemotions::gauge::render_submission(&submission, ColorMap::builtin()));
//! # Ok(())
//! # }
//! ```
//!
//! # Scores only
//!
//! ```rust
//! use goemotions::{top_k, ClassificationResult, GAUGE_COUNT};
//!
//! let results = ClassificationResult::from_json(
//!     r#"[[{"label":"joy","score":0.5},{"label":"surprise","score":0.3},
//!          {"label":"neutral","score":0.1},{"label":"sadness","score":0.05},
//!          {"label":"fear","score":0.05}]]"#,
//! ).unwrap();
//! let top = top_k(&results, GAUGE_COUNT).unwrap();
//! assert_eq!(top.len(), 4);
//! assert!((top.total() - 100.0).abs() < 1e-6);
//! ```

pub mod config;
pub mod gauge;
pub mod inference;
pub mod labels;
pub mod palette;
pub mod pipeline;
pub mod scores;

pub use config::DashboardConfig;
pub use inference::{
    ClassificationResult, EndpointConfig, InferenceClient, InferenceError, LabelScore,
};
pub use labels::{HateCategory, HateLabelMap, UnknownLabelError};
pub use palette::{AssetResolver, ColorMap, Palette};
pub use pipeline::{Dashboard, HateVerdict, PipelineError, Submission};
pub use scores::{top_k, top_label, NormalizedScore, NormalizedTopK, ScoreError, GAUGE_COUNT};

/// Example sentences offered before the user types their own.
pub static PRESETS: [&str; 5] = [
    "I'm so excited for my vacation next week!",
    "I'm feeling so stressed about work.",
    "I just received great news from my doctor!",
    "I can't wait to see my best friend tomorrow.",
    "I'm feeling so lonely and sad today.",
];

pub fn init_logger() {
    env_logger::init();
}
