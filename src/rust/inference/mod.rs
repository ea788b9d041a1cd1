mod client;
mod error;
mod model;

pub use client::{EndpointConfig, InferenceClient, DEFAULT_TIMEOUT};
pub use error::InferenceError;
pub use model::{ClassificationResult, LabelScore};

/// Hosted GoEmotions classifier (28 emotion labels)
pub const EMOTION_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/bhadresh-savani/bert-base-go-emotion";

/// Hosted hate-speech classifier answering with `LABEL_0`..`LABEL_3`
pub const HATE_SPEECH_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/IMSyPP/hate_speech_en";
