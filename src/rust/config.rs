use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};

use crate::inference::{EndpointConfig, DEFAULT_TIMEOUT, EMOTION_ENDPOINT, HATE_SPEECH_ENDPOINT};

pub const API_KEY_VAR: &str = "HF_API_KEY";
pub const EMOTION_URL_VAR: &str = "GOEMOTIONS_EMOTION_URL";
pub const HATE_URL_VAR: &str = "GOEMOTIONS_HATE_URL";
pub const TIMEOUT_VAR: &str = "GOEMOTIONS_TIMEOUT_SECS";
pub const ASSETS_DIR_VAR: &str = "GOEMOTIONS_ASSETS_DIR";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub emotion: EndpointConfig,
    pub hate: EndpointConfig,
    /// Bound on each endpoint call
    pub timeout: Duration,
    /// Query the hate-speech classifier alongside the emotion one
    pub hate_speech: bool,
    pub assets_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            emotion: EndpointConfig::new(EMOTION_ENDPOINT, None),
            hate: EndpointConfig::new(HATE_SPEECH_ENDPOINT, None),
            timeout: DEFAULT_TIMEOUT,
            hate_speech: true,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl DashboardConfig {
    /// Defaults overlaid with whatever the environment provides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(API_KEY_VAR) {
            Some(key) => config = config.with_api_key(key),
            None => warn!("{} is not set; classification calls will fail", API_KEY_VAR),
        }
        if let Some(url) = lookup(EMOTION_URL_VAR) {
            debug!("Emotion endpoint overridden: {}", url);
            config.emotion.url = url;
        }
        if let Some(url) = lookup(HATE_URL_VAR) {
            debug!("Hate-speech endpoint overridden: {}", url);
            config.hate.url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {}={:?}", TIMEOUT_VAR, raw),
            }
        }
        if let Some(dir) = lookup(ASSETS_DIR_VAR) {
            config.assets_dir = PathBuf::from(dir);
        }

        config
    }

    /// Sets the bearer token on both endpoints.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.emotion.api_key = Some(key.clone());
        self.hate.api_key = Some(key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_hate_speech(mut self, enabled: bool) -> Self {
        self.hate_speech = enabled;
        self
    }
}
