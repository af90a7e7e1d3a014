use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://vision.googleapis.com/v1/images:annotate".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VisionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Absence fails recognition calls, never startup
    pub api_key: Option<String>,
}

impl VisionConfig {
    pub fn new() -> Self {
        let api_url = env::var("VISION_API_URL").unwrap_or_else(|_| default_api_url());

        let api_key = env::var("GOOGLE_VISION_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self { api_url, api_key }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
        }
    }
}
