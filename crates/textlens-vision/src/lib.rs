use textlens_types::{EncodedImage, RecognitionOutcome};

pub mod client;
pub mod wire;

pub use client::GoogleVisionClient;

/// Text-detection provider interface
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Detect text in a base64-encoded still image
    async fn recognize(
        &self,
        content: &EncodedImage,
    ) -> Result<RecognitionOutcome, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("empty image content")]
    EmptyContent,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("recognition service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed recognition response: {0}")]
    MalformedResponse(String),
}
