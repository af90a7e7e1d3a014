use textlens_types::{EncodedImage, RecognitionOutcome};

use crate::wire::{AnnotateRequest, AnnotateResponse};
use crate::{RecognitionError, Recognizer};

/// Client for Google Cloud Vision text detection. One POST per recognize
/// call, API key in the query string, no retries.
#[derive(Clone)]
pub struct GoogleVisionClient {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GoogleVisionClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            api_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Recognizer for GoogleVisionClient {
    async fn recognize(
        &self,
        content: &EncodedImage,
    ) -> Result<RecognitionOutcome, RecognitionError> {
        if content.is_empty() {
            return Err(RecognitionError::EmptyContent);
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RecognitionError::MissingApiKey)?;

        let body = AnnotateRequest::text_detection(content.as_str());

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Status(status));
        }

        let parsed: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::MalformedResponse(e.to_string()))?;

        map_response(parsed)
    }
}

/// `fullTextAnnotation` when present, the fixed fallback otherwise. An
/// empty `responses` array counts as malformed.
pub fn map_response(response: AnnotateResponse) -> Result<RecognitionOutcome, RecognitionError> {
    let first = response
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| RecognitionError::MalformedResponse("empty responses array".to_string()))?;

    Ok(match first.full_text_annotation {
        Some(annotation) => RecognitionOutcome {
            text: annotation.text,
        },
        None => RecognitionOutcome::no_text(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use textlens_types::NO_TEXT_FALLBACK;

    use super::*;

    #[test]
    fn request_body_matches_wire_contract() {
        let body = AnnotateRequest::text_detection("aGVsbG8=");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "requests": [{
                    "image": { "content": "aGVsbG8=" },
                    "features": [{ "type": "TEXT_DETECTION" }]
                }]
            })
        );
    }

    #[test]
    fn annotation_text_is_returned() {
        let parsed: AnnotateResponse = serde_json::from_value(json!({
            "responses": [{
                "fullTextAnnotation": { "text": "Hello", "pages": [] }
            }]
        }))
        .unwrap();

        let outcome = map_response(parsed).unwrap();
        assert_eq!(outcome.text, "Hello");
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn missing_annotation_maps_to_fallback() {
        let parsed: AnnotateResponse = serde_json::from_value(json!({
            "responses": [{}]
        }))
        .unwrap();

        let outcome = map_response(parsed).unwrap();
        assert_eq!(outcome.text, NO_TEXT_FALLBACK);
        assert!(outcome.is_fallback());
    }

    #[test]
    fn empty_responses_array_is_malformed() {
        let parsed: AnnotateResponse = serde_json::from_value(json!({ "responses": [] })).unwrap();
        assert!(matches!(
            map_response(parsed),
            Err(RecognitionError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_io() {
        // Unroutable URL: reaching the network would fail differently
        let client = GoogleVisionClient::new("http://invalid.invalid".to_string(), None);
        let result = client
            .recognize(&EncodedImage("aGVsbG8=".to_string()))
            .await;
        assert!(matches!(result, Err(RecognitionError::MissingApiKey)));
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let client = GoogleVisionClient::new(
            "http://invalid.invalid".to_string(),
            Some("key".to_string()),
        );
        let result = client.recognize(&EncodedImage(String::new())).await;
        assert!(matches!(result, Err(RecognitionError::EmptyContent)));
    }
}
