//! Wire types for the Vision `images:annotate` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

impl AnnotateRequest {
    /// Single-image request asking only for TEXT_DETECTION
    pub fn text_detection(content: &str) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: content.to_string(),
                },
                features: vec![Feature {
                    kind: "TEXT_DETECTION".to_string(),
                }],
            }],
        }
    }
}

#[derive(Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Serialize)]
pub struct ImageContent {
    pub content: String,
}

#[derive(Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize)]
pub struct AnnotateResponse {
    pub responses: Vec<AnnotateImageResponse>,
}

/// Per-image response; the annotation carries more fields (pages, blocks)
/// but only the assembled text is used.
#[derive(Deserialize, Default)]
pub struct AnnotateImageResponse {
    #[serde(rename = "fullTextAnnotation")]
    pub full_text_annotation: Option<FullTextAnnotation>,
}

#[derive(Deserialize)]
pub struct FullTextAnnotation {
    pub text: String,
}
