use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shown instead of recognized text when the service finds nothing.
/// This is a successful outcome, not an error.
pub const NO_TEXT_FALLBACK: &str = "This image doesn't contain any text!";

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One or more files dropped onto the session; only the first is used
    ImageDropped {
        paths: Vec<PathBuf>,
    },
    /// An image pasted from the clipboard, already PNG-encoded
    ImagePasted {
        png_bytes: Vec<u8>,
    },
    ConfirmCrop(CropSelection),
    Cancel,
    CopyResult,
    /// A recognition request settled; carries the generation it was issued under
    RecognitionSettled {
        generation: u64,
        outcome: RecognitionOutcome,
    },
    /// The transient "copied" confirmation timed out
    CopiedFlagExpired {
        ticket: u64,
    },
    SessionStatus(SessionStatus),
}

/// What the user confirmed as the crop: either a rectangle to cut from the
/// loaded image, or bytes that were already cropped and encoded upstream.
#[derive(Debug, Clone)]
pub enum CropSelection {
    Rect(CropRect),
    Encoded(EncodedImage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Base64-encoded PNG bytes of a cropped region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(pub String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw bytes of a user-supplied image, pre-crop.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub bytes: Vec<u8>,
    pub origin: ImageOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Dropped,
    Pasted,
}

/// Text extracted from a cropped region, or the fixed "no text" fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOutcome {
    pub text: String,
}

impl RecognitionOutcome {
    pub fn no_text() -> Self {
        Self {
            text: NO_TEXT_FALLBACK.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.text == NO_TEXT_FALLBACK
    }
}

/// Status updates for a front-end, sent on the app-to-ui channel.
#[derive(Debug, Clone)]
pub enum SessionStatus {
    Idle,
    ImageLoaded,
    Recognizing,
    TextReady(String),
    RecognitionFailed { message: String },
    Copied { visible: bool },
}
