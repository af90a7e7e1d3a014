use std::sync::Arc;

use kanal::AsyncSender;
use textlens_core::crop;
use textlens_types::{AppEvent, CropSelection, SessionStatus};
use textlens_vision::Recognizer;

use crate::state::AppState;

/// Store the confirmed crop and fire the single recognition request.
///
/// The request is not cancellable; a later crop supersedes this one only
/// through the generation check when the result loops back in.
pub async fn handle_crop_confirm(
    state: Arc<AppState>,
    selection: CropSelection,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    recognizer: Arc<dyn Recognizer>,
) -> anyhow::Result<()> {
    let encoded = match selection {
        CropSelection::Encoded(encoded) => encoded,
        CropSelection::Rect(rect) => {
            let session = state.session.read().await;
            let Some(source) = session.image() else {
                tracing::debug!("[SESSION] crop confirmed with no image loaded");
                return Ok(());
            };

            match crop::crop_to_base64_png(&source.bytes, rect) {
                Ok(encoded) => encoded,
                Err(e) => {
                    tracing::warn!("[SESSION] crop failed: {e}");
                    return Ok(());
                }
            }
        }
    };

    let generation = {
        let mut session = state.session.write().await;
        match session.confirm_crop(encoded.clone()) {
            Some(generation) => generation,
            None => {
                tracing::debug!("[SESSION] crop confirmed with no image loaded");
                return Ok(());
            }
        }
    };

    let _ = app_to_ui_tx
        .send(AppEvent::SessionStatus(SessionStatus::Recognizing))
        .await;

    let tx = loopback_tx.clone();
    let status_tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        match recognizer.recognize(&encoded).await {
            Ok(outcome) => {
                let _ = tx
                    .send(AppEvent::RecognitionSettled {
                        generation,
                        outcome,
                    })
                    .await;
            }
            Err(e) => {
                // No retry; the session keeps its previous result state
                tracing::error!("[VISION] recognition failed: {e}");
                let _ = status_tx
                    .send(AppEvent::SessionStatus(SessionStatus::RecognitionFailed {
                        message: e.to_string(),
                    }))
                    .await;
            }
        }
    });

    Ok(())
}
