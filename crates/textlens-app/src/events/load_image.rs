use std::path::PathBuf;
use std::sync::Arc;

use kanal::AsyncSender;
use textlens_core::crop;
use textlens_types::{AppEvent, ImageOrigin, ImageSource, SessionStatus};

use crate::state::AppState;

/// Only the first dropped file is considered; unreadable or non-image
/// files are dropped silently after a debug log.
pub async fn handle_file_drop(
    state: Arc<AppState>,
    paths: Vec<PathBuf>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(path) = paths.first() else {
        return Ok(());
    };

    if paths.len() > 1 {
        tracing::debug!("[SESSION] {} files dropped, using {:?}", paths.len(), path);
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("[SESSION] ignoring unreadable drop {:?}: {e}", path);
            return Ok(());
        }
    };

    load(state, bytes, ImageOrigin::Dropped, app_to_ui_tx).await
}

pub async fn handle_paste(
    state: Arc<AppState>,
    png_bytes: Vec<u8>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    load(state, png_bytes, ImageOrigin::Pasted, app_to_ui_tx).await
}

async fn load(
    state: Arc<AppState>,
    bytes: Vec<u8>,
    origin: ImageOrigin,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !crop::is_supported_image(&bytes) {
        tracing::debug!(
            "[SESSION] ignoring non-image payload ({} bytes, {:?})",
            bytes.len(),
            origin
        );
        return Ok(());
    }

    {
        let mut session = state.session.write().await;
        session.load_image(ImageSource { bytes, origin });
    }

    let _ = app_to_ui_tx
        .send(AppEvent::SessionStatus(SessionStatus::ImageLoaded))
        .await;

    Ok(())
}
