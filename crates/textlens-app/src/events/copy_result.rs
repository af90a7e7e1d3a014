use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use textlens_types::{AppEvent, SessionStatus};

use crate::state::AppState;

/// Copy the recognized text to the clipboard. No-op without a result;
/// write failures are logged and the confirmation flag stays down.
pub async fn handle_copy_result(
    state: Arc<AppState>,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = {
        let session = state.session.read().await;
        match session.outcome() {
            Some(outcome) => outcome.text.clone(),
            None => return Ok(()),
        }
    };

    if let Err(e) = textlens_io::clipboard::copy_text(&text) {
        tracing::error!("[CLIPBOARD] write failed: {e}");
        return Ok(());
    }

    let ttl = {
        let config = state.config.read().await;
        Duration::from_millis(config.session.copied_flag_ttl_ms)
    };

    let ticket = {
        let mut session = state.session.write().await;
        session.mark_copied()
    };

    let _ = app_to_ui_tx
        .send(AppEvent::SessionStatus(SessionStatus::Copied {
            visible: true,
        }))
        .await;

    // Self-clearing confirmation; a stale ticket is ignored on arrival
    let tx = loopback_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        let _ = tx.send(AppEvent::CopiedFlagExpired { ticket }).await;
    });

    Ok(())
}
