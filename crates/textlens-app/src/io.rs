use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use kanal::AsyncSender;
use textlens_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Clipboard paste subscription: registered once on session start, torn
/// down through the controller's cancel token.
pub async fn paste_watcher(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if state.paste_watcher_running.swap(true, Ordering::SeqCst) {
        tracing::warn!("[PASTE] watcher already running, skipping registration");
        return Ok(());
    }

    let poll_interval = {
        let config = state.config.read().await;
        Duration::from_millis(config.session.paste_poll_interval_ms)
    };

    tracing::info!("[PASTE] clipboard watcher registered ({poll_interval:?} poll)");

    let result = textlens_io::clipboard::watch_clipboard_images(
        poll_interval,
        cancel,
        move |png_bytes| {
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::ImagePasted { png_bytes }).await;
            });
        },
    )
    .await;

    state.paste_watcher_running.store(false, Ordering::SeqCst);
    tracing::info!("[PASTE] clipboard watcher deregistered");

    result
}
