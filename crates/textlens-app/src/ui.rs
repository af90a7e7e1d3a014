use kanal::AsyncReceiver;
use textlens_types::{AppEvent, SessionStatus};

/// Stand-in front-end: renders session status updates to the log. A real
/// UI would consume this channel instead.
pub async fn status_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        let AppEvent::SessionStatus(status) = event else {
            continue;
        };

        match status {
            SessionStatus::Idle => tracing::info!("[UI] session cleared"),
            SessionStatus::ImageLoaded => tracing::info!("[UI] image loaded, awaiting crop"),
            SessionStatus::Recognizing => tracing::info!("[UI] recognizing..."),
            SessionStatus::TextReady(text) => tracing::info!("[UI] text ready: {text}"),
            SessionStatus::RecognitionFailed { message } => {
                tracing::warn!("[UI] recognition failed: {message}");
            }
            SessionStatus::Copied { visible: true } => {
                tracing::info!("[UI] Text copied to clipboard!");
            }
            SessionStatus::Copied { visible: false } => {
                tracing::debug!("[UI] copied banner cleared");
            }
        }
    }

    Ok(())
}
