use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use textlens_types::{AppEvent, SessionStatus};
use textlens_vision::Recognizer;

use crate::state::AppState;

pub mod confirm_crop;
pub mod copy_result;
pub mod load_image;

use confirm_crop::handle_crop_confirm;
use copy_result::handle_copy_result;
use load_image::{handle_file_drop, handle_paste};

/// App's main loop. All session mutations happen here, one event at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    recognizer: Arc<dyn Recognizer>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] event received: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(
            state.clone(),
            &loopback_tx,
            &app_to_ui_tx,
            recognizer.clone(),
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    recognizer: Arc<dyn Recognizer>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ImageDropped { paths } => {
            handle_file_drop(state, paths, app_to_ui_tx).await?;
        }
        AppEvent::ImagePasted { png_bytes } => {
            handle_paste(state, png_bytes, app_to_ui_tx).await?;
        }
        AppEvent::ConfirmCrop(selection) => {
            handle_crop_confirm(state, selection, loopback_tx, app_to_ui_tx, recognizer).await?;
        }
        AppEvent::RecognitionSettled {
            generation,
            outcome,
        } => {
            let applied = {
                let mut session = state.session.write().await;
                session.apply_recognition(generation, outcome.clone())
            };

            if applied {
                let _ = app_to_ui_tx
                    .send(AppEvent::SessionStatus(SessionStatus::TextReady(
                        outcome.text,
                    )))
                    .await;
            } else {
                tracing::debug!("[SESSION] discarding stale recognition result (generation {generation})");
            }
        }
        AppEvent::Cancel => {
            let mut session = state.session.write().await;
            session.cancel();
            drop(session);

            let _ = app_to_ui_tx
                .send(AppEvent::SessionStatus(SessionStatus::Idle))
                .await;
        }
        AppEvent::CopyResult => {
            handle_copy_result(state, loopback_tx, app_to_ui_tx).await?;
        }
        AppEvent::CopiedFlagExpired { ticket } => {
            let expired = {
                let mut session = state.session.write().await;
                session.expire_copied(ticket)
            };

            if expired {
                let _ = app_to_ui_tx
                    .send(AppEvent::SessionStatus(SessionStatus::Copied {
                        visible: false,
                    }))
                    .await;
            }
        }
        AppEvent::SessionStatus(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(())
}
