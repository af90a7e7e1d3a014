use std::io::Cursor;
use std::time::Duration;

use arboard::Clipboard;
use tokio::time;
use tokio_util::sync::CancellationToken;

/// Plain-text clipboard write for the recognized text.
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Poll the clipboard for pasted images until cancelled. Consecutive
/// identical frames are reported once; non-image clipboard content is
/// skipped. Each new image is handed to `on_image` as PNG bytes.
pub async fn watch_clipboard_images<F>(
    poll_interval: Duration,
    cancel: CancellationToken,
    mut on_image: F,
) -> Result<(), anyhow::Error>
where
    F: FnMut(Vec<u8>) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut last_frame: Option<Vec<u8>> = None;

    let mut interval = time::interval(poll_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            _ = interval.tick() => {}
        }

        if let Ok(img) = clipboard.get_image()
            && !img.bytes.is_empty()
            && last_frame.as_deref() != Some(img.bytes.as_ref())
        {
            last_frame = Some(img.bytes.to_vec());
            match rgba_to_png(img.width, img.height, &img.bytes) {
                Ok(png) => on_image(png),
                Err(e) => tracing::debug!("ignoring unreadable clipboard image: {e}"),
            }
        }
    }
}

/// arboard hands out raw RGBA; downstream wants an encoded still image.
pub fn rgba_to_png(width: usize, height: usize, bytes: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, bytes.to_vec())
        .ok_or_else(|| anyhow::anyhow!("clipboard image buffer size mismatch"))?;

    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(buffer).write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}
