use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use textlens_types::{CropRect, EncodedImage};

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("empty crop rectangle")]
    EmptyRect,

    #[error("crop rect {x},{y} {width}x{height} outside {src_width}x{src_height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        src_width: u32,
        src_height: u32,
    },
}

/// Whether the bytes look like an image we can decode. Used to silently
/// reject non-image drops and pastes.
pub fn is_supported_image(bytes: &[u8]) -> bool {
    image::guess_format(bytes).is_ok()
}

/// Cut `rect` out of the source image and return it as a base64 PNG,
/// ready for the recognition request.
pub fn crop_to_base64_png(source: &[u8], rect: CropRect) -> Result<EncodedImage, CropError> {
    if rect.width == 0 || rect.height == 0 {
        return Err(CropError::EmptyRect);
    }

    let img = image::load_from_memory(source)?;
    let (src_width, src_height) = (img.width(), img.height());
    if rect.x.saturating_add(rect.width) > src_width
        || rect.y.saturating_add(rect.height) > src_height
    {
        return Err(CropError::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            src_width,
            src_height,
        });
    }

    let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);

    let mut buf = Cursor::new(Vec::new());
    cropped.write_to(&mut buf, ImageFormat::Png)?;

    Ok(EncodedImage(STANDARD.encode(buf.into_inner())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        });
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn crop_produces_decodable_png_of_rect_size() {
        let source = png_fixture(8, 6);
        let rect = CropRect {
            x: 2,
            y: 1,
            width: 4,
            height: 3,
        };

        let encoded = crop_to_base64_png(&source, rect).unwrap();
        let png = STANDARD.decode(encoded.as_str()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn full_frame_crop_is_allowed() {
        let source = png_fixture(5, 5);
        let rect = CropRect {
            x: 0,
            y: 0,
            width: 5,
            height: 5,
        };
        assert!(crop_to_base64_png(&source, rect).is_ok());
    }

    #[test]
    fn out_of_bounds_rect_is_rejected() {
        let source = png_fixture(4, 4);
        let rect = CropRect {
            x: 3,
            y: 3,
            width: 4,
            height: 4,
        };
        assert!(matches!(
            crop_to_base64_png(&source, rect),
            Err(CropError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_rect_is_rejected() {
        let source = png_fixture(4, 4);
        let rect = CropRect {
            x: 0,
            y: 0,
            width: 0,
            height: 2,
        };
        assert!(matches!(
            crop_to_base64_png(&source, rect),
            Err(CropError::EmptyRect)
        ));
    }

    #[test]
    fn non_image_bytes_are_not_supported() {
        assert!(!is_supported_image(b"plain text, not pixels"));
        assert!(is_supported_image(&png_fixture(2, 2)));
    }
}
