//! Meal photo decoding, resizing and JPEG encoding.
//!
//! Photos arrive from the web view as `data:` URLs in whatever format the
//! camera or file picker produced. They are always re-encoded as JPEG so the
//! inline part's `image/jpeg` tag is accurate.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use tracing::info;

use crate::error::GatewayError;

/// Longest edge, in pixels, of images sent to Gemini.
pub const MAX_IMAGE_DIMENSION: u32 = 1024;

/// Return the base64 payload of a `data:` URL, or the input itself when it has no prefix.
pub fn strip_data_url(data_url: &str) -> &str {
    let trimmed = data_url.trim();
    if trimmed.starts_with("data:") {
        match trimmed.split_once(',') {
            Some((_, payload)) => payload,
            None => "",
        }
    } else {
        trimmed
    }
}

/// Decode a photo `data:` URL and return it as base64 JPEG, at most 1024px on its longest edge.
pub fn prepare_image(data_url: &str) -> Result<String, GatewayError> {
    let payload = strip_data_url(data_url);
    if payload.is_empty() {
        return Err(GatewayError::Image("Empty image data".to_string()));
    }
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| GatewayError::Image(format!("Image data is not valid base64: {}", e)))?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| GatewayError::Image(format!("Failed to load image: {}", e)))?;
    info!("Loaded image: {}x{}", img.width(), img.height());

    let resized = resize_if_needed(img, MAX_IMAGE_DIMENSION);
    let jpeg_bytes = encode_to_jpeg(&resized)?;
    info!(
        "Encoded {}x{} JPEG: {} bytes",
        resized.width(),
        resized.height(),
        jpeg_bytes.len()
    );

    Ok(STANDARD.encode(&jpeg_bytes))
}

/// Resize image if either dimension exceeds max, maintaining aspect ratio.
fn resize_if_needed(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());

    if width <= max_dimension && height <= max_dimension {
        return img;
    }

    let scale = max_dimension as f32 / width.max(height) as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// JPEG has no alpha channel, so the image is flattened to RGB first.
fn encode_to_jpeg(img: &DynamicImage) -> Result<Vec<u8>, GatewayError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| GatewayError::Image(format!("Failed to encode image to JPEG: {}", e)))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_data_url(img: DynamicImage) -> String {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(buffer.into_inner()))
    }

    fn decode_jpeg(b64: &str) -> DynamicImage {
        let bytes = STANDARD.decode(b64).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap()
    }

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/png;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_url("QUJD"), "QUJD");
        assert_eq!(strip_data_url("data:image/png;base64"), "");
    }

    #[test]
    fn test_prepare_image_reencodes_png_as_jpeg() {
        let url = png_data_url(DynamicImage::new_rgb8(300, 200));
        let out = decode_jpeg(&prepare_image(&url).unwrap());
        assert_eq!((out.width(), out.height()), (300, 200));
    }

    #[test]
    fn test_prepare_image_flattens_alpha() {
        let url = png_data_url(DynamicImage::new_rgba8(64, 64));
        assert!(prepare_image(&url).is_ok());
    }

    #[test]
    fn test_prepare_image_downscales_large_photo() {
        let url = png_data_url(DynamicImage::new_rgb8(2048, 1024));
        let out = decode_jpeg(&prepare_image(&url).unwrap());
        assert_eq!((out.width(), out.height()), (1024, 512));
    }

    #[test]
    fn test_prepare_image_rejects_garbage() {
        assert!(matches!(prepare_image("data:image/png;base64,!!!"), Err(GatewayError::Image(_))));
        let not_image = format!("data:image/png;base64,{}", STANDARD.encode(b"not an image"));
        assert!(matches!(prepare_image(&not_image), Err(GatewayError::Image(_))));
        assert!(matches!(prepare_image(""), Err(GatewayError::Image(_))));
    }

    #[test]
    fn test_resize_if_needed_keeps_small_images() {
        let img = DynamicImage::new_rgb8(500, 300);
        let resized = resize_if_needed(img, 1024);
        assert_eq!((resized.width(), resized.height()), (500, 300));
    }

    #[test]
    fn test_resize_if_needed_portrait() {
        let img = DynamicImage::new_rgb8(1000, 2000);
        let resized = resize_if_needed(img, 1024);
        assert_eq!((resized.width(), resized.height()), (512, 1024));
    }
}
