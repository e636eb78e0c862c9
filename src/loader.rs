//! 画像ファイル読み込み（アップロード相当）
//!
//! ファイルを読み、形式を判定し、大きすぎる画像は縮小してData URLにする。

use crate::error::{Result, SmartSendError};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use smartsend_common::CapturedImage;
use std::io::Cursor;
use std::path::Path;

/// 画像ファイルを CapturedImage に変換
///
/// `max_size` は長辺の上限px（0で縮小しない）。縮小した場合はJPEGで再エンコードする。
pub fn load_image(path: &Path, max_size: u32) -> Result<CapturedImage> {
    if !path.is_file() {
        return Err(SmartSendError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map_err(|e| SmartSendError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| SmartSendError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = decoded.dimensions();
    log::debug!("{}: {:?} {}x{}", path.display(), format, width, height);

    if max_size > 0 && width.max(height) > max_size {
        let jpeg = encode_resized(&decoded, max_size)?;
        log::debug!("縮小: {} bytes -> {} bytes", bytes.len(), jpeg.len());
        return Ok(CapturedImage::from_bytes(ImageFormat::Jpeg.to_mime_type(), &jpeg)?);
    }

    Ok(CapturedImage::from_bytes(format.to_mime_type(), &bytes)?)
}

fn encode_resized(image: &DynamicImage, max_size: u32) -> Result<Vec<u8>> {
    let resized = image.resize(max_size, max_size, FilterType::Triangle);
    // JPEGはアルファ非対応
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| SmartSendError::ImageLoad(format!("JPEG変換エラー: {}", e)))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_png_keeps_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("box.png");
        RgbImage::from_pixel(8, 6, Rgb([200, 150, 90])).save(&path).unwrap();

        let image = load_image(&path, 1568).unwrap();
        assert_eq!(image.media_type(), "image/png");
        assert!(image.as_data_url().starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_large_image_is_downscaled_to_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("large.png");
        RgbImage::from_pixel(64, 32, Rgb([10, 20, 30])).save(&path).unwrap();

        let image = load_image(&path, 16).unwrap();
        assert_eq!(image.media_type(), "image/jpeg");
        // JPEG SOI マーカー (FF D8 FF) のBase64
        assert!(image.payload().starts_with("/9j/"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_image(Path::new("/nonexistent/box.jpg"), 0).unwrap_err();
        assert!(matches!(err, SmartSendError::FileNotFound(_)));
    }

    #[test]
    fn test_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_image(&path, 0).unwrap_err();
        assert!(matches!(err, SmartSendError::ImageLoad(_)));
    }

    #[test]
    fn test_corrupt_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let err = load_image(&path, 0).unwrap_err();
        assert!(matches!(err, SmartSendError::ImageLoad(_)));
    }
}
