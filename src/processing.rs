use crate::error::{ResizeError, Result};
use crate::size::ResizeTarget;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::path::Path;

/// Decodes an image and applies its EXIF orientation.
///
/// The container format is sniffed from the file content, never from the
/// extension, and is returned alongside the pixels so the encoder can write
/// the same format back out. Any embedded rotation/flip is applied to the
/// pixel buffer up front, so dimension checks and resizing see the image the
/// way a viewer would.
///
/// # Returns
/// * `Ok((image, format))` on success
/// * `Err(ResizeError::UnrecognizedImage)` when the content matches no known format
/// * `Err(ResizeError::Image)` when decoding fails
pub fn load_oriented_image(path: &Path) -> Result<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| ResizeError::UnrecognizedImage(path.to_path_buf()))?;

    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);

    Ok((image, format))
}

pub fn largest_dimension(image: &DynamicImage) -> u32 {
    image.width().max(image.height())
}

/// Proportionally scales the image so its larger side equals `target`.
///
/// Callers only invoke this when `largest_dimension(image) >= target`, so
/// both dimensions are monotonically non-increasing. Aspect ratio is kept;
/// nothing is cropped.
pub fn shrink_to_fit(image: &DynamicImage, target: ResizeTarget) -> DynamicImage {
    image.thumbnail(target.get(), target.get())
}

/// Encodes the image at `path` using the container format it was decoded from.
pub fn save_with_source_format(
    image: &DynamicImage,
    path: &Path,
    format: ImageFormat,
) -> Result<()> {
    image.save_with_format(path, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_shrink_to_fit_landscape() {
        let img = DynamicImage::new_rgb8(2000, 1000);
        let shrunk = shrink_to_fit(&img, ResizeTarget::parse("800").unwrap());
        assert_eq!((shrunk.width(), shrunk.height()), (800, 400));
    }

    #[test]
    fn test_shrink_to_fit_portrait() {
        let img = DynamicImage::new_rgb8(600, 1200);
        let shrunk = shrink_to_fit(&img, ResizeTarget::parse("300").unwrap());
        assert_eq!((shrunk.width(), shrunk.height()), (150, 300));
    }

    #[test]
    fn test_shrink_to_fit_square() {
        let img = DynamicImage::new_rgb8(500, 500);
        let shrunk = shrink_to_fit(&img, ResizeTarget::parse("100").unwrap());
        assert_eq!((shrunk.width(), shrunk.height()), (100, 100));
    }

    #[test]
    fn test_shrink_to_fit_equal_target_is_noop() {
        let img = DynamicImage::new_rgb8(640, 480);
        let shrunk = shrink_to_fit(&img, ResizeTarget::parse("640").unwrap());
        assert_eq!((shrunk.width(), shrunk.height()), (640, 480));
    }

    #[test]
    fn test_largest_dimension() {
        assert_eq!(largest_dimension(&DynamicImage::new_rgb8(2000, 1000)), 2000);
        assert_eq!(largest_dimension(&DynamicImage::new_rgb8(300, 400)), 400);
    }

    #[test]
    fn test_load_oriented_image_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.png");
        DynamicImage::new_rgb8(320, 240)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let (image, format) = load_oriented_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (320, 240));
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_load_oriented_image_detects_format_despite_extension() {
        // PNG bytes behind a .jpg name: the sniffed format wins.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mislabeled.jpg");
        DynamicImage::new_rgb8(10, 10)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let (_, format) = load_oriented_image(&path).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_load_oriented_image_rejects_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.txt");
        File::create(&path)
            .unwrap()
            .write_all(b"just some notes")
            .unwrap();

        let err = load_oriented_image(&path).unwrap_err();
        assert!(err.is_decode_failure());
        assert!(matches!(err, ResizeError::UnrecognizedImage(_)));
    }

    #[test]
    fn test_load_oriented_image_rejects_truncated_image() {
        // A PNG magic number followed by garbage decodes to an error, not a panic.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        File::create(&path)
            .unwrap()
            .write_all(b"\x89PNG\r\n\x1a\ngarbage")
            .unwrap();

        let err = load_oriented_image(&path).unwrap_err();
        assert!(err.is_decode_failure());
        // The format sniff succeeds, so this is a decode error on recognized
        // content, not an unrecognized file.
        assert!(matches!(err, ResizeError::Image(_)));
    }

    #[test]
    fn test_save_with_source_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        let img = DynamicImage::new_rgb8(64, 48);

        save_with_source_format(&img, &path, ImageFormat::Jpeg).unwrap();

        let (reloaded, format) = load_oriented_image(&path).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
        assert_eq!((reloaded.width(), reloaded.height()), (64, 48));
    }
}
