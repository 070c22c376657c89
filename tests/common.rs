use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates the default directory layout: a scratch root holding `imgs/` and
/// `imgs/resized/`.
pub fn create_workspace() -> (TempDir, PathBuf, PathBuf) {
    let root = TempDir::new().unwrap();
    let images_dir = root.path().join("imgs");
    let resized_dir = images_dir.join("resized");
    std::fs::create_dir_all(&resized_dir).unwrap();
    (root, images_dir, resized_dir)
}

/// Writes a real encoded image with the given dimensions.
pub fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    DynamicImage::new_rgb8(width, height)
        .save_with_format(path, format)
        .unwrap();
}

/// Reads back the dimensions of an encoded image.
pub fn image_dimensions(path: &Path) -> (u32, u32) {
    let image = image::open(path).unwrap();
    (image.width(), image.height())
}
