use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot identify image file {0}")]
    UnrecognizedImage(PathBuf),

    #[error("\"{0}\" is not a valid size")]
    InvalidSize(String),

    #[error("\"{0}\" is not a valid directory")]
    InvalidDirectory(PathBuf),

    #[error("log file directory does not exist: {0}")]
    InvalidLogFile(PathBuf),

    #[error("no message catalog for language \"{0}\"")]
    UnknownLanguage(String),

    #[error("unsupported encoding \"{0}\": message catalogs are UTF-8")]
    UnsupportedEncoding(String),

    #[error("missing message key \"{0}\" in catalog")]
    MissingMessage(String),

    #[error("message catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl ResizeError {
    /// True for the per-file failures that mean "this is not a decodable
    /// image". The batch loop reports these and moves on; everything else
    /// propagates.
    ///
    /// `ImageError::IoError` counts too: once the format is recognized, a
    /// read failure mid-decode means truncated or corrupt image data (the
    /// decoder hits an unexpected end of input). Encode errors never pass
    /// through this check, so write failures still abort the run.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            ResizeError::UnrecognizedImage(_)
                | ResizeError::Image(image::ImageError::Decoding(_))
                | ResizeError::Image(image::ImageError::Unsupported(_))
                | ResizeError::Image(image::ImageError::IoError(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;
