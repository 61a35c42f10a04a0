use posterize::PosterizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("Unsupported PNG: {0}")]
    UnsupportedPng(String),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Posterize error: {0}")]
    Posterize(#[from] PosterizeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
