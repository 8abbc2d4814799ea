use swatch_color::ColorError;
use thiserror::Error;

/// Errors produced while rendering or reading palette exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("token serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] ColorError),
}
