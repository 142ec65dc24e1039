//! Error types for the screen-ruler library

use thiserror::Error;

/// Result type alias using RulerError
pub type Result<T> = std::result::Result<T, RulerError>;

/// Errors that can occur while calibrating, planning or rendering a ruler
#[derive(Debug, Error)]
pub enum RulerError {
    /// Monitor geometry with a non-positive or non-finite dimension.
    ///
    /// Usually means the display reported no physical size (missing EDID).
    #[error("Invalid monitor geometry: {0}")]
    InvalidGeometry(String),

    /// Drawing surface with a zero width or height
    #[error("Degenerate drawing surface: {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },

    /// Invalid ruler configuration or style
    #[error("Invalid ruler configuration: {0}")]
    InvalidConfig(String),

    /// Font loading or measurement error
    #[error("Font error: {0}")]
    FontError(String),

    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}
