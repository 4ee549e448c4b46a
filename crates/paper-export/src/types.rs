use paper_pattern::constants::{EXPORT_DPI, JPEG_QUALITY};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No renderable page to export")]
    NoPages,
    #[error("Rasterization failed: {0}")]
    Raster(String),
    #[error("Image encoding failed: {0}")]
    Encode(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("PDF error: {0}")]
    Lopdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Lossless image of the first page
    Png,
    /// JPEG image of the first page
    Jpg,
    /// Every page as a full-bleed image
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Raster formats only ever contain the first page
    pub fn is_raster(&self) -> bool {
        !matches!(self, ExportFormat::Pdf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub dpi: f32,
    /// JPEG quality 0-100
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dpi: EXPORT_DPI,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

/// An encoded export ready to be written
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
    /// Number of pages actually rendered into `bytes`
    pub pages: usize,
}
