//! Error types for the ribx-core library.

use thiserror::Error;

/// Main error type for the ribx library.
#[derive(Error, Debug)]
pub enum RibxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// Failed to extract a page image from PDF.
    #[error("failed to extract image: {0}")]
    ImageExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Result type for the ribx library.
pub type Result<T> = std::result::Result<T, RibxError>;
