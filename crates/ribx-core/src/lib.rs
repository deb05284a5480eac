//! Core library for batch IBAN extraction from PDF documents.
//!
//! This crate provides:
//! - PDF processing (text layer extraction and page image rendering)
//! - an OCR fallback tier for scanned documents
//! - IBAN candidate matching, reconstruction, and checksum validation
//! - the two-tier extraction pipeline tying them together

pub mod error;
pub mod iban;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;

pub use error::{OcrError, PdfError, Result, RibxError};
pub use iban::{find_candidates, select_valid, validate_iban};
pub use models::config::{OcrConfig, RibxConfig};
pub use models::record::ResultRecord;
pub use ocr::OcrEngine;
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextSource};
pub use pipeline::{IbanPipeline, OcrSource, TextSource};

#[cfg(feature = "native")]
pub use ocr::{PdfOcrSource, PureOcrEngine};
