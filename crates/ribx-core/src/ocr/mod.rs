//! OCR abstraction and the `pure-onnx-ocr` backed implementation.
//!
//! The pipeline only ever sees [`OcrEngine`]: a pixel buffer goes in,
//! text comes out. Everything model-related stays behind the `native`
//! feature.

#[cfg(feature = "native")]
mod engine;

#[cfg(feature = "native")]
pub use engine::{PdfOcrSource, PureOcrEngine};

use image::DynamicImage;

use crate::error::OcrError;

/// Black-box text recognizer.
pub trait OcrEngine {
    /// Recognize text in an image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
