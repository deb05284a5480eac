//! PDF processing: text layer extraction and page image rendering.

mod extractor;

pub use extractor::PdfExtractor;

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::error::PdfError;
use crate::pipeline::TextSource;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the text layer of the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract the text layer of a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Render a page as an image, scaled by `zoom` on both axes.
    fn render_page(&self, page: u32, zoom: f32) -> Result<DynamicImage>;
}

/// Text-layer collaborator backed by [`PdfExtractor`].
///
/// Stateless: the document is opened, read, and dropped within a single
/// call, so no handle outlives one document's processing.
#[derive(Debug, Default)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn page_texts(&self, path: &Path) -> crate::Result<Vec<String>> {
        let data = std::fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;

        let page_count = extractor.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            pages.push(extractor.extract_page_text(page)?);
        }

        debug!(
            "text layer: {} page(s), {} chars total",
            page_count,
            pages.iter().map(String::len).sum::<usize>()
        );
        Ok(pages)
    }
}
