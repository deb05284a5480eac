//! Two-tier extraction pipeline: embedded text first, OCR fallback.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::iban::{find_candidates, select_valid};

/// Produces per-page text blocks from a document's embedded text layer.
pub trait TextSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

/// Produces per-page text blocks by rendering pages and running OCR.
pub trait OcrSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

/// Per-document IBAN extraction.
///
/// Tier 1 reads the embedded text layer; tier 2 (OCR) runs only when
/// tier 1 produced no valid IBAN. First success wins.
pub struct IbanPipeline<T, O> {
    text: T,
    ocr: O,
}

impl<T: TextSource, O: OcrSource> IbanPipeline<T, O> {
    /// Create a pipeline over the two extraction collaborators.
    pub fn new(text: T, ocr: O) -> Self {
        Self { text, ocr }
    }

    /// Extract at most one valid IBAN from the document at `path`.
    ///
    /// A text-tier failure is downgraded to "no candidates" and falls
    /// through to OCR; an OCR-tier failure is an error for this
    /// document. Pure with respect to the collaborators: identical
    /// collaborator behavior yields an identical result.
    pub fn extract(&self, path: &Path) -> Result<Option<String>> {
        if let Some(iban) = self.text_tier(path) {
            return Ok(Some(iban));
        }
        self.ocr_tier(path)
    }

    fn text_tier(&self, path: &Path) -> Option<String> {
        let pages = match self.text.page_texts(path) {
            Ok(pages) => pages,
            Err(e) => {
                // Treated the same as an empty text layer; the OCR
                // tier gets its turn.
                debug!("text extraction failed for {}: {}", path.display(), e);
                return None;
            }
        };

        let candidates = find_candidates(&pages.join("\n\n"));
        debug!(
            "text tier: {} candidate(s) in {}",
            candidates.len(),
            path.display()
        );
        select_valid(&candidates)
    }

    fn ocr_tier(&self, path: &Path) -> Result<Option<String>> {
        let pages = self.ocr.page_texts(path)?;

        // Candidates accumulate across pages, deduplicated, validated
        // once over the combined list.
        let mut candidates: Vec<String> = Vec::new();
        for text in &pages {
            for candidate in find_candidates(text) {
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }

        debug!(
            "OCR tier: {} candidate(s) across {} page(s) in {}",
            candidates.len(),
            pages.len(),
            path.display()
        );
        Ok(select_valid(&candidates))
    }
}
