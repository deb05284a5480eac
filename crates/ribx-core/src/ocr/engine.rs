//! OCR engine wrapper using `pure-onnx-ocr` and the page-OCR collaborator.

use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use super::OcrEngine;
use crate::error::OcrError;
use crate::models::config::OcrConfig;
use crate::pdf::{PdfExtractor, PdfProcessor};
use crate::pipeline::OcrSource;

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX
/// runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
}

impl PureOcrEngine {
    /// Create an engine from the model files named in the configuration.
    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        let det_path = config.model_dir.join(&config.detection_model);
        let rec_path = config.model_dir.join(&config.recognition_model);
        let dict_path = config.model_dir.join(&config.dictionary);

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("loaded OCR models from {}", config.model_dir.display());
        Ok(Self { engine })
    }
}

impl OcrEngine for PureOcrEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let mut results = self
            .engine
            .run_from_image(image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        // Reading order: bucket boxes into 20px rows, left to right.
        results.sort_by(|a, b| {
            let (ax, ay) = anchor(&a.bounding_box);
            let (bx, by) = anchor(&b.bounding_box);
            let row_a = (ay / 20.0) as i64;
            let row_b = (by / 20.0) as i64;
            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        debug!("OCR recognized {} text region(s)", results.len());

        Ok(results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Top-left anchor of a detected text polygon.
fn anchor(polygon: &pure_onnx_ocr::Polygon<f64>) -> (f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for coord in polygon.exterior().coords() {
        min_x = min_x.min(coord.x);
        min_y = min_y.min(coord.y);
    }
    (min_x, min_y)
}

/// OCR collaborator: renders each page at the configured zoom factor
/// and recognizes its text.
///
/// The PDF handle and the OCR engine both live inside one `page_texts`
/// call, so nothing is carried over between documents in a batch.
pub struct PdfOcrSource {
    config: OcrConfig,
}

impl PdfOcrSource {
    /// Create a source from the OCR configuration.
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl OcrSource for PdfOcrSource {
    fn page_texts(&self, path: &Path) -> crate::Result<Vec<String>> {
        let data = std::fs::read(path)?;
        let mut pdf = PdfExtractor::new();
        pdf.load(&data)?;

        let engine = PureOcrEngine::from_config(&self.config)?;

        let page_count = pdf.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            let image = pdf.render_page(page, self.config.zoom)?;
            pages.push(engine.recognize(&image)?);
        }

        debug!("OCR processed {} page(s) of {}", page_count, path.display());
        Ok(pages)
    }
}
