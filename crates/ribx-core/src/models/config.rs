//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RibxError};

/// Main configuration for the ribx pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RibxConfig {
    /// Directory scanned (non-recursively) for input PDF files.
    pub input_dir: PathBuf,

    /// OCR configuration for the fallback tier.
    pub ocr: OcrConfig,
}

impl Default for RibxConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("RIB"),
            ocr: OcrConfig::default(),
        }
    }
}

/// OCR engine configuration.
///
/// All engine paths are resolved from here at startup. The default
/// latin models cover French, the language these documents are
/// written in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing the ONNX model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Zoom factor applied to both axes when rendering a page for OCR.
    pub zoom: f32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            zoom: 2.0,
        }
    }
}

impl RibxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RibxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RibxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
