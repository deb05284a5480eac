//! Data models: configuration and batch result records.

pub mod config;
pub mod record;

pub use config::{OcrConfig, RibxConfig};
pub use record::ResultRecord;
