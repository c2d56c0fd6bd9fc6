//! Scrip turns raw OCR/PDF text into structured transaction candidates.
//!
//! The pipeline is deliberately rule-based and never fails: noisy input
//! degrades to zero/empty fields, and a decode failure upstream yields a
//! manual-entry placeholder instead of an error.

pub mod classifier;
pub mod error;
pub mod extractor;
pub mod fmt;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod settings;
pub mod taxonomy;

pub use classifier::suggest_category;
pub use extractor::extract_receipt_data;
pub use history::{detect_history_mode, parse_transaction_history};
pub use pipeline::process_document;
