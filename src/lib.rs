//! Worklist AI
//!
//! Extracts individual radiology-procedure line items from a worklist image
//! and matches each one against a caller-supplied CPT reference catalog.
//! The vision/matching judgment is delegated to an external inference
//! engine; this crate owns the request contract, the output schema, and the
//! validation/fallback policy.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod payload;

pub use worklist_ai_common::{ExtractedStudy, ReferenceEntry};
