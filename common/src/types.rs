//! Extraction contract types
//!
//! Shared between the CLI and the engine transport:
//! - ReferenceEntry: one row of the caller-supplied procedure catalog
//! - ExtractedStudy: one procedure occurrence extracted from the image

use serde::{Deserialize, Serialize};

/// One entry of the reference catalog: a known procedure name and its CPT code.
///
/// The catalog may contain duplicate names or codes; it is presented to the
/// engine verbatim and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceEntry {
    pub name: String,
    pub cpt: String,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>, cpt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpt: cpt.into(),
        }
    }
}

/// One procedure occurrence extracted from the worklist image.
///
/// Repeated occurrences of the same procedure arrive as separate records,
/// each with `quantity` 1. Merging duplicates is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedStudy {
    /// CPT code copied from the best-matching catalog entry,
    /// or an engine-chosen value when no confident match exists.
    pub cpt: String,

    /// Matched or inferred procedure name.
    pub name: String,

    /// Always 1 per record; one record per physical occurrence.
    pub quantity: u32,

    /// Raw text as it appeared in the image, kept for audit.
    pub original_text: String,

    /// Engine-reported match quality in [0, 1]. Advisory only.
    pub confidence: f64,
}

impl Default for ExtractedStudy {
    fn default() -> Self {
        Self {
            cpt: String::new(),
            name: String::new(),
            quantity: 1,
            original_text: String::new(),
            confidence: 0.0,
        }
    }
}
