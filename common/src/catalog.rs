//! Reference catalog serialization
//!
//! The catalog is handed to the engine as a line-oriented context block,
//! one entry per line in catalog order:
//!
//! ```text
//! NAME: CT Head | CPT: 70450
//! ```

use crate::error::{Error, Result};
use crate::types::ReferenceEntry;

/// Serialize the reference catalog into the prompt context block.
///
/// Order is preserved and duplicates are kept. An empty catalog yields an
/// empty string, which is still a valid context.
///
/// # Arguments
/// * `catalog` - caller-supplied reference entries
///
/// # Returns
/// One `NAME: <name> | CPT: <cpt>` line per entry, joined with newlines
pub fn format_reference_context(catalog: &[ReferenceEntry]) -> String {
    catalog
        .iter()
        .map(|entry| format!("NAME: {} | CPT: {}", entry.name, entry.cpt))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a context block back into reference entries.
///
/// Exact inverse of [`format_reference_context`] for audit tooling: order
/// and name/cpt pairs survive the round trip. Blank lines are skipped.
///
/// # Arguments
/// * `context` - a context block produced by [`format_reference_context`]
///
/// # Returns
/// * `Ok(Vec<ReferenceEntry>)` - parsed entries in block order
/// * `Err` - a non-blank line does not match the line format
pub fn parse_reference_context(context: &str) -> Result<Vec<ReferenceEntry>> {
    let mut entries = Vec::new();

    for line in context.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let rest = line
            .strip_prefix("NAME: ")
            .ok_or_else(|| Error::Parse(format!("invalid context line: {}", line)))?;
        let (name, cpt) = rest
            .rsplit_once(" | CPT: ")
            .ok_or_else(|| Error::Parse(format!("invalid context line: {}", line)))?;

        entries.push(ReferenceEntry::new(name, cpt));
    }

    Ok(entries)
}
