//! Engine response parser
//!
//! Extracts JSON from the raw engine output and normalizes it to the list
//! of extracted studies. The public entry point is total: any malformed or
//! missing response becomes an empty list, never an error.

use crate::error::{Error, Result};
use crate::types::ExtractedStudy;
use tracing::{debug, warn};

/// Extract the JSON portion of an engine response.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. bare { ... } object
/// 3. error
///
/// # Arguments
/// * `response` - raw engine response text
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON text
/// * `Err` - no JSON found
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` fenced block
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // bare { ... }
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON found in response".into()))
}

/// Normalize a raw engine response into the extracted study list.
///
/// Total over its input:
/// - absent or blank response: empty list (a normal outcome under
///   low-confidence conditions)
/// - unparseable JSON: logged, empty list
/// - missing `studies` key, or `studies` not an array: logged, empty list
/// - otherwise: the records under `studies`, in order, with no filtering,
///   deduplication, or confidence thresholding
///
/// Individual records decode leniently; missing fields take defaults
/// (`quantity` defaults to 1). A record that is not an object at all is
/// skipped with a warning rather than failing the batch.
pub fn normalize_response(raw: Option<&str>) -> Vec<ExtractedStudy> {
    let Some(text) = raw else {
        debug!("engine returned no output; treating as empty worklist");
        return Vec::new();
    };

    if text.trim().is_empty() {
        debug!("engine returned blank output; treating as empty worklist");
        return Vec::new();
    }

    let json_str = match extract_json(text) {
        Ok(json_str) => json_str,
        Err(e) => {
            warn!("no JSON in engine response: {}", e);
            return Vec::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(json_str) {
        Ok(value) => value,
        Err(e) => {
            warn!("engine response is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(studies) = value.get("studies") else {
        warn!("engine response has no \"studies\" key");
        return Vec::new();
    };

    let Some(records) = studies.as_array() else {
        warn!("engine response \"studies\" is not an array");
        return Vec::new();
    };

    records
        .iter()
        .filter_map(|record| match serde_json::from_value(record.clone()) {
            Ok(study) => Some(study),
            Err(e) => {
                warn!("skipping unreadable study record: {}", e);
                None
            }
        })
        .collect()
}
