//! Extraction orchestrator
//!
//! One call = one unit of work: build the engine request, make a single
//! engine call, normalize whatever comes back. No retries, no batching, no
//! state across calls.

use crate::engine::{build_request, InferenceEngine};
use crate::payload::ImagePayload;
use tracing::{debug, warn};
use worklist_ai_common::{normalize_response, ExtractedStudy, ReferenceEntry};

/// Extract procedure occurrences from a worklist image and match them
/// against the reference catalog.
///
/// Total for a validated payload: an engine transport failure or malformed
/// engine output is logged and yields an empty list, which the caller reads
/// as "no procedures identified". Repeated occurrences arrive as separate
/// records with quantity 1 and are never merged here.
pub async fn extract_and_match<E: InferenceEngine>(
    engine: &E,
    payload: ImagePayload,
    catalog: &[ReferenceEntry],
) -> Vec<ExtractedStudy> {
    let request = build_request(payload, catalog);
    debug!(
        catalog_entries = catalog.len(),
        mime_type = request.payload.mime_type(),
        "dispatching extraction request"
    );

    let raw = match engine.generate(&request).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("engine call failed, returning empty worklist: {}", e);
            return Vec::new();
        }
    };

    normalize_response(raw.as_deref())
}
