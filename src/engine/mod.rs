//! Inference engine seam
//!
//! The extraction/matching judgment is delegated to an external engine.
//! [`build_request`] produces the complete, deterministic request; the
//! [`InferenceEngine`] trait lets any conforming engine (or a test stub)
//! stand behind the same interface.

mod gemini;

pub use gemini::GeminiEngine;

use crate::error::Result;
use crate::payload::ImagePayload;
use worklist_ai_common::{
    build_extraction_prompt, format_reference_context, response_schema, ReferenceEntry,
};

/// A self-contained engine request: the image, the instruction text, and
/// the schema descriptor constraining the output shape.
#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub payload: ImagePayload,
    pub prompt: String,
    pub response_schema: serde_json::Value,
}

/// Assemble the engine request for one extraction call.
///
/// Deterministic for identical inputs; the catalog is serialized in order
/// and never deduplicated. An empty catalog yields a valid request with an
/// empty reference context.
pub fn build_request(payload: ImagePayload, catalog: &[ReferenceEntry]) -> EngineRequest {
    let context = format_reference_context(catalog);

    EngineRequest {
        payload,
        prompt: build_extraction_prompt(&context),
        response_schema: response_schema(),
    }
}

/// An engine that can answer one extraction request.
///
/// `Ok(None)` models the engine declining to produce output, which the
/// caller treats as an empty worklist. Transport failures are `Err` and are
/// recovered by the orchestrator, not surfaced to the end caller.
#[allow(async_fn_in_trait)]
pub trait InferenceEngine {
    async fn generate(&self, request: &EngineRequest) -> Result<Option<String>>;
}
