//! Prompt construction
//!
//! Builds the fixed instruction block sent to the inference engine together
//! with the worklist image, plus the machine-checkable response schema that
//! constrains the engine to the `studies` output shape.

use serde_json::{json, Value};

/// The five fields every extracted record must carry, in output order.
pub const STUDY_FIELDS: &[&str] = &["cpt", "name", "quantity", "originalText", "confidence"];

/// Build the extraction/matching prompt.
///
/// The instruction block is fixed; only the reference context varies. An
/// empty context is valid and asks the engine for best-guess names and codes
/// with low confidence.
///
/// # Arguments
/// * `reference_context` - the `NAME: … | CPT: …` block from
///   [`crate::catalog::format_reference_context`]
///
/// # Returns
/// The complete prompt text
pub fn build_extraction_prompt(reference_context: &str) -> String {
    format!(
        r#"You are an expert Radiology Medical Coder.

REFERENCE LIST:
{reference_context}

INSTRUCTIONS:
1. Extract every individual radiology procedure occurrence from the provided worklist image, not a deduplicated set.
2. Match each occurrence to the closest entry in the REFERENCE LIST by name and context. Copy that entry's CPT code. If no entry is a confident match, infer the most likely name and code and report low confidence.
3. Never merge repeated occurrences of the same procedure. Each occurrence is its own record with "quantity" fixed at 1.
4. For each record, set "originalText" to the raw text exactly as it appears in the image.
5. Output exactly one JSON object with a single key "studies" holding an array of records. Every record has exactly these fields in this order: "cpt", "name", "quantity", "originalText", "confidence". All five fields are mandatory.
6. Output JSON only. No explanations."#
    )
}

/// Response schema descriptor for the engine's structured-output mode.
///
/// Mirrors the `ExtractedStudy` shape so the engine is constrained to
/// well-formed JSON rather than merely asked for it.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "studies": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "cpt": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "quantity": { "type": "NUMBER", "description": "Quantity for this individual line item." },
                        "originalText": { "type": "STRING", "description": "Raw text found in the image." },
                        "confidence": { "type": "NUMBER", "description": "Match confidence 0-1." }
                    },
                    "required": ["cpt", "name", "quantity", "originalText", "confidence"]
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::format_reference_context;
    use crate::types::ReferenceEntry;

    // =============================================
    // build_extraction_prompt tests
    // =============================================

    #[test]
    fn test_prompt_contains_reference_context() {
        let catalog = vec![
            ReferenceEntry::new("CT Head", "70450"),
            ReferenceEntry::new("MRI Brain", "70551"),
        ];
        let context = format_reference_context(&catalog);
        let prompt = build_extraction_prompt(&context);

        assert!(prompt.contains("NAME: CT Head | CPT: 70450"));
        assert!(prompt.contains("NAME: MRI Brain | CPT: 70551"));
    }

    #[test]
    fn test_prompt_mandates_no_merging() {
        let prompt = build_extraction_prompt("");
        assert!(prompt.contains("Never merge repeated occurrences"));
        assert!(prompt.contains("\"quantity\" fixed at 1"));
    }

    #[test]
    fn test_prompt_mandates_studies_object() {
        let prompt = build_extraction_prompt("");
        assert!(prompt.contains("exactly one JSON object"));
        assert!(prompt.contains("\"studies\""));
        assert!(prompt.contains("Output JSON only"));
    }

    #[test]
    fn test_prompt_lists_all_fields() {
        let prompt = build_extraction_prompt("");
        for field in STUDY_FIELDS {
            assert!(prompt.contains(field), "prompt missing field {}", field);
        }
    }

    #[test]
    fn test_prompt_deterministic() {
        let context = "NAME: CT Head | CPT: 70450";
        assert_eq!(
            build_extraction_prompt(context),
            build_extraction_prompt(context)
        );
    }

    #[test]
    fn test_prompt_empty_context_still_valid() {
        let prompt = build_extraction_prompt("");
        assert!(prompt.contains("REFERENCE LIST:"));
        assert!(prompt.contains("INSTRUCTIONS:"));
    }

    // =============================================
    // response_schema tests
    // =============================================

    #[test]
    fn test_schema_has_studies_array() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["studies"]["type"], "ARRAY");
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        let required = schema["properties"]["studies"]["items"]["required"]
            .as_array()
            .expect("required must be an array");
        let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(required, STUDY_FIELDS);
    }

    #[test]
    fn test_schema_item_properties_match_fields() {
        let schema = response_schema();
        let props = schema["properties"]["studies"]["items"]["properties"]
            .as_object()
            .expect("items.properties must be an object");
        for field in STUDY_FIELDS {
            assert!(props.contains_key(*field), "schema missing field {}", field);
        }
    }
}
