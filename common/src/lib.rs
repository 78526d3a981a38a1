//! Worklist AI Common Library
//!
//! The extraction-and-matching contract shared by the CLI and the engine
//! transport: wire types, catalog context serialization, prompt and schema
//! construction, and the total response normalizer.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod types;

pub use catalog::{format_reference_context, parse_reference_context};
pub use error::{Error, Result};
pub use parser::{extract_json, normalize_response};
pub use prompts::{build_extraction_prompt, response_schema, STUDY_FIELDS};
pub use types::{ExtractedStudy, ReferenceEntry};
