//! Gemini API engine
//!
//! Calls `models/<model>:generateContent` with the worklist image inline
//! and the response schema attached, and hands back the first candidate
//! text. The API key is held here and in the URL only; it never appears in
//! errors or logs.

use super::{EngineRequest, InferenceEngine};
use crate::config::Config;
use crate::error::{Result, WorklistAiError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API request
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini API response
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiEngine {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiEngine {
    pub fn new(api_key: String, model: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| WorklistAiError::ApiCall(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            api_key,
            model,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::new(api_key, config.model.clone(), config.timeout_seconds)
    }
}

impl InferenceEngine for GeminiEngine {
    async fn generate(&self, request: &EngineRequest) -> Result<Option<String>> {
        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.prompt.clone(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.payload.mime_type().to_string(),
                            data: request.payload.data().to_string(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WorklistAiError::ApiCall(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(WorklistAiError::ApiCall(format!(
                "API error {}: {}",
                status, text
            )));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| WorklistAiError::ApiCall(format!("invalid response body: {}", e)))?;

        Ok(payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone()))
    }
}
