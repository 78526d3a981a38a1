use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorklistAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set. Set it with `worklist-ai config --set-api-key YOUR_KEY` or the GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error("Invalid reference catalog: {0}")]
    InvalidCatalog(String),

    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] worklist_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, WorklistAiError>;
