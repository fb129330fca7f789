use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Gemini API key is missing. Please set the GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Gemini API error: {0}")]
    Gemini(String),

    #[error("response blocked: {0}")]
    Blocked(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
