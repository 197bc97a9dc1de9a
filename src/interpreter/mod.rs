//! Natural-language command interpretation
//!
//! An [`Interpreter`] turns free text into a [`RawIntent`]. Validation into a
//! typed [`Intent`] happens separately, so every interpreter shares the same
//! rules for missing fields and unknown tools.

pub mod gemini;
pub mod intent;
pub mod prompt;

use thiserror::Error;

pub use gemini::GeminiInterpreter;
pub use intent::{Intent, RawIntent, ToolAction};

/// Failures of the interpreter call itself
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("No API key configured. Set STOCKMASTER_API_KEY or GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Request to the language model failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No response from the language model")]
    EmptyResponse,

    #[error("Language model reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Language model reply does not match the intent schema: {}", .0.join("; "))]
    Schema(Vec<String>),
}

/// Maps free text to a raw structured intent
pub trait Interpreter {
    fn interpret(&self, text: &str) -> Result<RawIntent, InterpretError>;
}

impl<F> Interpreter for F
where
    F: Fn(&str) -> Result<RawIntent, InterpretError>,
{
    fn interpret(&self, text: &str) -> Result<RawIntent, InterpretError> {
        self(text)
    }
}
