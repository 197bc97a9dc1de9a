//! Hosted-model interpreter over the Generative Language API
//!
//! One blocking `generateContent` call per command, with a request timeout and
//! no retries. The reply's first candidate text is parsed as JSON, checked
//! against the intent schema, then decoded into a [`RawIntent`].

use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::core::config::InterpreterConfig;
use crate::interpreter::intent::RawIntent;
use crate::interpreter::prompt::{intent_json_schema, response_schema, SYSTEM_PROMPT};
use crate::interpreter::{InterpretError, Interpreter};

/// Interpreter backed by a hosted Gemini model
#[derive(Debug, Clone)]
pub struct GeminiInterpreter {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiInterpreter {
    /// Build a client from configuration; fails when no API key is set
    pub fn from_config(config: &InterpreterConfig) -> Result<Self, InterpretError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(InterpretError::MissingApiKey)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// URL of the `generateContent` call
    pub fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl Interpreter for GeminiInterpreter {
    fn interpret(&self, text: &str) -> Result<RawIntent, InterpretError> {
        let url = self.request_url();
        debug!(%url, model = %self.model, "sending command to language model");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(text))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "language model request failed");
            return Err(InterpretError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json()?;
        let intent = parse_response(&body)?;
        debug!(tool = %intent.tool, "language model replied");
        Ok(intent)
    }
}

/// Request body for one command
pub fn build_request(text: &str) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_PROMPT }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": text }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

/// Extract and decode the intent from a `generateContent` response body
pub fn parse_response(body: &Value) -> Result<RawIntent, InterpretError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or(InterpretError::EmptyResponse)?;
    parse_intent_text(text)
}

/// Decode the model's JSON text, tolerating a stray markdown fence
///
/// Integer fields written as integral floats (`50.0`) pass the schema and
/// are decoded as integers.
pub fn parse_intent_text(text: &str) -> Result<RawIntent, InterpretError> {
    let mut value: Value = serde_json::from_str(strip_fence(text))?;
    validate_intent(&value)?;
    normalize_integers(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Fields the schema types as `integer`
const INTEGER_FIELDS: &[&str] = &["qty", "true_qty"];

fn normalize_integers(value: &mut Value) {
    let Some(object) = value.as_object_mut() else {
        return;
    };
    for field in INTEGER_FIELDS {
        let Some(slot) = object.get_mut(*field) else {
            continue;
        };
        let Some(f) = slot.as_f64() else {
            continue;
        };
        if slot.is_f64() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            *slot = Value::from(f as i64);
        }
    }
}

/// Check a decoded reply against [`intent_json_schema`]
pub fn validate_intent(value: &Value) -> Result<(), InterpretError> {
    let schema = intent_json_schema();
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| InterpretError::Schema(vec![e.to_string()]))?;

    let errors: Vec<String> = validator.iter_errors(value).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InterpretError::Schema(errors))
    }
}

fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => rest
            .trim_start_matches("json")
            .trim_end()
            .trim_end_matches("```")
            .trim(),
        None => trimmed,
    }
}
