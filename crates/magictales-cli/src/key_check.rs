//! Gemini credential check
//!
//! Sends one tiny prompt straight to the text model and classifies the answer,
//! without going through the MagicTales server.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1/models";
pub const PROBE_PROMPT: &str = "Say hello to the world in a brief sentence.";
const TIMEOUT: Duration = Duration::from_secs(20);

/// Outcome of probing a key
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnosis {
    /// Key works and the model answered
    Valid { reply: String },
    /// 200 OK but no text came back
    EmptyReply,
    InvalidKey { status: u16, message: String },
    ModelNotFound { status: u16, message: String },
    BillingDisabled { status: u16, message: String },
    /// Error body we could read but not classify
    Failed { status: u16, message: String },
    /// Error body that was not JSON
    Unreadable { status: u16 },
    Transport(String),
}

impl Diagnosis {
    pub fn is_valid(&self) -> bool {
        matches!(self, Diagnosis::Valid { .. })
    }

    /// One-line advice for the user
    pub fn conclusion(&self) -> &'static str {
        match self {
            Diagnosis::Valid { .. } => {
                "Key is valid. Put it in Secrets.toml as GEMINI_API_KEY."
            }
            Diagnosis::EmptyReply => {
                "The model answered without text. Check the request or the key's permissions."
            }
            Diagnosis::InvalidKey { .. } => {
                "The key is malformed or revoked. Generate a new one in Google AI Studio."
            }
            Diagnosis::ModelNotFound { .. } => {
                "Model not found. Check that the key has access to this model."
            }
            Diagnosis::BillingDisabled { .. } => {
                "Billing is not enabled. Enable it in the Google Cloud Console."
            }
            Diagnosis::Failed { .. } => "The provider rejected the request.",
            Diagnosis::Unreadable { .. } => {
                "The server answered with an unexpected format. The key may be invalid."
            }
            Diagnosis::Transport(_) => "Network error or timeout. Check your connection.",
        }
    }
}

/// Classify a non-success answer from the provider
pub fn diagnose_failure(status: u16, body: &str) -> Diagnosis {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Diagnosis::Unreadable { status },
    };

    let message = value["error"]["message"]
        .as_str()
        .unwrap_or("No error message")
        .to_string();

    if message.contains("API key not valid") || message.contains("API key is not valid") {
        Diagnosis::InvalidKey { status, message }
    } else if message.contains("NOT_FOUND") {
        Diagnosis::ModelNotFound { status, message }
    } else if message.contains("Billing") {
        Diagnosis::BillingDisabled { status, message }
    } else {
        Diagnosis::Failed { status, message }
    }
}

/// Classify a 200 answer
pub fn diagnose_success(body: &Value) -> Diagnosis {
    let reply = body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::trim)
        .unwrap_or_default();

    if reply.is_empty() {
        Diagnosis::EmptyReply
    } else {
        Diagnosis::Valid {
            reply: reply.to_string(),
        }
    }
}

/// Send the hello prompt to `model` with `api_key`
pub async fn check_key(base_url: &str, api_key: &str, model: &str) -> Diagnosis {
    let client = match Client::builder().timeout(TIMEOUT).build() {
        Ok(c) => c,
        Err(e) => return Diagnosis::Transport(e.to_string()),
    };

    let url = format!(
        "{}/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        api_key
    );
    let payload = json!({
        "contents": [{ "parts": [{ "text": PROBE_PROMPT }] }]
    });

    let resp = match client.post(&url).json(&payload).send().await {
        Ok(r) => r,
        Err(e) => return Diagnosis::Transport(e.to_string()),
    };

    let status = resp.status();
    let body = match resp.text().await {
        Ok(b) => b,
        Err(e) => return Diagnosis::Transport(e.to_string()),
    };

    if !status.is_success() {
        return diagnose_failure(status.as_u16(), &body);
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => diagnose_success(&value),
        Err(_) => Diagnosis::EmptyReply,
    }
}
