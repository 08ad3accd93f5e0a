use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Kept as raw JSON so missing, non-string, and blank inputs all fall
    /// through to the same 400 instead of a deserializer rejection.
    #[serde(default)]
    pub input: Option<Value>,
}

impl AnalyzeRequest {
    /// Returns the input text if it is a string that is non-empty after
    /// trimming. The untrimmed original is what gets forwarded upstream.
    pub fn text(&self) -> Result<&str> {
        match self.input.as_ref().and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(AppError::InvalidInput),
        }
    }
}

/// Normalized analysis payload returned to the front-end. `findings` and
/// `recommendations` are raw JSON arrays: whatever array the model produced
/// passes through without per-item validation. A well-behaved reply fills
/// `findings` with [`Finding`] objects, which is the shape the front-end
/// renders against.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub findings: Vec<Value>,
    pub recommendations: Vec<Value>,
    pub score: u8,
}

/// Per-finding shape the system prompt mandates upstream. The backend does
/// not enforce it; it documents the contract the front-end renders against.
#[derive(Debug, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub severity: Severity,
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}
