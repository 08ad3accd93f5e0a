use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-haiku-4-5-20251001";
const MAX_TOKENS: u32 = 2048;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// One unit of the model's reply. Only `text` blocks carry text; other kinds
/// (tool use, thinking) deserialize with an empty body and are skipped.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Sends one message to the Anthropic Messages API and returns the
/// concatenated text of every "text" content block in the reply.
pub async fn call_anthropic(
    api_key: &str,
    base_url: Option<&str>,
    system: &str,
    input: &str,
) -> Result<String> {
    let base = base_url.unwrap_or(DEFAULT_BASE_URL);
    let url = format!("{}/v1/messages", base.trim_end_matches('/'));

    let body = MessagesRequest {
        model: MODEL.into(),
        max_tokens: MAX_TOKENS,
        system: system.into(),
        messages: vec![Message {
            role: "user".into(),
            content: input.into(),
        }],
    };

    let res = CLIENT
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .json(&body)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let detail = res.text().await.unwrap_or_default();
        return Err(AppError::Internal(format!(
            "Anthropic API returned {}: {}",
            status, detail
        )));
    }

    let message: MessagesResponse = res.json().await?;

    let reply = message
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .map(|block| block.text)
        .collect();

    Ok(reply)
}
