use serde_json::Value;

use crate::api::models::AnalysisResult;

/// Instruction sent with every upstream call. It asks the model for bare JSON,
/// but that is a soft convention: everything coming back is still treated as
/// free text and run through `extract_json` / `normalize`.
pub const SYSTEM_PROMPT: &str = r#"You are Code Gen Optimizer, an AI-powered analysis tool. Analyze AI-generated code for quality issues, performance bottlenecks, security vulnerabilities, and adherence to best practices. Optimize code generation prompts and outputs.

Analyze the user's input thoroughly and provide structured insights.

Respond with ONLY valid JSON in this exact format (no markdown, no code fences):
{
  "summary": "A concise 1-3 sentence overview of your analysis",
  "findings": [
    {
      "title": "Short finding title",
      "severity": "high",
      "detail": "Detailed explanation of this finding and why it matters"
    }
  ],
  "recommendations": ["Specific actionable recommendation"],
  "score": 75
}

Rules:
- Return 3-7 findings, each with a title, severity (high/medium/low), and detailed explanation
- Return 3-5 specific, actionable recommendations
- Score is 0-100 where 100 is the best possible result
- Be specific and insightful based on the actual input — never give generic advice
- severity distribution: at least 1 high, 1-2 medium, and 1 low finding"#;

/// Hard ceiling on forwarded input, to bound upstream cost and latency.
/// Excess is discarded silently.
pub const MAX_INPUT_CHARS: usize = 15_000;

const FALLBACK_SUMMARY: &str = "Analysis complete.";
const FALLBACK_SCORE: u8 = 50;

/// Clips input to the first `MAX_INPUT_CHARS` characters.
pub fn truncate_input(input: &str) -> &str {
    match input.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Finds the first substring that looks like a JSON object: from the first
/// `{` to the last `}`, greedy. Known limitation: with multiple objects or
/// trailing braces in the reply this can capture non-JSON text between them.
/// Kept as-is for compatibility with what the upstream prompt promises.
pub fn extract_json(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Coerces whatever the model produced into the response shape. Arrays pass
/// through untouched (no per-item validation); everything else gets a default.
pub fn normalize(mut value: Value) -> AnalysisResult {
    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_SUMMARY)
        .to_string();

    let findings = take_array(&mut value, "findings");
    let recommendations = take_array(&mut value, "recommendations");

    let score = match value.get("score").and_then(Value::as_f64) {
        Some(n) => n.clamp(0.0, 100.0).round() as u8,
        None => FALLBACK_SCORE,
    };

    AnalysisResult {
        summary,
        findings,
        recommendations,
        score,
    }
}

fn take_array(value: &mut Value, key: &str) -> Vec<Value> {
    match value.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
