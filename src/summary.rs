//! Per-hook payload summaries
//!
//! Each hook logs a hand-picked, length-bounded subset of its payload.
//! Missing fields are simply left out of the summary.

use serde_json::{Map, Value};

use crate::consts::{TEXT_LIMIT, TOOL_PAYLOAD_LIMIT, UNKNOWN};
use crate::hooks::HookName;

/// Ordered JSON object written after the `|` of a log line
pub type Summary = Map<String, Value>;

/// Build the summary for `hook` from its event payload and context.
pub fn summarize(hook: HookName, event: &Value, ctx: &Value) -> Summary {
    let mut s = Summary::new();
    match hook {
        HookName::BeforeModelResolve => {
            put(&mut s, "prompt", truncated(event.get("prompt"), TEXT_LIMIT));
        }
        HookName::BeforePromptBuild => {
            put(&mut s, "prompt", truncated(event.get("prompt"), TEXT_LIMIT));
            let count = match event.get("messages") {
                Some(Value::Array(messages)) => Value::from(messages.len()),
                _ => Value::from(UNKNOWN),
            };
            put(&mut s, "messagesCount", Some(count));
        }
        HookName::BeforeAgentStart => {
            put(&mut s, "prompt", truncated(event.get("prompt"), TEXT_LIMIT));
            put(&mut s, "sessionKey", ctx.get("sessionKey").cloned());
        }
        HookName::LlmInput => {
            copy(&mut s, event, &["model", "provider"]);
            put(&mut s, "prompt", truncated(event.get("prompt"), TEXT_LIMIT));
        }
        HookName::LlmOutput => {
            let count = match event.get("assistantTexts") {
                Some(Value::Array(texts)) => texts.len(),
                Some(Value::String(text)) => text.chars().count(),
                _ => 0,
            };
            put(&mut s, "textsCount", Some(Value::from(count)));
            let stop_reason = event
                .get("lastAssistant")
                .and_then(|m| m.get("stop_reason"))
                .cloned();
            put(&mut s, "stopReason", stop_reason);
        }
        HookName::AgentEnd => copy(&mut s, event, &["success", "error", "durationMs"]),
        HookName::BeforeCompaction => copy(&mut s, event, &["messageCount", "tokenCount"]),
        HookName::AfterCompaction => copy(&mut s, event, &["messageCount", "compactedCount"]),
        HookName::BeforeReset => copy(&mut s, event, &["reason"]),
        HookName::MessageReceived => {
            copy(&mut s, event, &["from"]);
            put(&mut s, "content", truncated(event.get("content"), TEXT_LIMIT));
        }
        HookName::MessageSending => {
            copy(&mut s, event, &["to"]);
            put(&mut s, "content", truncated(event.get("content"), TEXT_LIMIT));
        }
        HookName::MessageSent => copy(&mut s, event, &["to", "success", "error"]),
        HookName::BeforeToolCall => {
            put(&mut s, "tool", event.get("toolName").cloned());
            let args = event.get("params").and_then(|p| p.get("args"));
            let encoded = encode_or(args, || Value::Object(Map::new()));
            put(&mut s, "args", Some(Value::String(take_chars(&encoded, TOOL_PAYLOAD_LIMIT))));
        }
        HookName::AfterToolCall => {
            put(&mut s, "tool", event.get("toolName").cloned());
            let outcome = truthy(event.get("result")).or_else(|| truthy(event.get("error")));
            let encoded = encode_or(outcome, || Value::Object(Map::new()));
            put(&mut s, "result", Some(Value::String(take_chars(&encoded, TOOL_PAYLOAD_LIMIT))));
        }
        HookName::ToolResultPersist => copy(&mut s, event, &["toolName", "toolCallId"]),
        HookName::BeforeMessageWrite => {
            let message = event.get("message");
            put(&mut s, "role", message.and_then(|m| m.get("role")).cloned());
            let content = message.and_then(|m| m.get("content"));
            let encoded = encode_or(content, || Value::String(String::new()));
            put(&mut s, "content", Some(Value::String(take_chars(&encoded, TEXT_LIMIT))));
        }
        HookName::SessionStart => copy(&mut s, event, &["sessionKey", "agentId"]),
        HookName::SessionEnd => copy(&mut s, event, &["sessionKey"]),
        HookName::GatewayStart => copy(&mut s, event, &["port", "host"]),
        HookName::GatewayStop => {}
    }
    s
}

fn put(summary: &mut Summary, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        summary.insert(key.to_string(), value);
    }
}

/// Copy fields verbatim; `null` is kept, absent keys are skipped.
fn copy(summary: &mut Summary, event: &Value, keys: &[&str]) {
    for key in keys {
        put(summary, key, event.get(*key).cloned());
    }
}

/// Cut strings to `limit` chars. Non-strings pass through untouched.
fn truncated(value: Option<&Value>, limit: usize) -> Option<Value> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(Value::String(take_chars(text, limit))),
        other => Some(other.clone()),
    }
}

/// Compact JSON of `value`, or of `fallback()` when `value` is falsy.
fn encode_or(value: Option<&Value>, fallback: impl FnOnce() -> Value) -> String {
    match truthy(value) {
        Some(v) => v.to_string(),
        None => fallback().to_string(),
    }
}

/// `None` for falsy values: absent, `null`, `false`, `0` and `""`.
fn truthy(value: Option<&Value>) -> Option<&Value> {
    let value = value?;
    let falsy = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    if falsy { None } else { Some(value) }
}

fn take_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
