//! Recovers a single JSON object from free-form generated text.
//!
//! Generated output is only partially well-formed: reasoning traces,
//! markdown fences, surrounding prose, and abandoned earlier attempts are
//! all common. The search policy here is a priority-ordered heuristic, not
//! a grammar — fenced blocks are preferred over bare objects, and within a
//! stage the *last* viable candidate wins, because models tend to
//! self-correct in later output. Parsing itself stays strict `serde_json`:
//! an invalid span is skipped whole, never partially accepted, and no
//! semantic repair is attempted.

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// How much of the input an extraction failure carries back for diagnosis.
const SNIPPET_LEN: usize = 200;

/// Extraction failure. These are the only hard failures in the ingestion
/// path; everything downstream of extraction degrades softly.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("empty response text")]
    EmptyInput,
    #[error("no JSON object found in response (snippet: {snippet})")]
    NoJsonFound { snippet: String },
}

/// Extract one JSON object from arbitrary text.
///
/// Search order: reasoning segments are stripped first, then fenced code
/// blocks are tried (last parseable block wins), then a left-to-right brace
/// scan over the whole text (last parseable object wins).
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    // Reasoning segments routinely contain brace-delimited text that is not
    // the answer; remove them before any JSON search.
    let reasoning = Regex::new(r"(?s)<think>.*?</think>").expect("literal pattern");
    let stripped = reasoning.replace_all(trimmed, "");
    let stripped = stripped.trim();

    if let Some(value) = from_fenced_blocks(stripped) {
        return Ok(value);
    }
    if let Some(value) = from_brace_scan(stripped) {
        return Ok(value);
    }

    Err(ExtractError::NoJsonFound {
        snippet: trimmed.chars().take(SNIPPET_LEN).collect(),
    })
}

/// Stage 1: fenced code blocks, optionally tagged `json`, whose content is
/// a single brace-delimited object. The last block that parses wins.
fn from_fenced_blocks(text: &str) -> Option<Value> {
    let fence = Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("literal pattern");
    let blocks: Vec<&str> = fence
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    blocks
        .into_iter()
        .rev()
        .find_map(|block| serde_json::from_str::<Value>(block).ok().filter(Value::is_object))
}

/// Stage 2: scan for every `{` and attempt a strict prefix parse there.
/// On success, resume after the consumed span; on failure, advance one byte
/// so a nested `{` still gets its own attempt. The last object wins.
fn from_brace_scan(text: &str) -> Option<Value> {
    let mut candidate = None;
    let mut start = 0;

    while let Some(offset) = text[start..].find('{') {
        let idx = start + offset;
        let mut stream = serde_json::Deserializer::from_str(&text[idx..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => {
                let consumed = stream.byte_offset();
                if value.is_object() {
                    candidate = Some(value);
                }
                start = idx + consumed.max(1);
            }
            _ => start = idx + 1,
        }
    }

    candidate
}
