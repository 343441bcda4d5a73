//! Reply repair and normalization
//!
//! The provider replies with free text that should contain exactly one
//! JSON object but frequently doesn't: prose around it, truncated output,
//! stray tokens inside it. This module is a cascading recovery chain —
//! span extraction, closer balancing, full parse, narrow colors-array
//! extraction — followed by field-level normalization that silently
//! defaults whatever is missing. Partial-but-usable output beats rejecting
//! an otherwise-good proposal.

use rand::Rng;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use color_science::{hex_to_rgb, rgb_to_hex};
use theme_tokens::{ColorToken, DesignRole, MainColorType, TokenCategory};

use crate::error::{GenerationError, Result};

// =============================================================================
// Span Extraction and Closer Repair
// =============================================================================

/// Extract the first greedy `{...}` span from reply text
///
/// Spans from the first `{` to the last `}`; a reply truncated before any
/// closing brace spans to the end of the text so the closer repair can
/// finish the job. `None` only when there is no `{` at all.
fn extract_object_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    match raw.rfind('}') {
        Some(end) if end > start => Some(&raw[start..=end]),
        _ => Some(&raw[start..]),
    }
}

/// Append the closers a truncated span is missing
///
/// Counts unmatched `[` and `{` and appends the missing `]`s then `}`s.
/// Deliberately naive — it miscounts brackets inside string values and
/// cannot interleave closers for pathological nesting — but it recovers
/// the common failure, output cut off mid-array.
fn repair_closers(span: &str) -> String {
    let mut open_braces: i64 = 0;
    let mut open_brackets: i64 = 0;

    for c in span.chars() {
        match c {
            '{' => open_braces += 1,
            '}' => open_braces -= 1,
            '[' => open_brackets += 1,
            ']' => open_brackets -= 1,
            _ => {}
        }
    }

    let mut repaired = span.to_string();
    for _ in 0..open_brackets.max(0) {
        repaired.push(']');
    }
    for _ in 0..open_braces.max(0) {
        repaired.push('}');
    }
    repaired
}

/// Extract just the `"colors": [...]` sub-array from reply text
///
/// The narrow fallback for replies whose object is broken elsewhere: a
/// regex locates the key, a bracket-depth scan bounds the array, and a
/// truncated array gets its own closer repair.
fn extract_colors_array(text: &str) -> Option<String> {
    // The pattern is fixed, so compilation cannot fail
    let key = Regex::new(r#""colors"\s*:\s*\["#).expect("valid colors-key pattern");
    let found = key.find(text)?;

    let array_start = found.end() - 1;
    let bytes = text.as_bytes();
    let mut depth: i64 = 0;

    for (offset, &byte) in bytes[array_start..].iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[array_start..=array_start + offset].to_string());
                }
            }
            _ => {}
        }
    }

    // Array never closed: take the rest and balance it
    Some(repair_closers(&text[array_start..]))
}

// =============================================================================
// Reply Parsing
// =============================================================================

/// Parse reply text into a JSON object, repairing what can be repaired
///
/// The cascade: locate the object span (else [`GenerationError::MalformedReply`]),
/// balance truncated closers, parse; on parse failure and only when colors
/// were requested, fall back to extracting the `"colors"` sub-array into a
/// synthetic object. When everything fails the raw text rides along on
/// [`GenerationError::UnrecoverableReply`] for diagnostics.
pub fn parse_reply(raw: &str, colors_requested: bool) -> Result<Value> {
    let span = extract_object_span(raw).ok_or_else(|| GenerationError::malformed(raw))?;
    let repaired = repair_closers(span);

    match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => Ok(value),
        Err(parse_err) => {
            debug!(error = %parse_err, "full reply parse failed");

            if colors_requested {
                if let Some(array) = extract_colors_array(&repaired) {
                    let synthetic = format!(r#"{{"colors": {}}}"#, array);
                    if let Ok(value) = serde_json::from_str::<Value>(&synthetic) {
                        warn!("recovered colors array from unparseable reply");
                        return Ok(value);
                    }
                }
            }

            Err(GenerationError::unrecoverable(raw))
        }
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// A random color for entries the model forgot to give one
fn fallback_hex() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
    format!("#{:06X}", value)
}

/// Coerce one reply entry into a [`ColorToken`], defaulting every gap
///
/// Nothing in here errors: a missing or malformed hex becomes a random
/// fallback, a missing name becomes `"Color {n}"`, an unknown category
/// becomes supplement, `mainColorType` is stripped from non-main tokens,
/// and unknown design-role names are dropped.
pub fn normalize_color_entry(entry: &Value, index: usize) -> ColorToken {
    let hex = entry
        .get("hex")
        .and_then(Value::as_str)
        .and_then(hex_to_rgb)
        .map(rgb_to_hex)
        .unwrap_or_else(|| {
            let fallback = fallback_hex();
            debug!(index, fallback = %fallback, "color entry missing usable hex");
            fallback
        });

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Color {}", index + 1));

    let category = match entry.get("category").and_then(Value::as_str) {
        Some("main") => TokenCategory::Main,
        _ => TokenCategory::Supplement,
    };

    let main_color_type = if category == TokenCategory::Main {
        entry
            .get("mainColorType")
            .and_then(|v| serde_json::from_value::<MainColorType>(v.clone()).ok())
    } else {
        None
    };

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let ideal_usecases = entry
        .get("idealUsecases")
        .and_then(Value::as_array)
        .map(|roles| {
            roles
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|s| s.parse::<DesignRole>().ok())
                .collect()
        })
        .unwrap_or_default();

    ColorToken {
        hex,
        name,
        category,
        main_color_type,
        description,
        ideal_usecases,
    }
}

/// Normalize every color entry of a parsed reply
pub fn normalize_colors(entries: &[Value]) -> Vec<ColorToken> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_color_entry(entry, index))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
