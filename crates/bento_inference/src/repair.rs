//! Turning the model's textual reply into a presentable [`BentoResult`].

use bento_core::{BentoResult, Error, Result, Section};
use serde_json::{Map, Value};
use tracing::error;

pub const TITLE_MAX_CHARS: usize = 20;
pub const SUBTITLE_MAX_CHARS: usize = 40;
pub const NUMBER_MAX_CHARS: usize = 8;
pub const NUMBER_DESC_MAX_CHARS: usize = 20;
pub const ITEM_MAX_CHARS: usize = 20;
pub const CTA_MAX_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// Sections whose title contains this are exploded into one card per item.
pub const KEY_OBSERVATIONS_MARKER: &str = "主要观点";

/// Fields carried over from extraction into the final result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provenance {
    pub author: String,
    pub content: String,
    pub raw_content: String,
}

pub fn normalize_quotes(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
            c => c,
        })
        .collect()
}

/// Drops a surrounding Markdown code fence, with or without a language tag.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Strictly parses a model reply, repairing typographic quotes only when the
/// reply does not parse as it stands. The repaired text travels with the
/// error so callers can show what the model actually said.
pub fn parse_reply(raw: &str) -> Result<BentoResult> {
    let unfenced = strip_code_fence(raw);

    let (value, text) = match serde_json::from_str::<Value>(unfenced) {
        Ok(value) => (value, unfenced.to_string()),
        Err(_) => {
            let repaired = normalize_quotes(unfenced);
            let value = serde_json::from_str::<Value>(&repaired).map_err(|e| {
                error!("Model reply is still not valid JSON after repair: {}", repaired);
                Error::ModelOutputParse {
                    reason: e.to_string(),
                    raw: repaired.clone(),
                }
            })?;
            (value, repaired)
        }
    };

    if !value.is_object() {
        return Err(Error::ModelOutputParse {
            reason: "expected a JSON object".to_string(),
            raw: text,
        });
    }

    serde_json::from_value(value).map_err(|e| Error::ModelOutputParse {
        reason: e.to_string(),
        raw: text,
    })
}

fn ellipsize(text: &mut String, max_chars: usize) {
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str(ELLIPSIS);
        *text = cut;
    }
}

fn clip(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}

/// Applies the presentation length caps. Applying it twice changes nothing.
pub fn cap_fields(result: &mut BentoResult) {
    if let Some(title) = result.title.as_mut() {
        ellipsize(title, TITLE_MAX_CHARS);
    }
    if let Some(subtitle) = result.subtitle.as_mut() {
        ellipsize(subtitle, SUBTITLE_MAX_CHARS);
    }
    for number in result.core_numbers.iter_mut().flatten() {
        clip(&mut number.number, NUMBER_MAX_CHARS);
        clip(&mut number.desc, NUMBER_DESC_MAX_CHARS);
    }
    for item in result
        .sections
        .iter_mut()
        .flatten()
        .flat_map(|section| section.items.iter_mut())
    {
        ellipsize(&mut item.label, ITEM_MAX_CHARS);
        ellipsize(&mut item.value, ITEM_MAX_CHARS);
    }
    if let Some(cta) = result.cta.as_mut() {
        ellipsize(cta, CTA_MAX_CHARS);
    }
}

/// Replaces every "key observations" section with one single-item section
/// per observation, titled by its label.
pub fn split_key_observations(result: &mut BentoResult) {
    let Some(sections) = result.sections.take() else {
        return;
    };

    let sections = sections
        .into_iter()
        .flat_map(|section| {
            if section.title.contains(KEY_OBSERVATIONS_MARKER) {
                section
                    .items
                    .into_iter()
                    .map(|item| Section::new(item.label.clone(), vec![item]))
                    .collect()
            } else {
                vec![section]
            }
        })
        .collect();

    result.sections = Some(sections);
}

/// Final post-processing of a parsed reply: caps, section split, provenance
/// and an empty `meta` for the caller to fill.
pub fn finalize(mut result: BentoResult, provenance: Provenance) -> BentoResult {
    cap_fields(&mut result);
    split_key_observations(&mut result);

    result.author = Some(provenance.author);
    result.content = Some(provenance.content);
    result.raw_content = Some(provenance.raw_content);
    result.meta = Some(Map::new());
    result
}
