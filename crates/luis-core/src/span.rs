//! Entity span computation.
//!
//! A variable occurrence in raw text looks like `book a %flight%`. The output
//! text has the markers stripped, so the span has to be expressed in
//! sanitized coordinates. Marker pairs are located in the raw text directly;
//! the reference's `start_index` picks which pair the annotation refers to.
//!
//! All offsets count `char`s, not bytes.

use serde::{Deserialize, Serialize};

use crate::errors::SpanError;
use crate::project::VariableRef;
use crate::sanitize::{MARKER, sanitize};

/// Marker characters plus separator the legacy formula subtracts.
const LEGACY_NON_CONTENT: usize = 3;

/// Zero-based span in sanitized text. `end_pos` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start_pos: usize,
    pub end_pos: usize,
}

/// One `%...%` occurrence found in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkerPair {
    /// Raw-text index of the opening marker.
    open: usize,
    /// Sanitized-text index of the first enclosed character.
    content_start: usize,
    content: String,
}

impl MarkerPair {
    fn span(&self) -> EntitySpan {
        let len = self.content.chars().count();
        EntitySpan {
            start_pos: self.content_start,
            end_pos: self.content_start + len.saturating_sub(1),
        }
    }
}

/// Pair each opening marker with the next one. A trailing unmatched marker is ignored.
fn marker_pairs(raw_text: &str) -> Vec<MarkerPair> {
    marker_pairs_from(raw_text, 0)
}

/// Like [`marker_pairs`], but markers before raw index `from` never open a pair.
/// They are still stripped when counting sanitized positions.
fn marker_pairs_from(raw_text: &str, from: usize) -> Vec<MarkerPair> {
    let mut pairs = Vec::new();
    let mut open: Option<MarkerPair> = None;
    let mut sanitized_index = 0;

    for (raw_index, c) in raw_text.chars().enumerate() {
        if c == MARKER {
            if raw_index < from {
                continue;
            }
            match open.take() {
                Some(pair) => pairs.push(pair),
                None => {
                    open = Some(MarkerPair {
                        open: raw_index,
                        content_start: sanitized_index,
                        content: String::new(),
                    });
                }
            }
            continue;
        }
        if let Some(pair) = open.as_mut() {
            pair.content.push(c);
        }
        sanitized_index += 1;
    }

    pairs
}

/// Pick the pair `start` refers to among pairs enclosing `content`.
fn select<'a>(pairs: &'a [MarkerPair], content: &str, start: usize) -> Option<&'a MarkerPair> {
    let matching = || pairs.iter().filter(move |p| p.content == content);
    matching()
        .find(|p| p.open == start)
        .or_else(|| matching().find(|p| p.content_start == start))
        .or_else(|| matching().next())
}

fn parse_start(reference: &VariableRef) -> Result<usize, SpanError> {
    reference
        .start_index
        .trim()
        .parse::<usize>()
        .map_err(|source| SpanError::InvalidStartIndex {
            variable: reference.name.clone(),
            value: reference.start_index.clone(),
            source,
        })
}

/// Compute where `reference` lies in the sanitized form of `raw_text`.
///
/// Only pairs enclosing the reference's sanitized name are considered at
/// first. Among them, the pair opening at `start_index` wins, then the one
/// whose content starts at `start_index` in sanitized coordinates, then the
/// first. Without a content match, pairing is redone from raw index
/// `start_index` so a stray literal `%` earlier in the text cannot shift it.
/// If nothing matches, the legacy `length - 3` formula is applied and clamped
/// to the sanitized text.
///
/// # Errors
///
/// Returns [`SpanError::InvalidStartIndex`] if `start_index` is not a base-10
/// unsigned integer.
pub fn compute_span(reference: &VariableRef, raw_text: &str) -> Result<EntitySpan, SpanError> {
    let start = parse_start(reference)?;
    let content = sanitize(&reference.name);
    let pairs = marker_pairs(raw_text);

    if let Some(pair) = select(&pairs, &content, start) {
        return Ok(pair.span());
    }

    let repaired = marker_pairs_from(raw_text, start);
    if let Some(pair) = select(&repaired, &content, start)
        .or_else(|| repaired.iter().find(|p| p.open == start))
    {
        tracing::debug!(
            variable = %reference.name,
            start_index = start,
            "marker pair recovered by re-pairing from start index"
        );
        return Ok(pair.span());
    }

    let last = sanitize(raw_text).chars().count().saturating_sub(1);
    let legacy = legacy_from(start, reference);
    tracing::warn!(
        variable = %reference.name,
        start_index = %reference.start_index,
        "no marker pair found for variable; using legacy offset formula"
    );
    Ok(EntitySpan {
        start_pos: legacy.start_pos,
        end_pos: legacy.end_pos.min(last).max(legacy.start_pos),
    })
}

/// Fixed-length formula used by earlier exports: `end = start + len(name) - 3`.
///
/// # Errors
///
/// Returns [`SpanError::InvalidStartIndex`] if `start_index` is not a base-10
/// unsigned integer.
pub fn legacy_span(reference: &VariableRef) -> Result<EntitySpan, SpanError> {
    parse_start(reference).map(|start| legacy_from(start, reference))
}

fn legacy_from(start: usize, reference: &VariableRef) -> EntitySpan {
    let len = reference.name.chars().count();
    EntitySpan {
        start_pos: start,
        end_pos: (start + len).saturating_sub(LEGACY_NON_CONTENT),
    }
}
