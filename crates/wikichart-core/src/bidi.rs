//! Bidirectional-text protection for chart titles.
//!
//! In an RTL page, a title that begins with a digit gets visually reordered
//! by the Unicode bidirectional algorithm (the number migrates to the wrong
//! side of the text run). Wrapping the whole title in an explicit embedding
//! keeps the visual order the author wrote.

use crate::spec::ChartSpec;

pub const RIGHT_TO_LEFT_EMBEDDING: char = '\u{202B}';
pub const POP_DIRECTIONAL_FORMATTING: char = '\u{202C}';

/// Rewrites digit-leading title text as `RLE + text + PDF`. No-op in LTR
/// context or without a title. Idempotent: already-embedded text is left
/// alone.
pub fn fix_bidi_title(spec: &mut ChartSpec, is_rtl: bool) {
    if !is_rtl {
        return;
    }
    let Some(title) = spec.title.as_mut() else {
        return;
    };
    if let Some(text) = title.text.as_mut() {
        embed_leading_digit(text);
    }
    if let Some(subtext) = title.subtext.as_mut() {
        embed_leading_digit(subtext);
    }
}

fn embed_leading_digit(text: &mut String) {
    if text.starts_with(RIGHT_TO_LEFT_EMBEDDING) {
        return;
    }
    if text.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        *text = format!("{RIGHT_TO_LEFT_EMBEDDING}{text}{POP_DIRECTIONAL_FORMATTING}");
    }
}
