#![forbid(unsafe_code)]

//! `wikichart` is the headless chart-spec formatting and localization layer
//! for wiki charts.
//!
//! It re-exports everything from `wikichart-core`: payload decoding, the
//! typed spec model, locale-aware formatters, and the assembler that turns a
//! caller-supplied spec into a fully-formatted, direction-aware rendering
//! specification.

pub use wikichart_core::*;

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde_json::Value;

/// Builds the id prefix embedded into a rendered chart's SVG node ids.
///
/// Internal SVG ids must be unique between charts on the same page to avoid
/// collisions when several charts are inlined into one document. The prefix
/// is derived from the chart definition and its tabular data, so the same
/// chart with the same data hashes to the same prefix (which in practice
/// does not cause problems).
pub fn id_prefix(definition: &Value, data: &Value) -> String {
    let mut hasher = FxHasher::default();
    definition.to_string().hash(&mut hasher);
    data.to_string().hash(&mut hasher);
    format!("wiki-chart-{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_inputs_hash_to_the_same_prefix() {
        let definition = json!({ "type": "line" });
        let data = json!({ "rows": [[1, 2]] });
        assert_eq!(
            id_prefix(&definition, &data),
            id_prefix(&definition, &data)
        );
    }

    #[test]
    fn different_data_hashes_to_a_different_prefix() {
        let definition = json!({ "type": "line" });
        let a = id_prefix(&definition, &json!({ "rows": [[1, 2]] }));
        let b = id_prefix(&definition, &json!({ "rows": [[1, 3]] }));
        assert_ne!(a, b);
    }

    #[test]
    fn prefix_is_a_conservative_id_token() {
        let prefix = id_prefix(&json!({}), &json!({}));
        assert!(prefix.starts_with("wiki-chart-"));
        assert!(
            prefix
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        );
    }
}
