use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{EffectRange, Summary};

/// One line of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "effet")]
    pub effect: String,
    pub a: Option<EffectRange>,
    pub b: Option<EffectRange>,
}

/// Rows for every effect present in either summary, sorted by effect name.
/// A side is `None` when its summary is missing or lacks the effect.
pub fn compare_effects(a: Option<&Summary>, b: Option<&Summary>) -> Vec<ComparisonRow> {
    let names: BTreeSet<&String> = a
        .into_iter()
        .chain(b)
        .flat_map(|summary| summary.effects.keys())
        .collect();

    let side = |summary: Option<&Summary>, name: &str| {
        summary.and_then(|s| s.effects.get(name).copied())
    };

    names
        .into_iter()
        .map(|name| ComparisonRow {
            effect: name.clone(),
            a: side(a, name.as_str()),
            b: side(b, name.as_str()),
        })
        .collect()
}
