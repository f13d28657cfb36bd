use std::cmp::Ordering;

use crate::types::{AlignedPair, RankedEntry, RankedReport};

/// Ranks aligned pairs for reporting: the `window` best and worst sung pairs
/// plus the full positional listing.
///
/// Pairs whose hypothesis slot is a gap were never sung; they are trivially
/// worst and are excluded from top/bottom, but stay in `full`.
pub fn rank_pairs(pairs: &[AlignedPair], window: usize) -> RankedReport {
    let mut sung: Vec<RankedEntry> = pairs
        .iter()
        .enumerate()
        .filter(|(_, pair)| !pair.is_unsung())
        .map(|(position, pair)| RankedEntry {
            position,
            original: pair.original.clone(),
            hypothesis: pair.hypothesis.clone(),
            similarity: pair.similarity,
        })
        .collect();

    sung.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });

    let top = sung.iter().take(window).cloned().collect();
    let bottom_start = sung.len().saturating_sub(window);
    let bottom = sung[bottom_start..].to_vec();

    RankedReport {
        top,
        bottom,
        full: pairs.to_vec(),
    }
}
