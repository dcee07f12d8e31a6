//! Greedy pairing of lines inside a replace run.

use super::similarity::similarity_ratio;
use crate::model::{DiffItem, TextLine};

/// Pair old and new lines of one replace run.
///
/// Each old line, in order, takes the most similar new line not yet taken
/// (earliest on ties). A pairing at or above `threshold` becomes
/// `modified`, otherwise the old line is `removed`. New lines never taken
/// follow as `added`, in their own order, after all old-driven items.
///
/// This is a greedy, order-dependent heuristic and intentionally not a
/// minimum-cost assignment.
pub fn pair_replaced_lines(old: &[TextLine], new: &[TextLine], threshold: f64) -> Vec<DiffItem> {
    let mut consumed = vec![false; new.len()];
    let mut diffs = Vec::with_capacity(old.len() + new.len());

    for old_line in old {
        let mut best_index = None;
        let mut best_similarity = 0.0;

        for (j, new_line) in new.iter().enumerate() {
            if consumed[j] {
                continue;
            }
            let similarity = similarity_ratio(&old_line.text, &new_line.text);
            if similarity > best_similarity {
                best_similarity = similarity;
                best_index = Some(j);
            }
        }

        match best_index {
            Some(j) if best_similarity >= threshold => {
                log::trace!(
                    "Paired {:?} -> {:?} (similarity {:.3})",
                    old_line.text,
                    new[j].text,
                    best_similarity
                );
                consumed[j] = true;
                diffs.push(DiffItem::modified(old_line, &new[j]));
            }
            _ => diffs.push(DiffItem::removed(old_line)),
        }
    }

    diffs.extend(
        new.iter()
            .zip(&consumed)
            .filter(|(_, taken)| !**taken)
            .map(|(line, _)| DiffItem::added(line)),
    );

    diffs
}
