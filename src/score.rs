use crate::model::group::{Group, Grouping};
use crate::model::pair::PairCounts;

/// Sum of historical counts over the group's pairs, squared. Squaring
/// penalizes a group that concentrates many repeats harder than groups
/// that spread the same repeats around.
pub fn score_group(group: &Group, history: &PairCounts) -> u64 {
    let repeats: u64 = group.pairs().map(|pair| history.count(&pair)).sum();
    repeats * repeats
}

pub fn score_grouping(grouping: &Grouping, history: &PairCounts) -> u64 {
    grouping
        .groups()
        .iter()
        .map(|group| score_group(group, history))
        .sum()
}
