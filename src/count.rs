use crate::model::group::Grouping;
use crate::model::pair::PairCounts;

/// Tally one occurrence of every within-group pair across a single
/// historical grouping.
pub fn count_grouping(grouping: &Grouping) -> PairCounts {
    grouping
        .groups()
        .iter()
        .map(|group| group.pairs().collect::<PairCounts>())
        .sum()
}

/// Fold any number of historical groupings into one grand total.
pub fn count_history<'a, I>(history: I) -> PairCounts
where
    I: IntoIterator<Item = &'a Grouping>,
{
    history.into_iter().map(count_grouping).sum()
}
