use tracing::debug;

use crate::model::group::Grouping;
use crate::model::pair::PairCounts;
use crate::score::score_grouping;

/// Scan candidates and keep the first one with a strictly smaller score.
/// Fed from the enumerator's ordered set, ties therefore resolve to the
/// lexicographically least canonical grouping, making the winner
/// reproducible across runs and platforms.
pub fn min_scoring_grouping<'a, I>(candidates: I, history: &PairCounts) -> Option<&'a Grouping>
where
    I: IntoIterator<Item = &'a Grouping>,
{
    let mut best: Option<(&Grouping, u64)> = None;
    for candidate in candidates {
        let score = score_grouping(candidate, history);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    if let Some((_, score)) = best {
        debug!(score, "selected minimum-scoring grouping");
    }
    best.map(|(grouping, _)| grouping)
}
