//! Forms student groups of a target size while minimizing repeated
//! collaboration: every distinct partition of the roster is enumerated,
//! scored against historical pair counts, and the minimum-scoring one wins.

pub mod count;
pub mod enumerate;
pub mod matrix;
pub mod model;
pub mod score;
pub mod select;

pub use count::{count_grouping, count_history};
pub use enumerate::all_groupings;
pub use matrix::{pair_matrix, PairMatrix};
pub use model::group::{Group, Grouping, Roster};
pub use model::pair::{Name, Pair, PairCounts};
pub use model::ModelError;
pub use score::{score_group, score_grouping};
pub use select::min_scoring_grouping;

pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Count the history, enumerate every candidate grouping, and return the
/// minimum-scoring one. An empty roster comes back as the empty grouping.
pub fn plan_groups(
    roster: &Roster,
    group_size: usize,
    history: &[Grouping],
) -> Result<Grouping, ModelError> {
    let counts = count_history(history);
    let candidates = all_groupings(roster, group_size)?;
    Ok(min_scoring_grouping(&candidates, &counts)
        .cloned()
        .unwrap_or_default())
}
