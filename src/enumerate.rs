use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::debug;

use crate::model::group::{Group, Grouping, Roster};
use crate::model::ModelError;

/// Every distinct way to split the roster into groups of `group_size`, the
/// last group padded with empty seats when the roster does not divide
/// evenly. Exhaustive over all permutations, so only suitable for
/// classroom-sized rosters.
pub fn all_groupings(
    roster: &Roster,
    group_size: usize,
) -> Result<BTreeSet<Grouping>, ModelError> {
    if group_size == 0 {
        return Err(ModelError::InvalidGroupSize);
    }
    let mut groupings = BTreeSet::new();
    for ordering in roster.names().iter().permutations(roster.len()) {
        let groups = ordering
            .chunks(group_size)
            .map(|chunk| {
                Group::with_empty_seats(
                    chunk.iter().map(|name| name.as_str()),
                    group_size - chunk.len(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        groupings.insert(Grouping::new(groups)?);
    }
    debug!(
        roster_size = roster.len(),
        group_size,
        candidates = groupings.len(),
        "enumerated candidate groupings"
    );
    Ok(groupings)
}
