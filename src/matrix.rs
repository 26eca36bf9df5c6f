use crate::model::group::Roster;
use crate::model::pair::{Name, Pair, PairCounts};

/// Dense, symmetric view of historical pair counts over a roster, one row
/// and column per name in sorted order. The diagonal carries self-pair
/// counts, i.e. how often each student has been in any group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatrix {
    pub names: Vec<Name>,
    pub counts: Vec<Vec<u64>>,
}

pub fn pair_matrix(roster: &Roster, history: &PairCounts) -> PairMatrix {
    let names = roster.names().to_vec();
    let counts = names
        .iter()
        .map(|row| {
            names
                .iter()
                .map(|column| history.count(&Pair::new(row.as_str(), column.as_str())))
                .collect()
        })
        .collect();
    PairMatrix { names, counts }
}

#[cfg(test)]
mod tests {
    use super::pair_matrix;
    use crate::count::count_history;
    use crate::model::group::{Group, Grouping, Roster};
    use crate::model::pair::PairCounts;

    fn grouping(groups: &[&[&str]]) -> Grouping {
        Grouping::new(
            groups
                .iter()
                .map(|names| Group::new(names.iter().copied()).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn matrix_is_symmetric_with_self_counts_on_the_diagonal() {
        let roster = Roster::new(["A", "B"]).unwrap();
        let history = [grouping(&[&["A", "B"]]), grouping(&[&["A"]])];
        let matrix = pair_matrix(&roster, &count_history(&history));
        assert_eq!(matrix.names, ["A", "B"]);
        assert_eq!(matrix.counts, [[2, 1], [1, 1]]);
    }

    #[test]
    fn roster_order_does_not_matter() {
        let history = [grouping(&[&["A", "B"]]), grouping(&[&["A"]])];
        let counts = count_history(&history);
        let forward = pair_matrix(&Roster::new(["A", "B"]).unwrap(), &counts);
        let backward = pair_matrix(&Roster::new(["B", "A"]).unwrap(), &counts);
        assert_eq!(forward, backward);
    }

    #[test]
    fn unpaired_names_read_zero() {
        let roster = Roster::new(["A", "B"]).unwrap();
        let history = [grouping(&[&["A"]]), grouping(&[&["A"]])];
        let matrix = pair_matrix(&roster, &count_history(&history));
        assert_eq!(matrix.counts, [[2, 0], [0, 0]]);
    }

    #[test]
    fn empty_history_reads_all_zero() {
        let roster = Roster::new(["A", "B", "C"]).unwrap();
        let matrix = pair_matrix(&roster, &PairCounts::new());
        assert_eq!(matrix.counts, [[0; 3]; 3]);
    }
}
