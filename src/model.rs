use std::collections::HashSet;

use thiserror::Error;

use self::pair::Name;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate names in group: {}", .0.join(", "))]
    DuplicateNamesInGroup(Vec<Name>),
    #[error("duplicate names across groups: {}", .0.join(", "))]
    DuplicateNamesAcrossGroups(Vec<Name>),
    #[error("duplicate names in roster: {}", .0.join(", "))]
    DuplicateNamesInRoster(Vec<Name>),
    #[error("group size must be at least 1")]
    InvalidGroupSize,
}

// Offenders come back sorted and deduplicated so error messages are stable.
fn find_duplicates<'a, I>(names: I) -> Vec<Name>
where
    I: IntoIterator<Item = &'a Name>,
{
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        if !seen.insert(name) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    duplicates.sort();
    duplicates
}

pub mod pair {
    use std::collections::BTreeMap;
    use std::iter::Sum;
    use std::ops::Add;

    pub type Name = String;

    /// Unordered pair of names. A name may pair with itself.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Pair {
        names: (Name, Name),
    }

    impl Pair {
        pub fn new(a: impl Into<Name>, b: impl Into<Name>) -> Pair {
            let (a, b) = (a.into(), b.into());
            if b < a {
                Pair { names: (b, a) }
            } else {
                Pair { names: (a, b) }
            }
        }

        pub fn names(&self) -> (&str, &str) {
            (&self.names.0, &self.names.1)
        }
    }

    /// How many times each unique pair has occurred. Missing pairs count 0.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct PairCounts {
        counts: BTreeMap<Pair, u64>,
    }

    impl PairCounts {
        pub fn new() -> PairCounts {
            PairCounts::default()
        }

        pub fn count(&self, pair: &Pair) -> u64 {
            self.counts.get(pair).copied().unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.counts.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = (&Pair, u64)> {
            self.counts.iter().map(|(pair, count)| (pair, *count))
        }
    }

    impl Add for PairCounts {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            let mut counts = self.counts;
            for (pair, count) in rhs.counts {
                *counts.entry(pair).or_insert(0) += count;
            }
            PairCounts { counts }
        }
    }

    impl Sum for PairCounts {
        fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.fold(PairCounts::new(), Add::add)
        }
    }

    impl FromIterator<Pair> for PairCounts {
        fn from_iter<I: IntoIterator<Item = Pair>>(pairs: I) -> Self {
            let mut counts = BTreeMap::new();
            for pair in pairs {
                *counts.entry(pair).or_insert(0) += 1;
            }
            PairCounts { counts }
        }
    }

    impl FromIterator<(Pair, u64)> for PairCounts {
        fn from_iter<I: IntoIterator<Item = (Pair, u64)>>(entries: I) -> Self {
            let mut counts = BTreeMap::new();
            for (pair, count) in entries {
                if count > 0 {
                    *counts.entry(pair).or_insert(0) += count;
                }
            }
            PairCounts { counts }
        }
    }
}

pub mod group {
    use itertools::Itertools;

    use super::pair::{Name, Pair};
    use super::ModelError;

    /// A single set of students, plus any empty seats left by padding.
    /// Names are kept sorted; empty seats never participate in pairing.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Group {
        names: Vec<Name>,
        empty_seats: usize,
    }

    impl Group {
        pub fn new<I>(names: I) -> Result<Group, ModelError>
        where
            I: IntoIterator,
            I::Item: Into<Name>,
        {
            Group::with_empty_seats(names, 0)
        }

        pub fn with_empty_seats<I>(names: I, empty_seats: usize) -> Result<Group, ModelError>
        where
            I: IntoIterator,
            I::Item: Into<Name>,
        {
            let mut names: Vec<Name> = names.into_iter().map(Into::into).collect();
            let duplicates = super::find_duplicates(&names);
            if !duplicates.is_empty() {
                return Err(ModelError::DuplicateNamesInGroup(duplicates));
            }
            names.sort();
            Ok(Group { names, empty_seats })
        }

        pub fn names(&self) -> &[Name] {
            &self.names
        }

        pub fn empty_seats(&self) -> usize {
            self.empty_seats
        }

        pub fn seats(&self) -> usize {
            self.names.len() + self.empty_seats
        }

        /// All unordered pairs of members in canonical order, self-pairs
        /// included: a group of j members yields j * (j + 1) / 2 pairs.
        pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
            self.names
                .iter()
                .combinations_with_replacement(2)
                .map(|pair| Pair::new(pair[0].as_str(), pair[1].as_str()))
        }
    }

    /// A set of groups that together cover a roster, each name in exactly
    /// one group. Groups are kept in canonical sorted order.
    #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Grouping {
        groups: Vec<Group>,
    }

    impl Grouping {
        pub fn new<I>(groups: I) -> Result<Grouping, ModelError>
        where
            I: IntoIterator<Item = Group>,
        {
            let mut groups: Vec<Group> = groups.into_iter().collect();
            let duplicates =
                super::find_duplicates(groups.iter().flat_map(|group| group.names()));
            if !duplicates.is_empty() {
                return Err(ModelError::DuplicateNamesAcrossGroups(duplicates));
            }
            groups.sort();
            Ok(Grouping { groups })
        }

        pub fn groups(&self) -> &[Group] {
            &self.groups
        }

        pub fn len(&self) -> usize {
            self.groups.len()
        }

        pub fn is_empty(&self) -> bool {
            self.groups.is_empty()
        }

        pub fn names(&self) -> impl Iterator<Item = &Name> {
            self.groups.iter().flat_map(|group| group.names())
        }
    }

    /// All students under consideration for one run, duplicate-free.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Roster {
        names: Vec<Name>,
    }

    impl Roster {
        pub fn new<I>(names: I) -> Result<Roster, ModelError>
        where
            I: IntoIterator,
            I::Item: Into<Name>,
        {
            let mut names: Vec<Name> = names.into_iter().map(Into::into).collect();
            let duplicates = super::find_duplicates(&names);
            if !duplicates.is_empty() {
                return Err(ModelError::DuplicateNamesInRoster(duplicates));
            }
            names.sort();
            Ok(Roster { names })
        }

        pub fn names(&self) -> &[Name] {
            &self.names
        }

        pub fn len(&self) -> usize {
            self.names.len()
        }

        pub fn is_empty(&self) -> bool {
            self.names.is_empty()
        }
    }
}
