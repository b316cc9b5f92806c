use crate::cards::Rank;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]. All the
/// count-based categories (quads, full house, trips, pairs, kickers) read
/// straight off this ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Group the ranks of a five-card hand by frequency.
    pub fn from_ranks(ranks: &[Rank; 5]) -> Self {
        let mut counts = [0u8; 15]; // indexed by rank value, 2..=14 used
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&r| {
                let count = counts[r.value() as usize];
                (count > 0).then_some((r, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    /// Rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// All pair ranks, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == 2).map(|(r, _)| *r).collect()
    }

    /// All singleton (kicker) ranks, descending.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == 1).map(|(r, _)| *r).collect()
    }

    /// Counts {3, 2}: trips plus a pair.
    pub fn is_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    fn rank_with_count(&self, count: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, c)| *c == count).map(|(r, _)| *r)
    }
}
