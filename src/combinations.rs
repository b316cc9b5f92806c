/// Iterator over all k-element index combinations of `0..n`, in
/// lexicographic order.
///
/// Used by [`CardSet::combinations`](crate::cardset::CardSet::combinations)
/// and by the evaluator to enumerate five-card subsets (C(7,5) = 21 for a
/// full Hold'em hand). The evaluator depends only on exhaustiveness, not on
/// the order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Create an iterator over C(n, k) index combinations.
    /// Yields nothing when k > n; yields a single empty combination when k == 0.
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        if k == 0 {
            self.done = true;
            return Some(result);
        }

        // Advance to the next combination: find the rightmost index that
        // can move, bump it, and reset everything to its right.
        let mut i = k - 1;
        loop {
            if self.indices[i] < self.n - (k - i) {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn seven_choose_five_yields_21() {
        let combos: Vec<_> = Combinations::new(7, 5).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4, 5, 6]));
    }

    #[test]
    fn counts_match_binomial() {
        for (n, k) in [(5, 5), (6, 5), (7, 5), (5, 3), (4, 2), (52, 1)] {
            assert_eq!(Combinations::new(n, k).count(), binomial(n, k), "C({n},{k})");
        }
    }

    #[test]
    fn indices_are_strictly_increasing_and_in_range() {
        for combo in Combinations::new(7, 5) {
            assert!(combo.iter().all(|&i| i < 7));
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for combo in Combinations::new(7, 5) {
            assert!(seen.insert(combo.clone()), "duplicate: {combo:?}");
        }
    }

    #[test]
    fn lexicographic_order() {
        let combos: Vec<_> = Combinations::new(6, 5).collect();
        for pair in combos.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn degenerate_cases() {
        assert_eq!(Combinations::new(3, 5).count(), 0);
        assert_eq!(Combinations::new(5, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Combinations::new(5, 5).count(), 1);
    }

    #[test]
    fn iterator_exhausts() {
        let mut iter = Combinations::new(7, 5);
        for _ in 0..21 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
