pub mod detector;
pub mod hand_analysis;
pub mod rank_groups;
pub mod straight_info;
pub mod suit_info;

use crate::cards::{Card, Rank};
use crate::cardset::CardSet;
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest. A royal flush is an
/// ace-high [`Category::StraightFlush`], not a distinct variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Totally ordered hand strength. Greater weight wins; exact equality
/// means a tie (split pot).
///
/// Positional encoding, most significant first: the category ordinal,
/// then five 4-bit tiebreak digits holding rank values 2..=14 in
/// (primary group, secondary group, kickers) order. Any hand of a higher
/// category therefore outweighs any hand of a lower one regardless of
/// kickers, and within a category comparison is lexicographic over the
/// rank digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
    const RANK_BITS: u32 = 4;

    /// Pack a category and its tiebreak ranks (most significant first).
    /// Unused trailing digits are zero, which never reorders hands within
    /// a category: two equal-length digit sequences pad identically.
    pub fn pack(category: Category, tiebreaks: &[Rank]) -> Self {
        debug_assert!(tiebreaks.len() <= 5);
        let mut v = category.ordinal() as u32;
        for i in 0..5 {
            v <<= Self::RANK_BITS;
            if let Some(r) = tiebreaks.get(i) {
                v |= r.value() as u32;
            }
        }
        Weight(v)
    }

    /// The packed integer, for callers that want to store or transmit it.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The category digit encoded in this weight.
    pub const fn category_ordinal(self) -> u8 {
        (self.0 >> (5 * Self::RANK_BITS)) as u8
    }
}

/// Result of evaluating a hand: the category, the five cards chosen as
/// optimal (rank-descending), and the comparable weight.
///
/// Ordering and equality are decided by `weight` alone.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: CardSet,
    weight: Weight,
}

impl Evaluation {
    pub const fn weight(&self) -> Weight {
        self.weight
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for Evaluation {}

/// Caller-contract violations: the evaluator was handed the wrong number
/// of cards. Never degraded into a partial result.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to evaluate: got {0}, need at least 5")]
    NotEnoughCards(usize),
    #[error("too many cards to evaluate: got {0}, at most 7 supported")]
    TooManyCards(usize),
}

/// Classify and rank the best five-card hand obtainable from 5 to 7
/// distinct cards (2 hole + up to 5 board).
///
/// With exactly 5 cards the hand is evaluated directly; otherwise every
/// five-card subset is evaluated and the maximal weight kept. Ties between
/// subsets keep the first found; equal weight implies an identical rank
/// profile, so any tied subset is a valid representative.
///
/// ```
/// use holdem_eval::cardset::CardSet;
/// use holdem_eval::evaluator::{analyze, Category};
///
/// let cards: CardSet = "AsAdAhTsTd".parse().unwrap();
/// let eval = analyze(&cards).unwrap();
/// assert_eq!(eval.category, Category::FullHouse);
/// ```
pub fn analyze(cards: &CardSet) -> Result<Evaluation, EvalError> {
    let n = cards.len();
    if n < 5 {
        return Err(EvalError::NotEnoughCards(n));
    }
    if n > 7 {
        return Err(EvalError::TooManyCards(n));
    }

    let mut best: Option<Evaluation> = None;
    for subset in cards.combinations(5) {
        let hand = [
            subset.as_slice()[0],
            subset.as_slice()[1],
            subset.as_slice()[2],
            subset.as_slice()[3],
            subset.as_slice()[4],
        ];
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    // n >= 5 guarantees at least one subset.
    Ok(best.expect("at least one five-card subset"))
}

/// Evaluate exactly five cards: detect the category and encode tiebreaks.
///
/// Detectors run in fixed precedence order (Straight Flush first, High
/// Card as the always-matching fallback) and the first match wins, so a
/// full house is never reported as three of a kind.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    for detector in DETECTORS.iter() {
        if detector.matches(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    unreachable!("HighCard detector always matches")
}

/// Compare two hands (5 to 7 cards each) by their best-five weights.
///
/// ```
/// use holdem_eval::cardset::CardSet;
/// use holdem_eval::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let aces: CardSet = "AsAhQcJd9h3s2c".parse().unwrap();
/// let kings: CardSet = "KsKhQcJd9h3s2c".parse().unwrap();
/// assert_eq!(compare(&aces, &kings).unwrap(), Ordering::Greater);
/// ```
pub fn compare(a: &CardSet, b: &CardSet) -> Result<Ordering, EvalError> {
    let ea = analyze(a)?;
    let eb = analyze(b)?;
    Ok(ea.cmp(&eb))
}
