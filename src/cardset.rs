use crate::cards::{Card, CardParseError, Rank, Suit};
use crate::combinations::Combinations;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Invalid card-set construction: a repeated (rank, suit) pair, or
/// malformed card text.
///
/// A duplicate indicates a bug in the caller (dealing the same card twice)
/// or corrupted input; it is surfaced, never silently dropped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardSetError {
    #[error("duplicate card: {0}")]
    Duplicate(Card),
    #[error(transparent)]
    Parse(#[from] CardParseError),
}

/// An ordered sequence of unique cards.
///
/// Parsed from compact two-characters-per-card text, printed back the same
/// way (exact round trip, order preserved), and never mutated by the
/// evaluator.
///
/// ```
/// use holdem_eval::cardset::CardSet;
///
/// let cards: CardSet = "AsAdAhTsTd".parse().unwrap();
/// assert_eq!(cards.len(), 5);
/// assert_eq!(cards.to_string(), "AsAdAhTsTd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Build a set from cards, rejecting any repeated (rank, suit) pair.
    /// Input order is preserved.
    pub fn try_new<I>(cards: I) -> Result<Self, CardSetError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: Vec<Card> = cards.into_iter().collect();
        let mut seen = HashSet::with_capacity(cards.len());
        for &card in &cards {
            if !seen.insert(card) {
                return Err(CardSetError::Duplicate(card));
            }
        }
        Ok(Self { cards })
    }

    /// The full 52-card deck: every distinct (rank, suit) pair, suit-major order.
    pub fn standard_deck() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    // Uniqueness already guaranteed by the caller (subset of an existing set).
    pub(crate) fn from_unique(cards: Vec<Card>) -> Self {
        debug_assert!(
            cards.iter().collect::<HashSet<_>>().len() == cards.len(),
            "from_unique given duplicate cards"
        );
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Every k-card subset of this set, as new sets. Exhaustive; the
    /// subset order is stable (lexicographic by index) but callers should
    /// not depend on it.
    ///
    /// ```
    /// use holdem_eval::cardset::CardSet;
    ///
    /// let cards: CardSet = "AsKdQh2c3c4c5s".parse().unwrap();
    /// assert_eq!(cards.combinations(5).count(), 21);
    /// ```
    pub fn combinations(&self, k: usize) -> impl Iterator<Item = CardSet> + '_ {
        Combinations::new(self.cards.len(), k)
            .map(|indices| Self::from_unique(indices.iter().map(|&i| self.cards[i]).collect()))
    }

    /// Clone out the cards at the given indices as a new set, leaving this
    /// set untouched. Returns `None` if any index is out of bounds or
    /// repeated. Used to materialize a detected run (e.g. the five flush
    /// cards out of seven).
    pub fn subsequence(&self, indices: &[usize]) -> Option<CardSet> {
        let mut seen = HashSet::with_capacity(indices.len());
        let mut cards = Vec::with_capacity(indices.len());
        for &i in indices {
            if i >= self.cards.len() || !seen.insert(i) {
                return None;
            }
            cards.push(self.cards[i]);
        }
        Some(Self::from_unique(cards))
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for CardSet {
    type Err = CardSetError;

    /// Parse compact card text in two-character chunks (`"AhKd2c"`).
    /// Odd-length input is a parse error; a repeated card is a duplicate error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(CardParseError::InvalidToken(s.to_string()).into());
        }
        let cards = chars
            .chunks_exact(2)
            .map(|pair| {
                let rank = Rank::try_from(pair[0])?;
                let suit = Suit::try_from(pair[1])?;
                Ok(Card::new(rank, suit))
            })
            .collect::<Result<Vec<Card>, CardParseError>>()?;
        Self::try_new(cards)
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order_and_round_trips() {
        let cs: CardSet = "JdKsQsTs9s".parse().unwrap();
        assert_eq!(cs.len(), 5);
        assert_eq!(cs.get(0).unwrap().to_string(), "Jd");
        assert_eq!(cs.to_string(), "JdKsQsTs9s");
        assert_eq!(cs.to_string().parse::<CardSet>().unwrap(), cs);
    }

    #[test]
    fn parse_empty_is_empty_set() {
        let cs: CardSet = "".parse().unwrap();
        assert!(cs.is_empty());
    }

    #[test]
    fn parse_rejects_odd_length() {
        assert!(matches!("AsK".parse::<CardSet>(), Err(CardSetError::Parse(_))));
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert!(matches!("Zz".parse::<CardSet>(), Err(CardSetError::Parse(_))));
        assert!(matches!("AsXx".parse::<CardSet>(), Err(CardSetError::Parse(_))));
    }

    #[test]
    fn parse_rejects_duplicates() {
        let err = "AsKdAs".parse::<CardSet>().unwrap_err();
        assert!(matches!(err, CardSetError::Duplicate(c) if c.to_string() == "As"));
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let a = "As".parse::<Card>().unwrap();
        assert!(matches!(CardSet::try_new([a, a]), Err(CardSetError::Duplicate(_))));
    }

    #[test]
    fn standard_deck_is_52_distinct_cards() {
        let deck = CardSet::standard_deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn combinations_are_exhaustive() {
        let cs: CardSet = "As2c3c4c5c6c7c".parse().unwrap();
        let combos: Vec<CardSet> = cs.combinations(5).collect();
        assert_eq!(combos.len(), 21);
        for combo in &combos {
            assert_eq!(combo.len(), 5);
            assert!(combo.iter().all(|c| cs.contains(*c)));
        }
        let unique: HashSet<String> = combos.iter().map(|c| c.to_string()).collect();
        assert_eq!(unique.len(), 21);
    }

    #[test]
    fn subsequence_extracts_without_mutation() {
        let cs: CardSet = "AhKhQhJhTh2c3c".parse().unwrap();
        let five = cs.subsequence(&[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(five.to_string(), "AhKhQhJhTh");
        assert_eq!(cs.len(), 7);
    }

    #[test]
    fn subsequence_rejects_bad_indices() {
        let cs: CardSet = "AhKh".parse().unwrap();
        assert!(cs.subsequence(&[0, 2]).is_none());
        assert!(cs.subsequence(&[0, 0]).is_none());
    }
}
