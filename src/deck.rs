use crate::cards::Card;
use crate::cardset::CardSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A dealable 52-card deck.
///
/// The dealer owns shuffling and draw policy; the evaluator assumes
/// whatever it is handed was already drawn and distinct. Cards dealt from
/// one deck are unique by construction, so [`Deck::deal`] builds
/// [`CardSet`]s without re-validation.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full unshuffled deck.
    ///
    /// ```
    /// use holdem_eval::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: CardSet::standard_deck().as_slice().to_vec() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle with a seeded RNG for reproducible deals.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle with a caller-supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards from the top of the deck as a [`CardSet`].
    /// Fewer than `n` cards come back when the deck runs short.
    pub fn deal(&mut self, n: usize) -> CardSet {
        let take = n.min(self.cards.len());
        let dealt = self.cards.split_off(self.cards.len() - take);
        CardSet::from_unique(dealt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_cards() {
        assert_eq!(Deck::standard().len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_produces_distinct_cards_and_shrinks_deck() {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(7);
        let hole = deck.deal(2);
        let board = deck.deal(5);
        assert_eq!(hole.len(), 2);
        assert_eq!(board.len(), 5);
        assert_eq!(deck.len(), 45);

        let all: HashSet<Card> = hole.iter().chain(board.iter()).copied().collect();
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn deal_past_empty_returns_what_remains() {
        let mut deck = Deck::standard();
        let first = deck.deal(50);
        assert_eq!(first.len(), 50);
        let rest = deck.deal(5);
        assert_eq!(rest.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }
}
