use crate::cards::{Card, Suit};

/// Whether all five cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        if cards[1..].iter().all(|c| c.suit() == suit) {
            SuitInfo { is_flush: true, flush_suit: Some(suit) }
        } else {
            SuitInfo { is_flush: false, flush_suit: None }
        }
    }
}
