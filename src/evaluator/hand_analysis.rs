use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::cardset::CardSet;
use crate::evaluator::{Category, Evaluation, Weight};

/// Pre-computed analysis of a five-card hand, built once and shared by
/// every category detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// The hand sorted rank-descending (suit breaks ties for stable output).
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = [
            sorted_cards[0].rank(),
            sorted_cards[1].rank(),
            sorted_cards[2].rank(),
            sorted_cards[3].rank(),
            sorted_cards[4].rank(),
        ];

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_ranks(&ranks),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    /// Assemble the final result for a detected category.
    pub fn build_evaluation(&self, category: Category, tiebreaks: &[Rank]) -> Evaluation {
        Evaluation {
            category,
            best_five: CardSet::from_unique(self.sorted_cards.to_vec()),
            weight: Weight::pack(category, tiebreaks),
        }
    }
}
