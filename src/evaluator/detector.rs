use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};

/// One detector per hand category: a pure predicate over the shared
/// [`HandAnalysis`] plus the tiebreak encoding for its category.
///
/// Detectors are checked in strict precedence order ([`DETECTORS`]); the
/// predicates are written to be exact under that order (e.g. three of a
/// kind excludes the full house case, which has already been tried).
pub trait CategoryDetector: Sync {
    fn matches(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

/// Five consecutive ranks, all one suit. Checked first: a straight flush
/// would otherwise match both the flush and straight detectors.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_info.top_rank.expect("straight has a top rank");
        analysis.build_evaluation(Category::StraightFlush, &[top])
    }
}

/// Four cards of one rank; tiebreaks are the quad rank then the kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let quad = analysis.rank_groups.quad().expect("quad rank");
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::FourOfAKind, &[quad, kicker])
    }
}

/// Rank counts {3, 2}; tiebreaks are trips rank then pair rank.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.is_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().expect("trips rank");
        let pair = analysis.rank_groups.pairs()[0];
        analysis.build_evaluation(Category::FullHouse, &[trips, pair])
    }
}

/// All five cards of one suit; every rank is a tiebreak digit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Flush, &analysis.ranks)
    }
}

/// Five consecutive ranks, mixed suits; the top card decides ties (the
/// wheel's top card is the Five).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_info.top_rank.expect("straight has a top rank");
        analysis.build_evaluation(Category::Straight, &[top])
    }
}

/// Exactly three of one rank with two singletons.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.is_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().expect("trips rank");
        let kickers = analysis.rank_groups.kickers();
        analysis.build_evaluation(Category::ThreeOfAKind, &[trips, kickers[0], kickers[1]])
    }
}

/// Two distinct pair ranks; tiebreaks are high pair, low pair, kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pairs = analysis.rank_groups.pairs();
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::TwoPair, &[pairs[0], pairs[1], kicker])
    }
}

/// A single pair with three singletons.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1 && analysis.rank_groups.trips().is_none()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pair = analysis.rank_groups.pairs()[0];
        let kickers = analysis.rank_groups.kickers();
        analysis.build_evaluation(Category::Pair, &[pair, kickers[0], kickers[1], kickers[2]])
    }
}

/// Fallback: always matches, ranks by the five cards alone.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn matches(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard, &analysis.ranks)
    }
}

/// The fixed dispatch chain, strongest category first. [`evaluate_five`]
/// returns at the first match, which keeps the predicates simple: each
/// only has to exclude categories above it, never below.
///
/// [`evaluate_five`]: crate::evaluator::evaluate_five
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
