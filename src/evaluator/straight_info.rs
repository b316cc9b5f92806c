use crate::cards::Rank;

/// Whether five ranks form a straight, and the run's top rank.
///
/// The wheel (A-2-3-4-5) counts as a straight whose top rank is Five, so
/// it compares below every other straight and never outranks 2-3-4-5-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut vals: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
        vals.sort_unstable();
        vals.dedup();

        if vals.len() != 5 {
            // Any repeated rank rules out a straight.
            return StraightInfo { is_straight: false, top_rank: None };
        }

        if vals.windows(2).all(|w| w[1] == w[0] + 1) {
            return StraightInfo { is_straight: true, top_rank: Rank::from_value(vals[4]) };
        }

        // Wheel: Ace counting as 1 below the 2.
        if vals == [2, 3, 4, 5, 14] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        StraightInfo { is_straight: false, top_rank: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_high_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_tops_at_five() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn six_high_straight() {
        let info = StraightInfo::detect(&[Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn gap_is_not_a_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn paired_ranks_are_not_a_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!info.is_straight);
    }

    #[test]
    fn ace_around_the_corner_is_not_a_straight() {
        // Q-K-A-2-3 does not wrap.
        let info = StraightInfo::detect(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three]);
        assert!(!info.is_straight);
    }

    #[test]
    fn input_order_is_irrelevant() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
