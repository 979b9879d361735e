use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Confirm that a straight and a flush are made by the same five cards.
///
/// Independent straight and flush detection can both fire on cards that do
/// not form a straight flush (for example a 9-high straight next to five
/// unrelated hearts), so the cards are re-walked in evaluator order: grouped
/// by suit, rank descending. A run grows while the next card has the same
/// suit and a rank exactly one lower, and restarts at every suit boundary.
///
/// Returns the top rank of the highest straight flush, Five for the steel
/// wheel (5-4-3-2 of one suit plus that suit's Ace).
pub fn verify(sorted: &[Card], straight: &StraightInfo, suits: &SuitInfo) -> Option<Rank> {
    // A straight flush is both a straight and a flush.
    if !straight.is_straight() || !suits.is_flush() {
        return None;
    }

    let mut prev: Option<Card> = None;
    let mut run_len = 0u8;
    let mut run_top = Rank::Two;
    let mut found = None;

    for &card in sorted {
        match prev {
            Some(p) if p.suit() == card.suit() && p.rank() == card.rank() => continue,
            Some(p) if p.suit() == card.suit() && p.rank().value() == card.rank().value() + 1 => {
                run_len += 1;
            }
            _ => {
                run_len = 1;
                run_top = card.rank();
            }
        }
        prev = Some(card);

        if run_len >= 5 {
            found = Some(run_top);
            break;
        }
        if card.rank() == Rank::Two
            && run_len >= 4
            && sorted.contains(&Card::new(Rank::Ace, card.suit()))
        {
            found = Some(Rank::Five);
        }
    }

    // The run lies in the flush suit, so it can never top that suit's anchor.
    debug_assert!(found.map_or(true, |top| Some(top) <= suits.anchor_rank));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::distribution::Distribution;

    fn check(hand: &str) -> Option<Rank> {
        let mut cards = parse_cards(hand).unwrap();
        cards.sort_by(Card::cmp_by_suit_then_rank_desc);
        let dist = Distribution::from_cards(&cards);
        let straight = StraightInfo::detect(&dist);
        let suits = SuitInfo::detect(&cards, &dist, straight.wheel);
        verify(&cards, &straight, &suits)
    }

    #[test]
    fn royal_run() {
        assert_eq!(check("Ah Kh Qh Jh Th 2c 3d"), Some(Rank::Ace));
    }

    #[test]
    fn run_below_a_higher_suited_card() {
        assert_eq!(check("9h 8h 7h 6h 5h Kh 2c"), Some(Rank::Nine));
    }

    #[test]
    fn run_inside_a_longer_offsuit_straight() {
        assert_eq!(check("9h 8h 7h 6h 5h Tc Jd"), Some(Rank::Nine));
    }

    #[test]
    fn six_suited_cards_in_a_row_report_the_top() {
        assert_eq!(check("Ts 9s 8s 7s 6s 5s 2d"), Some(Rank::Ten));
    }

    #[test]
    fn steel_wheel() {
        assert_eq!(check("As 2s 3s 4s 5s 9d Kc"), Some(Rank::Five));
    }

    #[test]
    fn suited_wheel_next_to_offsuit_six() {
        assert_eq!(check("As 2s 3s 4s 5s 6d Kc"), Some(Rank::Five));
    }

    #[test]
    fn wheel_with_offsuit_ace_is_not_a_straight_flush() {
        assert_eq!(check("Ad 2s 3s 4s 5s 9s Kc"), None);
    }

    #[test]
    fn separate_straight_and_flush() {
        // straight 9..5, flush in clubs; the 5 is a diamond
        assert_eq!(check("Ac 9c 8c 7c 6c 6d 5d"), None);
    }

    #[test]
    fn verified_top_never_exceeds_flush_anchor() {
        for hand in [
            "Ah Kh Qh Jh Th 2c 3d",
            "9h 8h 7h 6h 5h Kh 2c",
            "As 2s 3s 4s 5s Ks 9d",
            "Ts 9s 8s 7s 6s 5s 2d",
        ] {
            let mut cards = parse_cards(hand).unwrap();
            cards.sort_by(Card::cmp_by_suit_then_rank_desc);
            let dist = Distribution::from_cards(&cards);
            let straight = StraightInfo::detect(&dist);
            let suits = SuitInfo::detect(&cards, &dist, straight.wheel);
            let top = verify(&cards, &straight, &suits).unwrap();
            assert!(Some(top) <= suits.anchor_rank, "{hand}");
        }
    }

    #[test]
    fn no_flush_no_scan() {
        assert_eq!(check("9c 8d 7h 6s 5c 2d 3h"), None);
    }
}
