use crate::cards::{parse_cards, Card};
use crate::evaluator::{evaluate, Category};
use std::collections::HashSet;
use std::str::FromStr;

/// Number of cards a hand must hold to be shown.
pub const HAND_SIZE: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand needs exactly 7 distinct cards, got {0}")]
    InvalidHandSize(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Cards collected for one player, shown once complete.
///
/// Cards can be added in any number of steps. Nothing is checked until
/// [`Hand::show_hand`], which requires exactly seven distinct cards.
///
/// ```
/// use poker_category::cards::{Card, Rank, Suit};
/// use poker_category::evaluator::Category;
/// use poker_category::hand::Hand;
///
/// let mut hand: Hand = "2c 2d 5h 7s 9c".parse().unwrap();
/// hand.add(Card::new(Rank::Jack, Suit::Diamonds));
/// hand.add(Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(hand.show_hand().unwrap(), Category::Pair);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(HAND_SIZE) }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
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

    /// Classify the collected cards.
    ///
    /// Fails with [`HandError::InvalidHandSize`] carrying the number of
    /// distinct cards unless the hand holds exactly seven cards, all distinct.
    pub fn show_hand(&self) -> Result<Category, HandError> {
        let distinct = self.cards.iter().copied().collect::<HashSet<Card>>().len();
        let seven: &[Card; HAND_SIZE] = match self.cards.as_slice().try_into() {
            Ok(seven) if distinct == HAND_SIZE => seven,
            _ => {
                log::debug!("rejecting hand of {} cards ({} distinct)", self.len(), distinct);
                return Err(HandError::InvalidHandSize(distinct));
            }
        };
        Ok(evaluate(seven))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Self { cards })
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self { cards: iter.into_iter().collect() }
    }
}
