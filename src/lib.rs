//! poker-category: seven-card poker hand classifier
//!
//! Goals:
//! - Deterministic classification of a 7-card hand into its best 5-card category
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a hand
//! ```
//! use poker_category::cards::{Card, Rank, Suit};
//! use poker_category::evaluator::{evaluate, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//! assert_eq!(evaluate(&cards), Category::RoyalFlush);
//! ```
//!
//! ## Collecting a hand
//! [`hand::Hand`] accumulates cards and checks for exactly seven distinct
//! cards before classifying:
//! ```
//! use poker_category::evaluator::Category;
//! use poker_category::hand::{Hand, HandError};
//!
//! let hand: Hand = "3c 3d 3h 7c 7d 7h 2s".parse().unwrap();
//! assert_eq!(hand.show_hand(), Ok(Category::FullHouse));
//!
//! let short: Hand = "3c 3d".parse().unwrap();
//! assert_eq!(short.show_hand(), Err(HandError::InvalidHandSize(2)));
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-category -- As 2s 3s 4s 5s 9d Kc
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
