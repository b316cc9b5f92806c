//! holdem-eval: Texas Hold'em hand evaluation library
//!
//! Goals:
//! - Deterministic best-five selection from 5 to 7 cards, with a totally
//!   ordered weight for showdown comparison
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Evaluation is a pure function of a card set: no shared state, no I/O,
//! safe to call concurrently from any number of threads.
//!
//! ## Quick start: analyze a seven-card hand
//! ```
//! use holdem_eval::cardset::CardSet;
//! use holdem_eval::evaluator::{analyze, Category};
//!
//! // Hole cards AhKh on a QhJhTh2c3c board.
//! let cards: CardSet = "AhKhQhJhTh2c3c".parse().unwrap();
//! let eval = analyze(&cards).unwrap();
//! assert_eq!(eval.category, Category::StraightFlush);
//! assert_eq!(eval.best_five.to_string(), "AhKhQhJhTh");
//! ```

pub mod cards;
pub mod cardset;
pub mod combinations;
pub mod deck;
pub mod evaluator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
