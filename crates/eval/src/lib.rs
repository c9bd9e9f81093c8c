// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates 7 cards Texas Hold'em hands, 2 hole cards plus 5 board cards,
//! and decides the winner between two hands.
//!
//! A hand is checked against ten category rules from royal flush down to
//! high card, the first rule that accepts the hand gives its category, a
//! tie-break record with the ranks that decide between hands of the same
//! category, and a description:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = parse_cards("Ac 2d 3h 4s 5c 9d Kh").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category(), HandCategory::Straight);
//! assert_eq!(hand.tie_break(), &TieBreak::Straight { high: Rank::Five });
//! assert_eq!(hand.description(), "a straight, Ace to five");
//! ```
//!
//! Two evaluated hands are compared with [resolve]:
//!
//! ```
//! # use showdown_eval::*;
//! let a = evaluate(&parse_cards("Kh Kd Ks 8c 8d 8h 2s").unwrap()).unwrap();
//! let b = evaluate(&parse_cards("Jh Jd 9s 9c 5h 5d 2s").unwrap()).unwrap();
//! assert_eq!(resolve(&a, &b).unwrap(), Outcome::AWins);
//! assert_eq!(resolve(&a, &a).unwrap(), Outcome::Split);
//! ```
//!
//! and [Showdown] evaluates and compares two players hands on a board:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("Qh Jh Th 3s 4d").unwrap();
//! let hole_a = parse_cards("Ah Kh").unwrap();
//! let hole_b = parse_cards("2c 2d").unwrap();
//! let showdown = Showdown::new(&hole_a, &hole_b, &board).unwrap();
//! assert_eq!(showdown.summary("Alice", "Bob"), "Alice wins with a royal flush.");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::{HandCategory, TieBreak, describe};

mod error;
pub use error::{EvalError, Result};

pub mod eval;
pub use eval::{EvaluatedHand, description, evaluate};

mod hand;
pub use hand::Hand;

mod showdown;
pub use showdown::{Outcome, Showdown, resolve};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
