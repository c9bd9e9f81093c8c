// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluation pipeline.
//!
//! A 7 cards hand is checked against the category [rules](RULES) from the
//! strongest to the weakest, the first rule that accepts the hand gives its
//! category and tie-break record. Since a stronger rule is always checked
//! first exactly one category is reported for any hand.
use log::trace;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, Hand, HandCategory, Result, TieBreak, describe};

mod rules;
pub use rules::{RULES, Rule};
use rules::high_card_hand;

/// The result of evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    tie_break: TieBreak,
    description: String,
}

impl EvaluatedHand {
    fn new(tie_break: TieBreak) -> Self {
        Self {
            category: tie_break.category(),
            description: tie_break.to_string(),
            tie_break,
        }
    }

    /// Rebuilds an evaluated hand from a category rank and a tie-break record.
    ///
    /// Fails if the rank is not a valid category or if the record belongs to
    /// another category.
    pub fn from_parts(category_rank: u8, tie_break: TieBreak) -> Result<Self> {
        let description = describe(category_rank, &tie_break)?;
        Ok(Self {
            category: tie_break.category(),
            tie_break,
            description,
        })
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand category rank, 1 for high card up to 10 for royal flush.
    pub fn category_rank(&self) -> u8 {
        self.category.rank()
    }

    /// The record that breaks ties within the category.
    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }

    /// A human readable description like "a straight, Ace to five".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compares the strength of two hands.
    ///
    /// Hands of different categories are ordered by category, hands of the
    /// same category by their tie-break records.
    pub fn cmp_strength(&self, other: &EvaluatedHand) -> Result<Ordering> {
        match self.category.cmp(&other.category) {
            Ordering::Equal => {
                // Records that don't match their category come from a
                // corrupted hand.
                for hand in [self, other] {
                    if hand.tie_break.category() != hand.category {
                        return Err(EvalError::CategoryMismatchInternal {
                            expected: hand.category,
                            found: hand.tie_break.category(),
                        });
                    }
                }

                self.tie_break.compare(&other.tie_break)
            }
            ord => Ok(ord),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Hand {
    /// Evaluates this hand.
    pub fn evaluate(&self) -> EvaluatedHand {
        let eh = RULES
            .iter()
            .find_map(|rule| rule.verify(self))
            .unwrap_or_else(|| high_card_hand(self));

        trace!("{self}: {} ({})", eh.category, eh.description);
        eh
    }
}

/// Evaluates a 7 cards hand.
///
/// Fails with [EvalError::InvalidHandSize] if there are not exactly 7 cards
/// and with [EvalError::DuplicateCard] if a card is repeated.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand> {
    Hand::new(cards).map(|hand| hand.evaluate())
}

/// Returns the description of an evaluated hand.
///
/// The description is rebuilt from the hand category and tie-break record,
/// this fails if the two don't agree.
pub fn description(evaluated: &EvaluatedHand) -> Result<String> {
    describe(evaluated.category_rank(), evaluated.tie_break())
}
