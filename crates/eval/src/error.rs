// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::{Card, HandCategory};

/// Errors returned by the evaluator.
///
/// All errors are caused by invalid input or by an internal defect, none
/// of them is transient and there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand does not have exactly 7 cards.
    #[error("a hand must have exactly 7 cards, got {0}")]
    InvalidHandSize(usize),
    /// A player must have exactly 2 hole cards.
    #[error("a player must have exactly 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    /// The board must have exactly 5 cards.
    #[error("the board must have exactly 5 cards, got {0}")]
    InvalidBoardSize(usize),
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A category rank outside 1..=10.
    #[error("invalid hand category rank {0}, expected 1..=10")]
    InvalidCategory(u8),
    /// A tie-break record does not belong to the hand category.
    #[error("tie-break record for {found} used as {expected}")]
    CategoryMismatchInternal {
        /// The hand category.
        expected: HandCategory,
        /// The category of the tie-break record.
        found: HandCategory,
    },
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, EvalError>;
