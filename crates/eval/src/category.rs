// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the per category tie-break records.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{EvalError, Rank, Result};

/// A poker hand category, from the weakest to the strongest.
///
/// The discriminant is the category rank, 1 for a high card up to 10 for a
/// royal flush. Serialized as the rank number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HandCategory {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category rank, 1 to 10.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for HandCategory {
    type Error = EvalError;

    fn try_from(rank: u8) -> Result<Self> {
        HandCategory::categories()
            .find(|c| c.rank() == rank)
            .ok_or(EvalError::InvalidCategory(rank))
    }
}

impl From<HandCategory> for u8 {
    fn from(category: HandCategory) -> Self {
        category.rank()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The ranks that break ties between two hands of the same category.
///
/// Fields are listed from the highest priority to the lowest, kickers are
/// in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// All royal flushes tie.
    RoyalFlush,
    /// Straight flush high card, five for a steel wheel.
    StraightFlush {
        /// The run high card.
        high: Rank,
    },
    /// Four of a kind.
    FourOfAKind {
        /// The quads rank.
        quads: Rank,
        /// The highest of the other 3 cards.
        kicker: Rank,
    },
    /// Full house.
    FullHouse {
        /// The trio rank.
        trio: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// Flush, the five highest ranks of the suit.
    Flush {
        /// The flush ranks.
        ranks: [Rank; 5],
    },
    /// Straight high card, five for a wheel.
    Straight {
        /// The run high card.
        high: Rank,
    },
    /// Three of a kind.
    ThreeOfAKind {
        /// The trio rank.
        trio: Rank,
        /// The two highest other ranks.
        kickers: [Rank; 2],
    },
    /// Two pair.
    TwoPair {
        /// The higher pair rank.
        high: Rank,
        /// The lower pair rank.
        low: Rank,
        /// The highest rank outside the two pairs.
        kicker: Rank,
    },
    /// One pair.
    OnePair {
        /// The pair rank.
        pair: Rank,
        /// The three highest other ranks.
        kickers: [Rank; 3],
    },
    /// High card, the five highest ranks.
    HighCard {
        /// The high card ranks.
        ranks: [Rank; 5],
    },
}

impl TieBreak {
    /// The category this record belongs to.
    pub fn category(&self) -> HandCategory {
        match self {
            TieBreak::RoyalFlush => HandCategory::RoyalFlush,
            TieBreak::StraightFlush { .. } => HandCategory::StraightFlush,
            TieBreak::FourOfAKind { .. } => HandCategory::FourOfAKind,
            TieBreak::FullHouse { .. } => HandCategory::FullHouse,
            TieBreak::Flush { .. } => HandCategory::Flush,
            TieBreak::Straight { .. } => HandCategory::Straight,
            TieBreak::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            TieBreak::TwoPair { .. } => HandCategory::TwoPair,
            TieBreak::OnePair { .. } => HandCategory::OnePair,
            TieBreak::HighCard { .. } => HandCategory::HighCard,
        }
    }

    /// The record fields as rank values in priority order, unused fields
    /// are zero so that keys of the same category compare lexicographically.
    pub fn key(&self) -> [u8; 5] {
        let mut key = [0; 5];
        let fields = match *self {
            TieBreak::RoyalFlush => vec![],
            TieBreak::StraightFlush { high } | TieBreak::Straight { high } => vec![high],
            TieBreak::FourOfAKind { quads, kicker } => vec![quads, kicker],
            TieBreak::FullHouse { trio, pair } => vec![trio, pair],
            TieBreak::Flush { ranks } | TieBreak::HighCard { ranks } => ranks.to_vec(),
            TieBreak::ThreeOfAKind { trio, kickers: [k1, k2] } => vec![trio, k1, k2],
            TieBreak::TwoPair { high, low, kicker } => vec![high, low, kicker],
            TieBreak::OnePair {
                pair,
                kickers: [k1, k2, k3],
            } => vec![pair, k1, k2, k3],
        };

        for (slot, rank) in key.iter_mut().zip(fields) {
            *slot = rank.value();
        }

        key
    }

    /// Compares two records of the same category.
    ///
    /// Returns [EvalError::CategoryMismatchInternal] if `other` belongs to
    /// a different category.
    pub fn compare(&self, other: &TieBreak) -> Result<Ordering> {
        if self.category() != other.category() {
            return Err(EvalError::CategoryMismatchInternal {
                expected: self.category(),
                found: other.category(),
            });
        }

        Ok(self.key().cmp(&other.key()))
    }
}

/// Writes the hand description, like "a full house, Kings full of sixes".
impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TieBreak::RoyalFlush => write!(f, "a royal flush"),
            TieBreak::StraightFlush { high } => {
                write!(f, "a straight flush, {} high", rank_name(high.value()))
            }
            TieBreak::FourOfAKind { quads, .. } => {
                write!(f, "four of a kind, {}", plural(quads))
            }
            TieBreak::FullHouse { trio, pair } => {
                write!(f, "a full house, {} full of {}", plural(trio), plural(pair))
            }
            TieBreak::Flush { ranks } => {
                write!(f, "a flush, {} high", rank_name(ranks[0].value()))
            }
            TieBreak::Straight { high } => {
                let high = high.value();
                write!(
                    f,
                    "a straight, {} to {}",
                    rank_name(high.saturating_sub(4)),
                    rank_name(high)
                )
            }
            TieBreak::ThreeOfAKind { trio, .. } => {
                write!(f, "three of a kind, {}", plural(trio))
            }
            TieBreak::TwoPair { high, low, .. } => {
                write!(f, "two pair, {} and {}", plural(high), plural(low))
            }
            TieBreak::OnePair { pair, .. } => write!(f, "a pair of {}", plural(pair)),
            TieBreak::HighCard { ranks } => {
                write!(f, "high card {}", rank_name(ranks[0].value()))
            }
        }
    }
}

/// Returns the name of a rank value, 1 is the ace playing low.
fn rank_name(value: u8) -> &'static str {
    match value {
        1 | 14 => "Ace",
        2 => "deuce",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "?",
    }
}

fn plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "sixes".to_string(),
        _ => format!("{}s", rank_name(rank.value())),
    }
}

/// Describes a tie-break record as a hand of the given category rank.
///
/// Fails with [EvalError::InvalidCategory] if the rank is not in 1..=10 and
/// with [EvalError::CategoryMismatchInternal] if the record belongs to
/// another category.
pub fn describe(category_rank: u8, tie_break: &TieBreak) -> Result<String> {
    let category = HandCategory::try_from(category_rank)?;
    if category != tie_break.category() {
        return Err(EvalError::CategoryMismatchInternal {
            expected: category,
            found: tie_break.category(),
        });
    }

    Ok(tie_break.to_string())
}
