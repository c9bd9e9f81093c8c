// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hands and the rank and suit frequency tables the rules query.
use std::fmt;

use crate::{Card, EvalError, Rank, Result, Suit};

/// A 7 cards hand, 2 hole cards plus the 5 board cards.
///
/// The cards are validated on construction and never modified, the rules
/// work on tables and sorted copies built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 7]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 7;

    /// Creates a hand from exactly 7 distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; Self::SIZE] = cards
            .try_into()
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(EvalError::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self> {
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Rank and suit frequency tables for a hand.
///
/// The rank table is indexed by rank value 2..=14, the suit table by
/// [Suit::index]. Tables are built fresh by each rule invocation.
pub(crate) struct Frequencies<'a> {
    hand: &'a Hand,
    ranks: [u8; 15],
    suits: [u8; Suit::COUNT],
    sorted: [Rank; Hand::SIZE],
}

impl<'a> Frequencies<'a> {
    pub fn new(hand: &'a Hand) -> Self {
        let mut ranks = [0; 15];
        let mut suits = [0; Suit::COUNT];

        for card in hand.cards() {
            ranks[card.rank().value() as usize] += 1;
            suits[card.suit().index()] += 1;
        }

        let mut sorted = hand.cards().map(|c| c.rank());
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            hand,
            ranks,
            suits,
            sorted,
        }
    }

    /// How many cards of the given rank are in the hand.
    pub fn count(&self, rank: Rank) -> u8 {
        self.ranks[rank.value() as usize]
    }

    /// The highest rank whose count satisfies `accept`, ignoring the
    /// ranks in `skip`.
    pub fn highest<F>(&self, accept: F, skip: &[Rank]) -> Option<Rank>
    where
        F: Fn(u8) -> bool,
    {
        Rank::ranks()
            .rev()
            .filter(|r| !skip.contains(r))
            .find(|&r| accept(self.count(r)))
    }

    /// The N highest ranks of the cards whose rank is not in `exclude`,
    /// in descending order.
    pub fn kickers<const N: usize>(&self, exclude: &[Rank]) -> Option<[Rank; N]> {
        self.sorted
            .iter()
            .filter(|r| !exclude.contains(r))
            .take(N)
            .copied()
            .collect::<Vec<_>>()
            .try_into()
            .ok()
    }

    /// The hand ranks sorted from highest to lowest.
    pub fn sorted(&self) -> &[Rank; Hand::SIZE] {
        &self.sorted
    }

    /// The suit that has at least 5 cards, with 7 cards there can only be one.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[s.index()] >= 5)
    }

    /// The ranks of the cards of a suit, from highest to lowest.
    pub fn suited_ranks(&self, suit: Suit) -> Vec<Rank> {
        let mut ranks = self
            .hand
            .cards()
            .iter()
            .filter(|c| c.suit() == suit)
            .map(|c| c.rank())
            .collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }
}

/// Finds the high card of the longest run of consecutive ranks if the run
/// has at least 5 cards.
///
/// An ace is marked present both in slot 1 and 14 so that the wheel
/// A-2-3-4-5 is a run with high card five. When two runs have the same
/// length the first one found wins.
pub(crate) fn straight_high<I>(ranks: I) -> Option<Rank>
where
    I: IntoIterator<Item = Rank>,
{
    let mut present = [false; 15];
    for rank in ranks {
        present[rank.value() as usize] = true;
        if rank == Rank::Ace {
            present[1] = true;
        }
    }

    let mut run = 0;
    let mut longest = 0;
    let mut high = 0;
    for (idx, &is_present) in present.iter().enumerate() {
        if is_present {
            run += 1;
            if run > longest {
                longest = run;
                high = idx as u8;
            }
        } else {
            run = 0;
        }
    }

    if longest >= 5 {
        Rank::try_from(high).ok()
    } else {
        None
    }
}
