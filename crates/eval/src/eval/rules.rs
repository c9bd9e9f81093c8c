// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The hand category rules.
//!
//! Each rule inspects a 7 cards hand and either rejects it or returns the
//! tie-break record for its category. A rule assumes that all the stronger
//! rules have already rejected the hand, for example the one pair rule
//! doesn't check for two pairs.
use crate::{
    HandCategory, Rank, TieBreak,
    hand::{Frequencies, Hand, straight_high},
};

use super::EvaluatedHand;

/// A category rule.
pub struct Rule {
    category: HandCategory,
    find: fn(&Frequencies<'_>) -> Option<TieBreak>,
}

impl Rule {
    const fn new(category: HandCategory, find: fn(&Frequencies<'_>) -> Option<TieBreak>) -> Self {
        Self { category, find }
    }

    /// The category this rule accepts.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Checks if the hand belongs to this rule category.
    pub fn verify(&self, hand: &Hand) -> Option<EvaluatedHand> {
        let freqs = Frequencies::new(hand);
        (self.find)(&freqs).map(EvaluatedHand::new)
    }
}

/// The rules from the strongest to the weakest category, the high card rule
/// accepts any hand.
pub static RULES: [Rule; 10] = [
    Rule::new(HandCategory::RoyalFlush, royal_flush),
    Rule::new(HandCategory::StraightFlush, straight_flush),
    Rule::new(HandCategory::FourOfAKind, four_of_a_kind),
    Rule::new(HandCategory::FullHouse, full_house),
    Rule::new(HandCategory::Flush, flush),
    Rule::new(HandCategory::Straight, straight),
    Rule::new(HandCategory::ThreeOfAKind, three_of_a_kind),
    Rule::new(HandCategory::TwoPair, two_pair),
    Rule::new(HandCategory::OnePair, one_pair),
    Rule::new(HandCategory::HighCard, high_card),
];

const BROADWAY: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

fn royal_flush(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let suit = freqs.flush_suit()?;
    let ranks = freqs.suited_ranks(suit);
    BROADWAY
        .iter()
        .all(|r| ranks.contains(r))
        .then_some(TieBreak::RoyalFlush)
}

fn straight_flush(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let suit = freqs.flush_suit()?;
    let high = straight_high(freqs.suited_ranks(suit))?;
    Some(TieBreak::StraightFlush { high })
}

fn four_of_a_kind(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let quads = freqs.highest(|n| n == 4, &[])?;
    let [kicker] = freqs.kickers::<1>(&[quads])?;
    Some(TieBreak::FourOfAKind { quads, kicker })
}

fn full_house(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let trio = freqs.highest(|n| n >= 3, &[])?;
    // A second trio plays as the pair.
    let pair = freqs.highest(|n| n >= 2, &[trio])?;
    Some(TieBreak::FullHouse { trio, pair })
}

fn flush(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let suit = freqs.flush_suit()?;
    let ranks = freqs.suited_ranks(suit);
    let ranks = ranks.get(..5)?.try_into().ok()?;
    Some(TieBreak::Flush { ranks })
}

fn straight(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let high = straight_high(freqs.sorted().iter().copied())?;
    Some(TieBreak::Straight { high })
}

fn three_of_a_kind(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let trio = freqs.highest(|n| n == 3, &[])?;
    let kickers = freqs.kickers(&[trio])?;
    Some(TieBreak::ThreeOfAKind { trio, kickers })
}

fn two_pair(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let high = freqs.highest(|n| n == 2, &[])?;
    let low = freqs.highest(|n| n == 2, &[high])?;
    // With three pairs the lowest one can play as the kicker.
    let [kicker] = freqs.kickers::<1>(&[high, low])?;
    Some(TieBreak::TwoPair { high, low, kicker })
}

fn one_pair(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    let pair = freqs.highest(|n| n == 2, &[])?;
    let kickers = freqs.kickers(&[pair])?;
    Some(TieBreak::OnePair { pair, kickers })
}

fn high_card(freqs: &Frequencies<'_>) -> Option<TieBreak> {
    Some(high_cards(freqs))
}

/// The five highest ranks, any hand has them.
fn high_cards(freqs: &Frequencies<'_>) -> TieBreak {
    let [r0, r1, r2, r3, r4, ..] = *freqs.sorted();
    TieBreak::HighCard {
        ranks: [r0, r1, r2, r3, r4],
    }
}

/// Evaluates a hand as a high card hand.
pub(crate) fn high_card_hand(hand: &Hand) -> EvaluatedHand {
    EvaluatedHand::new(high_cards(&Frequencies::new(hand)))
}
