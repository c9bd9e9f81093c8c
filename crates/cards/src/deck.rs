// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards for dealing, sampling and enumerating hands.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals `n` cards, returns `None` if the deck has less than `n` cards.
    pub fn deal_many(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - n;
        Some(self.cards.split_off(at))
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand, visiting the hands in
    /// lexicographic order of the cards positions in the deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Increasing deck positions of the current hand cards.
        let mut pos: [usize; 7] = std::array::from_fn(|idx| idx);
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];

        loop {
            for (card, &p) in h.iter_mut().zip(&pos[..k]) {
                *card = self.cards[p];
            }

            f(&h[..k]);

            // The rightmost position that can still move forward.
            let Some(idx) = (0..k).rev().find(|&idx| pos[idx] < n - k + idx) else {
                break;
            };

            pos[idx] += 1;
            for next in idx + 1..k {
                pos[next] = pos[next - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure with `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, samples: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        for _ in 0..samples {
            for (pos, c) in self.cards.choose_multiple(rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h[0..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
