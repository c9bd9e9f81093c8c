// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two players showdown resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Card, EvalError, EvaluatedHand, Hand, Result};

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand wins.
    AWins,
    /// The second hand wins.
    BWins,
    /// The hands have the same strength.
    Split,
}

/// Decides the winner between two evaluated hands.
///
/// The higher category wins, hands of the same category are compared by
/// their tie-break records field by field, if all fields are equal the pot
/// is split.
pub fn resolve(a: &EvaluatedHand, b: &EvaluatedHand) -> Result<Outcome> {
    let outcome = match a.cmp_strength(b)? {
        Ordering::Greater => Outcome::AWins,
        Ordering::Less => Outcome::BWins,
        Ordering::Equal => Outcome::Split,
    };

    debug!("{a} vs {b}: {outcome:?}");
    Ok(outcome)
}

/// A showdown between two players sharing the same board.
#[derive(Debug, Clone)]
pub struct Showdown {
    hand_a: EvaluatedHand,
    hand_b: EvaluatedHand,
    outcome: Outcome,
}

impl Showdown {
    /// The number of board cards.
    pub const BOARD_SIZE: usize = 5;
    /// The number of hole cards per player.
    pub const HOLE_SIZE: usize = 2;

    /// Evaluates and compares the hands of two players.
    ///
    /// Each player must have 2 hole cards, the board 5 cards, and no card can
    /// appear twice.
    pub fn new(hole_a: &[Card], hole_b: &[Card], board: &[Card]) -> Result<Self> {
        for hole in [hole_a, hole_b] {
            if hole.len() != Self::HOLE_SIZE {
                return Err(EvalError::InvalidHoleCards(hole.len()));
            }
        }

        if board.len() != Self::BOARD_SIZE {
            return Err(EvalError::InvalidBoardSize(board.len()));
        }

        if let Some(card) = hole_a.iter().find(|c| hole_b.contains(c)) {
            return Err(EvalError::DuplicateCard(*card));
        }

        let eval_player = |hole: &[Card]| -> Result<EvaluatedHand> {
            let cards = [hole, board].concat();
            Ok(Hand::new(&cards)?.evaluate())
        };

        let hand_a = eval_player(hole_a)?;
        let hand_b = eval_player(hole_b)?;
        let outcome = resolve(&hand_a, &hand_b)?;

        Ok(Self {
            hand_a,
            hand_b,
            outcome,
        })
    }

    /// The first player hand.
    pub fn hand_a(&self) -> &EvaluatedHand {
        &self.hand_a
    }

    /// The second player hand.
    pub fn hand_b(&self) -> &EvaluatedHand {
        &self.hand_b
    }

    /// Who won the showdown.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// A line announcing the result with the players names.
    pub fn summary(&self, name_a: &str, name_b: &str) -> String {
        match self.outcome {
            Outcome::AWins => format!("{name_a} wins with {}.", self.hand_a),
            Outcome::BWins => format!("{name_b} wins with {}.", self.hand_b),
            Outcome::Split => {
                format!("{name_a} and {name_b} split, both have {}.", self.hand_a)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandCategory, Rank, TieBreak, evaluate, parse_cards};

    fn eval(s: &str) -> EvaluatedHand {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn higher_category_wins() {
        let flush = eval("9h 4h 2h 8d Kh 2c Jh");
        let straight = eval("9h Tc Js Qd Kh 2c 3d");

        assert_eq!(resolve(&flush, &straight), Ok(Outcome::AWins));
        assert_eq!(resolve(&straight, &flush), Ok(Outcome::BWins));
    }

    #[test]
    fn kickers_break_ties() {
        let a = eval("Qh Qd 9s 8c 5h 4d As");
        let b = eval("Qc Qs 9h 8d 5c 4s Kh");
        assert_eq!(resolve(&a, &b), Ok(Outcome::AWins));
        assert_eq!(resolve(&b, &a), Ok(Outcome::BWins));

        // Same top five, the unused cards don't count.
        let a = eval("Ah Kd 9s 8c 5h 3d 2s");
        let b = eval("As Kc 9h 8d 5c 4s 3h");
        assert_eq!(resolve(&a, &b), Ok(Outcome::Split));
    }

    #[test]
    fn last_kicker_decides() {
        let cases = [
            // Flushes A-K-9-7-4 and A-K-9-7-3.
            ("Ah Kh 9h 7h 4h 2c 3d", "Ah Kh 9h 7h 3h 2c 4d", HandCategory::Flush),
            // High cards A-Q-9-7-5 and A-Q-9-7-4.
            ("As Qd 9c 7h 5s 3d 2c", "Ah Qc 9d 7s 4h 3c 2d", HandCategory::HighCard),
            // Pair of queens with 9-8-5 and 9-8-4 kickers.
            ("Qh Qd 9s 8c 5h 3d 2s", "Qc Qs 9h 8d 4c 3s 2h", HandCategory::OnePair),
        ];

        for (hand_a, hand_b, category) in cases {
            let a = eval(hand_a);
            let b = eval(hand_b);
            assert_eq!(a.category(), category);
            assert_eq!(b.category(), category);

            let (key_a, key_b) = (a.tie_break().key(), b.tie_break().key());
            assert_eq!(key_a[..3], key_b[..3]);
            assert_ne!(key_a, key_b);

            assert_eq!(resolve(&a, &b), Ok(Outcome::AWins), "{hand_a} vs {hand_b}");
            assert_eq!(resolve(&b, &a), Ok(Outcome::BWins), "{hand_b} vs {hand_a}");
        }
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = eval("Ac 2d 3h 4s 5c 9d Kh");
        let six = eval("2c 3d 4h 5s 6c 9h Kd");
        assert_eq!(resolve(&wheel, &six), Ok(Outcome::BWins));
    }

    #[test]
    fn royal_flushes_split() {
        let a = eval("Th Jh Qh Kh Ah 2c 3d");
        let b = eval("Ts Js Qs Ks As 4c 5d");
        assert_eq!(resolve(&a, &b), Ok(Outcome::Split));
    }

    #[test]
    fn resolve_is_reflexive() {
        for hand in [
            "Th Jh Qh Kh Ah 2c 3d",
            "Jh Jd 9s 9c 5h 5d 2s",
            "9h 8c 7s Qd Kh 2c 3d",
        ] {
            let eh = eval(hand);
            assert_eq!(resolve(&eh, &eh), Ok(Outcome::Split));
        }
    }

    #[test]
    fn resolve_mismatched_records() {
        let good = eval("9h 9c 7s Qd Kh 2c 3d");
        let bad = bincode::deserialize::<EvaluatedHand>(
            &bincode::serialize(&(
                HandCategory::OnePair,
                TieBreak::HighCard {
                    ranks: [Rank::King; 5],
                },
                "corrupted".to_string(),
            ))
            .unwrap(),
        )
        .unwrap();

        assert_eq!(
            resolve(&good, &bad),
            Err(EvalError::CategoryMismatchInternal {
                expected: HandCategory::OnePair,
                found: HandCategory::HighCard,
            })
        );
    }

    #[test]
    fn showdown_summary() {
        let board = cards("Qh Jh Th 3s 4d");

        let sd = Showdown::new(&cards("Ah Kh"), &cards("2c 2d"), &board).unwrap();
        assert_eq!(sd.outcome(), Outcome::AWins);
        assert_eq!(sd.hand_a().category(), HandCategory::RoyalFlush);
        assert_eq!(sd.hand_b().category(), HandCategory::OnePair);
        assert_eq!(sd.summary("Alice", "Bob"), "Alice wins with a royal flush.");

        let sd = Showdown::new(&cards("2c 2d"), &cards("Ac Kc"), &board).unwrap();
        assert_eq!(sd.outcome(), Outcome::BWins);
        assert_eq!(
            sd.summary("Alice", "Bob"),
            "Bob wins with a straight, ten to Ace."
        );

        let board = cards("Ac Kd Qs Js Tc");
        let sd = Showdown::new(&cards("2c 3d"), &cards("4h 5h"), &board).unwrap();
        assert_eq!(sd.outcome(), Outcome::Split);
        assert_eq!(
            sd.summary("Alice", "Bob"),
            "Alice and Bob split, both have a straight, ten to Ace."
        );
    }

    #[test]
    fn showdown_errors() {
        let board = cards("Qh Jh Th 3s 4d");

        assert_eq!(
            Showdown::new(&cards("Ah"), &cards("2c 2d"), &board).unwrap_err(),
            EvalError::InvalidHoleCards(1)
        );
        assert_eq!(
            Showdown::new(&cards("Ah Kh"), &cards("2c 2d 2s"), &board).unwrap_err(),
            EvalError::InvalidHoleCards(3)
        );
        assert_eq!(
            Showdown::new(&cards("Ah Kh"), &cards("2c 2d"), &board[..4]).unwrap_err(),
            EvalError::InvalidBoardSize(4)
        );
        assert_eq!(
            Showdown::new(&cards("Ah Kh"), &cards("Kh 2d"), &board).unwrap_err(),
            EvalError::DuplicateCard(cards("Kh")[0])
        );
        assert_eq!(
            Showdown::new(&cards("Ah Qh"), &cards("2c 2d"), &board).unwrap_err(),
            EvalError::DuplicateCard(cards("Qh")[0])
        );
    }
}
