// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

use rand::{SeedableRng, rngs::StdRng};
use showdown_eval::*;

fn eval(s: &str) -> EvaluatedHand {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn wheel_straight() {
    let hand = eval("A♣ 2♦ 3♥ 4♠ 5♣ 9♦ K♥");
    assert_eq!(hand.category(), HandCategory::Straight);
    assert_eq!(hand.tie_break(), &TieBreak::Straight { high: Rank::Five });
    assert!(hand.description().contains("Ace to five"));
}

#[test]
fn full_house_with_two_trios() {
    let hand = eval("K♥ K♦ K♠ 8♣ 8♦ 8♥ 2♠");
    assert_eq!(hand.category(), HandCategory::FullHouse);
    assert_eq!(
        hand.tie_break(),
        &TieBreak::FullHouse {
            trio: Rank::King,
            pair: Rank::Eight
        }
    );
    assert_eq!(hand.tie_break().key(), [13, 8, 0, 0, 0]);
}

#[test]
fn two_pair_with_three_pairs() {
    let hand = eval("J♥ J♦ 9♠ 9♣ 5♥ 5♦ 2♠");
    assert_eq!(hand.category(), HandCategory::TwoPair);
    assert_eq!(
        hand.tie_break(),
        &TieBreak::TwoPair {
            high: Rank::Jack,
            low: Rank::Nine,
            kicker: Rank::Five
        }
    );
}

#[test]
fn royal_flush() {
    let hand = eval("10♥ J♥ Q♥ K♥ A♥ 2♣ 3♦");
    assert_eq!(hand.category(), HandCategory::RoyalFlush);
    assert_eq!(hand.category_rank(), 10);
    assert_eq!(hand.description(), "a royal flush");
}

#[test]
fn straight_flush_over_straight_and_flush() {
    let hand = eval("6♠ 7♠ 8♠ 9♠ 10♠ 2♦ 3♥");
    assert_eq!(hand.category(), HandCategory::StraightFlush);
    assert_eq!(hand.description(), "a straight flush, ten high");
}

#[test]
fn high_card_split_ignores_unused_cards() {
    let a = eval("A♠ Q♦ 9♣ 7♥ 5♠ 3♦ 2♣");
    let b = eval("A♥ Q♣ 9♦ 7♠ 5♥ 4♣ 2♦");
    assert_eq!(a.category(), HandCategory::HighCard);
    assert_eq!(b.category(), HandCategory::HighCard);
    assert_eq!(resolve(&a, &b), Ok(Outcome::Split));
}

#[test]
fn invalid_hand_size() {
    let cards = parse_cards("A♠ Q♦ 9♣ 7♥ 5♠").unwrap();
    assert_eq!(evaluate(&cards), Err(EvalError::InvalidHandSize(5)));
}

#[test]
fn random_hands_resolve_consistently() {
    // Every hand gets exactly one category and the comparison of two hands
    // is antisymmetric and agrees with the category order.
    let mut rng = StdRng::seed_from_u64(2025);
    let mut hands = Vec::new();
    Deck::default().sample(500, 7, &mut rng, |cards| {
        let hand = evaluate(cards).unwrap();
        assert_eq!(description(&hand).as_deref(), Ok(hand.description()));

        let accepted = eval::RULES
            .iter()
            .filter_map(|rule| rule.verify(&Hand::new(cards).unwrap()))
            .next()
            .unwrap();
        assert_eq!(accepted, hand);

        hands.push(hand);
    });

    for pair in hands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ab = resolve(a, b).unwrap();
        let ba = resolve(b, a).unwrap();

        match ab {
            Outcome::AWins => assert_eq!(ba, Outcome::BWins),
            Outcome::BWins => assert_eq!(ba, Outcome::AWins),
            Outcome::Split => {
                assert_eq!(ba, Outcome::Split);
                assert_eq!(a.tie_break().key(), b.tie_break().key());
            }
        }

        if a.category() > b.category() {
            assert_eq!(ab, Outcome::AWins);
        }

        assert_eq!(resolve(a, a), Ok(Outcome::Split));
    }
}

#[test]
fn weaker_rules_never_beat_the_accepted_category() {
    // A rule weaker than the accepted one may still match the hand, for
    // example a full house also contains a pair, but its result is always
    // of a lower category.
    let mut rng = StdRng::seed_from_u64(7);
    Deck::default().sample(200, 7, &mut rng, |cards| {
        let hand = Hand::new(cards).unwrap();
        let best = hand.evaluate();

        for rule in eval::RULES.iter() {
            if let Some(other) = rule.verify(&hand) {
                assert!(other.category() <= best.category());
                assert_ne!(resolve(&other, &best), Ok(Outcome::AWins));
            }
        }
    });
}
