// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is an immutable pair of [Rank] and [Suit].
///
/// The `Ord` implementation is a total order for sorting and collections,
/// rank first and then suit so that it agrees with `Eq`. Use [Card::beats]
/// to compare card strength, where suits never break ties.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if this card has a higher rank than `other`.
    ///
    /// ```
    /// # use showdown_cards::Card;
    /// let ks: Card = "Ks".parse().unwrap();
    /// let kd: Card = "Kd".parse().unwrap();
    /// assert!(!ks.beats(&kd) && !kd.beats(&ks));
    /// ```
    #[inline]
    pub fn beats(&self, other: &Card) -> bool {
        self.rank > other.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when a card or rank cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank part is not one of 2-10, T, J, Q, K, A.
    #[error("invalid rank in card '{0}'")]
    InvalidRank(String),
    /// The suit part is not one of C, D, H, S or a suit symbol.
    #[error("invalid suit in card '{0}'")]
    InvalidSuit(String),
    /// A numeric rank outside 2..=14.
    #[error("rank value {0} out of range 2..=14")]
    RankOutOfRange(u8),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `Ah`, `TD`, `10h` or `K♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| ParseCardError::InvalidSuit(s.to_string()))?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char {
            'c' | 'C' | '♣' => Suit::Clubs,
            'd' | 'D' | '♦' => Suit::Diamonds,
            'h' | 'H' | '♥' => Suit::Hearts,
            's' | 'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        let rank = match rank_str {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use showdown_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("Ah, Kd 10c").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
///
/// The discriminant is the rank numeric value used by the evaluator,
/// from 2 for a deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 to 14.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.value() == value)
            .ok_or(ParseCardError::RankOutOfRange(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit index in 0..4, used to index per suit tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The suit symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("Ah".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("TD".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10c".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!("2♠".parse(), Ok(Card::new(Rank::Deuce, Suit::Spades)));
        assert_eq!("q♦".parse(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));

        assert!(matches!(
            "1h".parse::<Card>(),
            Err(ParseCardError::InvalidRank(_))
        ));
        assert!(matches!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::InvalidSuit(_))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidSuit(_))
        ));

        // Display output parses back to the same card.
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }
    }

    #[test]
    fn parse_card_list() {
        let cards = parse_cards(" Ah,Kh  Qh\tJh, 10h ").unwrap();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|c| c.suit() == Suit::Hearts));
        assert_eq!(cards[4].rank(), Rank::Ten);

        assert!(parse_cards("Ah Zz").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::ranks().count(), 13);

        assert_eq!(Rank::try_from(11u8), Ok(Rank::Jack));
        assert_eq!(Rank::try_from(1u8), Err(ParseCardError::RankOutOfRange(1)));
        assert_eq!(Rank::try_from(15u8), Err(ParseCardError::RankOutOfRange(15)));
    }

    #[test]
    fn card_strength() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ks = Card::new(Rank::King, Suit::Spades);

        assert!(ah.beats(&kd));
        assert!(!kd.beats(&ah));

        // Same rank, neither card beats the other.
        assert!(!ks.beats(&kd));
        assert!(!kd.beats(&ks));
        assert!(!ks.beats(&ks));
    }

    #[test]
    fn card_sort_order() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ks = Card::new(Rank::King, Suit::Spades);

        let mut cards = vec![ks, ah, kd];
        cards.sort();
        assert_eq!(cards, vec![kd, ks, ah]);
        assert_eq!(cards.iter().max(), Some(&ah));

        // The sort order agrees with equality.
        assert_ne!(ks.cmp(&kd), Ordering::Equal);
        assert_eq!(ks.cmp(&ks), Ordering::Equal);
    }
}
