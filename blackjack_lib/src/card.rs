use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Suit of a playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single letter used in the short display form of a card, e.g. the `S` in `AS`.
    pub fn letter(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Unicode symbol for the suit, without any colouring.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// A single playing card. `rank` runs from 1 (Ace) to 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// Associated function to create a new `Card`, fails if `rank` is outside of 1..=13.
    pub fn new(rank: u8, suit: Suit) -> Result<Card, BlackjackGameError> {
        if !(Card::ACE..=Card::KING).contains(&rank) {
            return Err(BlackjackGameError::InvalidRank(rank));
        }
        Ok(Card { rank, suit })
    }

    pub(crate) const fn new_unchecked(rank: u8, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Card::ACE
    }

    /// The blackjack value of the card before any ace adjustment: face cards count 10, aces 11.
    pub fn pip_value(&self) -> u32 {
        match self.rank {
            Card::ACE => 11,
            r if r > 10 => 10,
            r => r as u32,
        }
    }

    /// The rank as it is printed on the card face: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn display_value(&self) -> String {
        match self.rank {
            Card::ACE => "A".to_string(),
            Card::JACK => "J".to_string(),
            Card::QUEEN => "Q".to_string(),
            Card::KING => "K".to_string(),
            r => r.to_string(),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.display_value(), self.suit.letter())
    }
}
