use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u32 = 21;

/// Computes the blackjack total of `cards`. Aces start at 11 and are downgraded to 1,
/// one at a time, for as long as the total is over 21. Returns the total and the number
/// of aces still counted as 11.
fn compute_total(cards: &[Card]) -> (u32, u32) {
    let mut total = 0;
    let mut soft_aces = 0;
    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        total += card.pip_value();
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    (total, soft_aces)
}

/// Calculate the value of a blackjack hand. The result may be over 21.
pub fn hand_value(cards: &[Card]) -> u32 {
    compute_total(cards).0
}

/// A hand is soft when at least one ace is still being counted as 11.
pub fn is_soft_hand(cards: &[Card]) -> bool {
    compute_total(cards).1 > 0
}

/// Ordered cards held by one participant for a single round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Two card 21. Only informational, a natural settles like any other 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}
