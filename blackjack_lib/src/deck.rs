use crate::card::{Card, Suit};
use crate::BlackjackGameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A single 52 card deck. The top of the deck is the end of `cards`, dealing pops from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Associated function returning an unshuffled deck, suits in `Suit::ALL` order and ranks ace to king.
    pub fn standard() -> Deck {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Card::ACE..=Card::KING {
                cards.push(Card::new_unchecked(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Returns a new deck shuffled with the thread local rng, which is seeded from the OS.
    pub fn shuffled() -> Deck {
        let mut deck = Deck::standard();
        deck.shuffle();
        deck
    }

    /// Builds a deck that deals `cards` in the given order, the first element is dealt first.
    pub fn stacked(cards: Vec<Card>) -> Deck {
        let mut cards = cards;
        cards.reverse();
        Deck { cards }
    }

    /// Re-permutes the cards that have not been dealt yet.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn deal(&mut self) -> Result<Card, BlackjackGameError> {
        self.cards.pop().ok_or(BlackjackGameError::EmptyDeck)
    }

    /// Drops any of `to_remove` still in the deck, used when a replacement deck is brought in mid round.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::shuffled()
    }
}

/// Supplies the deck for each round. The table asks for a new deck at the start of every round,
/// and again if a deck runs out mid round under `ExhaustionPolicy::FreshDeck`.
pub trait DeckSource {
    fn next_deck(&mut self) -> Deck;
}

/// Production source, every deck is a freshly shuffled 52 card deck.
#[derive(Debug, Clone)]
pub struct ShuffledDeckSource {
    rng: StdRng,
}

impl ShuffledDeckSource {
    /// Seeds the rng from the operating system.
    pub fn new() -> Self {
        ShuffledDeckSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source, the same seed produces the same sequence of decks.
    pub fn from_seed(seed: u64) -> Self {
        ShuffledDeckSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShuffledDeckSource {
    fn default() -> Self {
        ShuffledDeckSource::new()
    }
}

impl DeckSource for ShuffledDeckSource {
    fn next_deck(&mut self) -> Deck {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        deck
    }
}

/// Replays pre-arranged decks in order. Once the queue is empty it hands out unshuffled standard decks.
#[derive(Debug, Clone, Default)]
pub struct StackedDeckSource {
    decks: VecDeque<Deck>,
}

impl StackedDeckSource {
    pub fn new() -> Self {
        StackedDeckSource {
            decks: VecDeque::new(),
        }
    }

    /// Queues a deck that deals `cards` in order.
    pub fn push(&mut self, cards: Vec<Card>) -> &mut Self {
        self.decks.push_back(Deck::stacked(cards));
        self
    }

    pub fn pending(&self) -> usize {
        self.decks.len()
    }
}

impl DeckSource for StackedDeckSource {
    fn next_deck(&mut self) -> Deck {
        self.decks.pop_front().unwrap_or_else(Deck::standard)
    }
}
