use crate::card::Card;
use crate::hand::Hand;
use crate::player::Participant;

/// The dealer stands on any total of 17 or more, soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

/// The house. Holds a hand like a player but never bets and is never eliminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Associated function to create a new `Dealer` with an empty hand.
    pub fn new() -> Self {
        Dealer { hand: Hand::new() }
    }

    /// The dealer must hit while the hand is below 17.
    pub fn should_hit(&self) -> bool {
        self.hand.value() < DEALER_STANDS_ON
    }

    /// The face up card, i.e. the first card dealt to the dealer.
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// The face down card, concealed from the players until the dealer's turn.
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        "Dealer"
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
