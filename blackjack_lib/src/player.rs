use crate::card::Card;
use crate::hand::Hand;
use crate::outcome::Outcome;
use crate::BlackjackGameError;
use std::fmt::Display;

/// Tokens every player starts a game with unless configured otherwise.
pub const STARTING_BALANCE: u32 = 100;

/// Behaviour shared by everyone holding cards at the table, players and dealer alike.
/// Only the hand accessors are required, everything else is derived from the hand.
pub trait Participant {
    fn name(&self) -> &str;
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;

    fn take_card(&mut self, card: Card) {
        self.hand_mut().add(card);
    }

    fn hand_value(&self) -> u32 {
        self.hand().value()
    }

    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    fn clear_hand(&mut self) {
        self.hand_mut().clear();
    }
}

/// A player with a wallet. The balance persists across rounds, the bet and hand do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    balance: u32,
    current_bet: u32,
}

impl Player {
    /// Associated function to create a new `Player` with the default starting balance.
    pub fn new(name: impl Into<String>) -> Player {
        Player::with_balance(name, STARTING_BALANCE)
    }

    pub fn with_balance(name: impl Into<String>, balance: u32) -> Player {
        Player {
            name: name.into(),
            hand: Hand::new(),
            balance,
            current_bet: 0,
        }
    }

    /// Getter method for the players current balance.
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Getter method for the players current bet, zero between rounds.
    pub fn bet(&self) -> u32 {
        self.current_bet
    }

    /// Method for determining whether the player can afford the minimum bet of one token.
    pub fn can_bet(&self) -> bool {
        self.balance >= 1
    }

    pub fn is_eliminated(&self) -> bool {
        self.balance == 0
    }

    /// Places a bet of `amount` and debits it from the balance right away.
    /// Bets outside of `1..=balance` are rejected and leave the player untouched.
    pub fn set_bet(&mut self, amount: u32) -> Result<(), BlackjackGameError> {
        if amount == 0 || amount > self.balance {
            return Err(BlackjackGameError::InvalidBet {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Returns the stake plus an even money payout. The balance saturates at `u32::MAX`.
    pub fn win(&mut self) {
        self.balance = self
            .balance
            .saturating_add(self.current_bet.saturating_mul(2));
        self.current_bet = 0;
    }

    /// Returns the stake.
    pub fn tie(&mut self) {
        self.balance = self.balance.saturating_add(self.current_bet);
        self.current_bet = 0;
    }

    /// The stake was already taken when the bet was placed, nothing is credited.
    pub fn lose(&mut self) {
        self.current_bet = 0;
    }

    /// Applies the balance effect of `outcome` and returns the amount credited back to the player.
    pub fn settle(&mut self, outcome: Outcome) -> u32 {
        let before = self.balance;
        match outcome {
            Outcome::Win => self.win(),
            Outcome::Tie => self.tie(),
            Outcome::Loss => self.lose(),
        }
        self.balance - before
    }

    /// Method for resetting the player for another round, the balance is kept.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<21}{}\n\
                   {:<21}{}\n\
                   {:<21}{}\n\
                   {:<21}{}\n\
                   {:<21}{} tokens",
            "name:",
            self.name,
            "hand:",
            self.hand,
            "hand_value:",
            self.hand.value(),
            "bet:",
            self.current_bet,
            "balance:",
            self.balance,
        )
    }
}
