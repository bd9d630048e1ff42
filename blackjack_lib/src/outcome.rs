use crate::hand::BLACKJACK;
use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Result of one player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Settles a player total against the dealer total. A busted player loses even if the dealer
    /// busts too, otherwise a busted dealer loses to every standing player.
    pub fn determine(player_score: u32, dealer_score: u32) -> Outcome {
        if player_score > BLACKJACK {
            Outcome::Loss
        } else if dealer_score > BLACKJACK || player_score > dealer_score {
            Outcome::Win
        } else if player_score < dealer_score {
            Outcome::Loss
        } else {
            Outcome::Tie
        }
    }

    /// Contribution of the outcome to the tournament tally.
    pub fn tally(&self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.5,
            Outcome::Loss => 0.0,
        }
    }

    /// Label written to the score log.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "Victory",
            Outcome::Loss => "Defeat",
            Outcome::Tie => "Tie",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Outcome {
    type Err = BlackjackGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Victory" => Ok(Outcome::Win),
            "Defeat" => Ok(Outcome::Loss),
            "Tie" => Ok(Outcome::Tie),
            _ => Err(BlackjackGameError::MalformedLogLine(format!(
                "unknown outcome `{s}`"
            ))),
        }
    }
}
