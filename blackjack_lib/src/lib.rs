pub mod card;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod player;
pub mod score_log;
pub mod table;
pub mod tournament;

#[cfg(test)]
mod test_util;

pub use error::BlackjackGameError;

pub mod prelude {
    pub use super::{
        card::{Card, Suit},
        config::{ExhaustionPolicy, GameConfig, GameConfigBuilder},
        dealer::Dealer,
        deck::{Deck, DeckSource, ShuffledDeckSource, StackedDeckSource},
        hand::{hand_value, Hand, BLACKJACK},
        outcome::Outcome,
        player::{Participant, Player, STARTING_BALANCE},
        score_log::{FileScoreLog, MemoryScoreLog, ScoreEntry, ScoreLog},
        table::{
            Action, GameEvent, PlayerResult, RoundPhase, RoundReport, SettlementMode, Table,
            TableIo,
        },
        tournament::{Elimination, ScoreTally, Standing, Tournament, TournamentReport},
        BlackjackGameError,
    };
}
