use crate::player::STARTING_BALANCE;
use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the table does when the deck runs out in the middle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Abort the round with `BlackjackGameError::EmptyDeck`.
    #[default]
    Fail,
    /// Bring in a new deck, minus the cards already on the table, and keep dealing.
    FreshDeck,
}

/// Struct for configuring a game of blackjack. Can be deserialized from JSON, any missing field
/// takes the value `GameConfig::default()` gives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_balance: u32,
    pub max_players: usize,
    pub tournament_rounds: u32,
    pub score_log_path: PathBuf,
    pub exhaustion_policy: ExhaustionPolicy,
    pub dealer_plays_when_all_bust: bool,
}

impl GameConfig {
    /// Associated method for returning a new `GameConfigBuilder` object. Allows customization of the game
    /// i.e. the players starting balance, how many seats the table has and how many rounds a tournament lasts.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder {
            starting_balance: None,
            max_players: None,
            tournament_rounds: None,
            score_log_path: None,
            exhaustion_policy: None,
            dealer_plays_when_all_bust: None,
        }
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<GameConfig, BlackjackGameError> {
        let contents = std::fs::read_to_string(path)?;
        GameConfig::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<GameConfig, BlackjackGameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        log::debug!("loaded configuration {:?}", config);
        Ok(config)
    }
}

impl Default for GameConfig {
    /// Returns the standard configuration: 100 tokens each, six seats, three tournament rounds.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// Struct to implement builder pattern for `GameConfig`
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    starting_balance: Option<u32>,
    max_players: Option<usize>,
    tournament_rounds: Option<u32>,
    score_log_path: Option<PathBuf>,
    exhaustion_policy: Option<ExhaustionPolicy>,
    dealer_plays_when_all_bust: Option<bool>,
}

impl GameConfigBuilder {
    /// Method for changing the starting balance of every player.
    pub fn starting_balance(&mut self, balance: u32) -> &mut Self {
        self.starting_balance = Some(balance);
        self
    }

    /// Method for setting how many players can sit at the table. Six players is the most a single
    /// 52 card deck reliably covers.
    pub fn max_players(&mut self, players: usize) -> &mut Self {
        self.max_players = Some(players);
        self
    }

    /// Method for setting the number of rounds a tournament runs for.
    pub fn tournament_rounds(&mut self, rounds: u32) -> &mut Self {
        self.tournament_rounds = Some(rounds);
        self
    }

    /// Method for choosing the file the score log is written to.
    pub fn score_log_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.score_log_path = Some(path.into());
        self
    }

    pub fn exhaustion_policy(&mut self, policy: ExhaustionPolicy) -> &mut Self {
        self.exhaustion_policy = Some(policy);
        self
    }

    /// Method for setting whether the dealer still draws when every player has already busted.
    /// Settlement is the same either way, only the dealer's final hand shown differs.
    pub fn dealer_plays_when_all_bust(&mut self, plays: bool) -> &mut Self {
        self.dealer_plays_when_all_bust = Some(plays);
        self
    }

    /// Method for building a `GameConfig` object from the given `GameConfigBuilder` object.
    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            starting_balance: self.starting_balance.unwrap_or(STARTING_BALANCE),
            max_players: self.max_players.unwrap_or(6),
            tournament_rounds: self.tournament_rounds.unwrap_or(3),
            score_log_path: self
                .score_log_path
                .take()
                .unwrap_or_else(|| PathBuf::from("scores.txt")),
            exhaustion_policy: self.exhaustion_policy.unwrap_or_default(),
            dealer_plays_when_all_bust: self.dealer_plays_when_all_bust.unwrap_or(true),
        }
    }
}
