use thiserror::Error;

/// Errors produced by the blackjack engine. `InvalidBet` is recoverable, the table
/// re-prompts for another amount, the rest abort the current operation.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    #[error("invalid bet of {amount}, bet must be between 1 and {balance}")]
    InvalidBet { amount: u32, balance: u32 },

    #[error("cannot deal from an empty deck")]
    EmptyDeck,

    #[error("invalid card rank {0}, rank must be between 1 and 13")]
    InvalidRank(u8),

    #[error("a table seats between 1 and {max} players, got {got}")]
    InvalidPlayerCount { got: usize, max: usize },

    #[error("player name cannot be empty")]
    InvalidPlayerName,

    #[error("player name `{0}` is already taken")]
    DuplicatePlayerName(String),

    #[error("player `{0}` does not have enough tokens to place a bet")]
    InsufficientBalance(String),

    #[error("a tournament needs at least one round")]
    InvalidRoundCount,

    #[error("malformed score log line: {0}")]
    MalformedLogLine(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
