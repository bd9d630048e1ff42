use crate::deck::DeckSource;
use crate::outcome::Outcome;
use crate::player::{Participant, Player};
use crate::score_log::ScoreLog;
use crate::table::{GameEvent, SettlementMode, Table, TableIo};
use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Cumulative tally score per player over a tournament, 1 for a win, 0.5 for a tie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTally {
    scores: BTreeMap<String, f64>,
}

impl ScoreTally {
    pub fn new() -> Self {
        ScoreTally {
            scores: BTreeMap::new(),
        }
    }

    /// Method for adding the tally contribution of `outcome` to the score of `name`.
    pub fn record(&mut self, name: &str, outcome: Outcome) {
        *self.scores.entry(name.to_string()).or_insert(0.0) += outcome.tally();
    }

    /// The tally of `name`, 0 for a player that has not finished a round yet.
    pub fn get(&self, name: &str) -> f64 {
        self.scores.get(name).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub balance: u32,
    pub tally: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub name: String,
    pub round: u32,
}

/// Struct for reporting how a tournament went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub rounds_played: u32,
    /// Players still at the table, highest balance first.
    pub standings: Vec<Standing>,
    pub eliminated: Vec<Elimination>,
    pub tally: ScoreTally,
    pub champion: Option<String>,
}

impl Display for TournamentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "rounds played: {}", self.rounds_played)?;
        for (rank, standing) in self.standings.iter().enumerate() {
            writeln!(
                f,
                "{}. {} - {} tokens, {:.1} points",
                rank + 1,
                standing.name,
                standing.balance,
                standing.tally
            )?;
        }
        match &self.champion {
            Some(name) => write!(f, "champion: {}", name),
            None => write!(f, "no champion, every player was eliminated"),
        }
    }
}

/// Struct that runs a tournament: a fixed number of rounds at one table where players who run out
/// of tokens are eliminated.
pub struct Tournament<D: DeckSource> {
    table: Table<D>,
    players: Vec<Player>,
    rounds: u32,
    tally: ScoreTally,
}

impl<D: DeckSource> Tournament<D> {
    /// Associated function to create a new `Tournament`. Fails if `rounds` is zero or the players
    /// cannot sit at `table`.
    pub fn new(table: Table<D>, players: Vec<Player>, rounds: u32) -> Result<Self, BlackjackGameError> {
        if rounds == 0 {
            return Err(BlackjackGameError::InvalidRoundCount);
        }
        table.validate_players(&players)?;
        Ok(Tournament {
            table,
            players,
            rounds,
            tally: ScoreTally::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Method for running every round of the tournament. The score log is cleared first, the
    /// tournament ends early once every player has been eliminated.
    pub fn run(
        &mut self,
        io: &mut dyn TableIo,
        score_log: &mut dyn ScoreLog,
    ) -> Result<TournamentReport, BlackjackGameError> {
        score_log.truncate()?;
        let mut rounds_played = 0;
        let mut eliminated = vec![];

        for round in 1..=self.rounds {
            if self.players.is_empty() {
                log::info!("every player has been eliminated after {} rounds", rounds_played);
                break;
            }
            io.notify(GameEvent::RoundStarted {
                round,
                total_rounds: self.rounds,
            });
            self.table.play_round(
                &mut self.players,
                io,
                SettlementMode::TournamentRound {
                    tally: &mut self.tally,
                },
                score_log,
            )?;
            rounds_played = round;

            let (out, remaining): (Vec<Player>, Vec<Player>) = std::mem::take(&mut self.players)
                .into_iter()
                .partition(|p| p.is_eliminated());
            for player in &out {
                log::info!("{} eliminated in round {}", player.name(), round);
                io.notify(GameEvent::Eliminated { player, round });
                eliminated.push(Elimination {
                    name: player.name().to_string(),
                    round,
                });
            }
            self.players = remaining;
        }

        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                balance: p.balance(),
                tally: self.tally.get(p.name()),
            })
            .collect();
        // stable, players on equal balances keep their seating order
        standings.sort_by(|a, b| b.balance.cmp(&a.balance));

        let report = TournamentReport {
            rounds_played,
            champion: standings.first().map(|s| s.name.clone()),
            standings,
            eliminated,
            tally: self.tally.clone(),
        };
        io.notify(GameEvent::TournamentFinished { report: &report });
        Ok(report)
    }
}
