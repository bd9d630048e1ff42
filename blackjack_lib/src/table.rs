//! The round engine. A `Table` owns the deck and the dealer and runs one round at a time for the
//! players seated at it: bets, the deal, each player's turn, the dealer's turn and settlement.

use crate::card::Card;
use crate::config::{ExhaustionPolicy, GameConfig};
use crate::dealer::Dealer;
use crate::deck::{Deck, DeckSource};
use crate::hand::Hand;
use crate::outcome::Outcome;
use crate::player::{Participant, Player};
use crate::score_log::{ScoreEntry, ScoreLog};
use crate::tournament::{ScoreTally, TournamentReport};
use crate::BlackjackGameError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// A player's decision on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    /// Lenient parse of console input, anything that is not a hit counts as a stand.
    pub fn from_input(input: &str) -> Action {
        match input.trim() {
            "h" | "H" => Action::Hit,
            s if s.eq_ignore_ascii_case("hit") => Action::Hit,
            _ => Action::Stand,
        }
    }
}

/// The phases a round moves through, in order. A table sits in `Done` between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Betting,
    Dealing,
    PlayerTurns,
    DealerTurn,
    Settlement,
    Done,
}

/// How a round is settled. Tournament rounds also add each outcome to the tally.
pub enum SettlementMode<'a> {
    SingleGame,
    TournamentRound { tally: &'a mut ScoreTally },
}

/// Settlement of one player for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub bet: u32,
    pub player_score: u32,
    pub dealer_score: u32,
    pub outcome: Outcome,
    /// Tokens credited back at settlement, the stake included.
    pub payout: u32,
    pub balance: u32,
}

impl Display for PlayerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} vs dealer {} -> {} (bet {}, balance {})",
            self.name, self.player_score, self.dealer_score, self.outcome, self.bet, self.balance
        )
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub results: Vec<PlayerResult>,
    pub dealer_hand: Hand,
    pub dealer_played: bool,
}

impl RoundReport {
    pub fn result_for(&self, name: &str) -> Option<&PlayerResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Things the table reports to whoever is presenting the game.
#[derive(Debug)]
pub enum GameEvent<'a> {
    RoundStarted { round: u32, total_rounds: u32 },
    BetRejected { player: &'a Player, amount: u32 },
    BetPlaced { player: &'a Player },
    /// A player's turn view. The dealer's hole card stays hidden unless `reveal_hole` is set.
    HandsShown {
        player: &'a Player,
        dealer: &'a Dealer,
        reveal_hole: bool,
    },
    PlayerBusted { player: &'a Player },
    DealerTurnSkipped,
    DealerPlayed { dealer: &'a Dealer },
    Settled {
        result: &'a PlayerResult,
        player: &'a Player,
        dealer: &'a Dealer,
    },
    Eliminated { player: &'a Player, round: u32 },
    TournamentFinished { report: &'a TournamentReport },
}

/// The boundary between the engine and the outside world. Requests block until an answer is
/// available, `notify` is fire and forget.
pub trait TableIo {
    /// Asks `player` for a bet. Amounts outside of `1..=balance` are rejected and asked for again.
    fn request_bet(&mut self, player: &Player) -> u32;
    /// Asks `player` to hit or stand. Only the dealer's up card should be shown.
    fn request_action(&mut self, player: &Player, dealer: &Dealer) -> Action;
    fn notify(&mut self, _event: GameEvent<'_>) {}
}

/// Struct for a blackjack table, one dealer against up to `max_players` players.
pub struct Table<D: DeckSource> {
    deck_source: D,
    deck: Deck,
    dealer: Dealer,
    phase: RoundPhase,
    starting_balance: u32,
    max_players: usize,
    exhaustion_policy: ExhaustionPolicy,
    dealer_plays_when_all_bust: bool,
}

impl<D: DeckSource> Table<D> {
    /// Associated function to create a new `Table`, `deck_source` supplies a fresh deck for every round.
    pub fn new(deck_source: D, config: &GameConfig) -> Self {
        Table {
            deck_source,
            deck: Deck::stacked(vec![]),
            dealer: Dealer::new(),
            phase: RoundPhase::Done,
            starting_balance: config.starting_balance,
            max_players: config.max_players,
            exhaustion_policy: config.exhaustion_policy,
            dealer_plays_when_all_bust: config.dealer_plays_when_all_bust,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Creates a player with the configured starting balance for each name, checking the names
    /// and the number of seats first.
    pub fn seat_players<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Player>, BlackjackGameError> {
        let players: Vec<Player> = names
            .iter()
            .map(|name| Player::with_balance(name.as_ref().trim(), self.starting_balance))
            .collect();
        self.validate_players(&players)?;
        Ok(players)
    }

    /// Checks the table can run a round for `players`: the seat count fits, names are non empty,
    /// free of control characters and unique, and everybody can afford the minimum bet.
    pub fn validate_players(&self, players: &[Player]) -> Result<(), BlackjackGameError> {
        if players.is_empty() || players.len() > self.max_players {
            return Err(BlackjackGameError::InvalidPlayerCount {
                got: players.len(),
                max: self.max_players,
            });
        }
        let mut names = HashSet::new();
        for player in players {
            // a line break in a name would split its score log line in two
            if player.name().trim().is_empty() || player.name().chars().any(char::is_control) {
                return Err(BlackjackGameError::InvalidPlayerName);
            }
            if !names.insert(player.name()) {
                return Err(BlackjackGameError::DuplicatePlayerName(player.name().to_string()));
            }
            if !player.can_bet() {
                return Err(BlackjackGameError::InsufficientBalance(player.name().to_string()));
            }
        }
        Ok(())
    }

    /// Plays a single stand alone round, nothing is added to a tally.
    pub fn play_single_game(
        &mut self,
        players: &mut [Player],
        io: &mut dyn TableIo,
        score_log: &mut dyn ScoreLog,
    ) -> Result<RoundReport, BlackjackGameError> {
        self.play_round(players, io, SettlementMode::SingleGame, score_log)
    }

    /// Runs one complete round. If the round fails part way through, every stake still on the
    /// table is returned to its player before the error is passed on.
    pub fn play_round(
        &mut self,
        players: &mut [Player],
        io: &mut dyn TableIo,
        mut mode: SettlementMode<'_>,
        score_log: &mut dyn ScoreLog,
    ) -> Result<RoundReport, BlackjackGameError> {
        self.validate_players(players)?;
        match self.run_phases(players, io, &mut mode, score_log) {
            Ok(report) => Ok(report),
            Err(e) => {
                log::error!("round aborted during {:?}: {}", self.phase, e);
                for player in players.iter_mut() {
                    // settled players have no stake left, so this only refunds the rest
                    player.tie();
                }
                self.set_phase(RoundPhase::Done);
                Err(e)
            }
        }
    }

    fn run_phases(
        &mut self,
        players: &mut [Player],
        io: &mut dyn TableIo,
        mode: &mut SettlementMode<'_>,
        score_log: &mut dyn ScoreLog,
    ) -> Result<RoundReport, BlackjackGameError> {
        self.reset(players);

        self.set_phase(RoundPhase::Betting);
        self.take_bets(players, io);

        self.set_phase(RoundPhase::Dealing);
        self.deal_hands(players)?;

        self.set_phase(RoundPhase::PlayerTurns);
        for idx in 0..players.len() {
            self.player_turn(players, idx, io)?;
        }

        self.set_phase(RoundPhase::DealerTurn);
        let dealer_played = self.dealer_turn(players, io)?;

        self.set_phase(RoundPhase::Settlement);
        let results = self.settle(players, io, mode, score_log)?;

        self.set_phase(RoundPhase::Done);
        Ok(RoundReport {
            results,
            dealer_hand: self.dealer.hand().clone(),
            dealer_played,
        })
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        log::debug!("round phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Method for resetting the table for another round: clears every hand and brings in a new deck.
    fn reset(&mut self, players: &mut [Player]) {
        for player in players.iter_mut() {
            player.reset();
        }
        self.dealer.clear_hand();
        self.deck = self.deck_source.next_deck();
    }

    fn take_bets(&mut self, players: &mut [Player], io: &mut dyn TableIo) {
        for player in players.iter_mut() {
            loop {
                let amount = io.request_bet(player);
                match player.set_bet(amount) {
                    Ok(()) => {
                        log::debug!("{} bets {}", player.name(), amount);
                        io.notify(GameEvent::BetPlaced { player: &*player });
                        break;
                    }
                    Err(e) => {
                        log::debug!("rejected bet from {}: {}", player.name(), e);
                        io.notify(GameEvent::BetRejected {
                            player: &*player,
                            amount,
                        });
                    }
                }
            }
        }
    }

    /// One card to each player, a second card to each player, then two to the dealer.
    fn deal_hands(&mut self, players: &mut [Player]) -> Result<(), BlackjackGameError> {
        for _ in 0..2 {
            for idx in 0..players.len() {
                let card = self.draw_card(players)?;
                players[idx].take_card(card);
            }
        }
        for _ in 0..2 {
            let card = self.draw_card(players)?;
            self.dealer.take_card(card);
        }
        Ok(())
    }

    /// The player at `idx` hits until they stand or bust.
    fn player_turn(
        &mut self,
        players: &mut [Player],
        idx: usize,
        io: &mut dyn TableIo,
    ) -> Result<(), BlackjackGameError> {
        loop {
            io.notify(GameEvent::HandsShown {
                player: &players[idx],
                dealer: &self.dealer,
                reveal_hole: false,
            });
            if players[idx].is_busted() {
                log::debug!("{} busts with {}", players[idx].name(), players[idx].hand_value());
                io.notify(GameEvent::PlayerBusted { player: &players[idx] });
                return Ok(());
            }
            match io.request_action(&players[idx], &self.dealer) {
                Action::Hit => {
                    let card = self.draw_card(players)?;
                    players[idx].take_card(card);
                }
                Action::Stand => return Ok(()),
            }
        }
    }

    /// The dealer draws to 17. Returns false if the turn was skipped because every player busted.
    fn dealer_turn(
        &mut self,
        players: &[Player],
        io: &mut dyn TableIo,
    ) -> Result<bool, BlackjackGameError> {
        if !self.dealer_plays_when_all_bust && players.iter().all(|p| p.is_busted()) {
            log::debug!("every player busted, dealer does not draw");
            io.notify(GameEvent::DealerTurnSkipped);
            return Ok(false);
        }
        while self.dealer.should_hit() {
            let card = self.draw_card(players)?;
            self.dealer.take_card(card);
        }
        log::debug!("dealer finishes on {}", self.dealer.hand_value());
        io.notify(GameEvent::DealerPlayed {
            dealer: &self.dealer,
        });
        Ok(true)
    }

    /// Settles each player against the dealer on their own, records the result and reports it.
    fn settle(
        &mut self,
        players: &mut [Player],
        io: &mut dyn TableIo,
        mode: &mut SettlementMode<'_>,
        score_log: &mut dyn ScoreLog,
    ) -> Result<Vec<PlayerResult>, BlackjackGameError> {
        let dealer_score = self.dealer.hand_value();
        let mut results = Vec::with_capacity(players.len());
        for player in players.iter_mut() {
            let player_score = player.hand_value();
            let outcome = Outcome::determine(player_score, dealer_score);
            let bet = player.bet();
            let payout = player.settle(outcome);

            if let SettlementMode::TournamentRound { tally } = mode {
                tally.record(player.name(), outcome);
            }

            score_log.append(&ScoreEntry::now(
                player.name(),
                player_score,
                dealer_score,
                outcome,
                player.balance(),
            ))?;

            let result = PlayerResult {
                name: player.name().to_string(),
                bet,
                player_score,
                dealer_score,
                outcome,
                payout,
                balance: player.balance(),
            };
            log::info!("{}", result);
            io.notify(GameEvent::Settled {
                result: &result,
                player: &*player,
                dealer: &self.dealer,
            });
            results.push(result);
        }
        Ok(results)
    }

    /// Deals the top card. When the deck runs out the exhaustion policy decides between failing
    /// the round and continuing with a new deck that excludes every card already on the table.
    fn draw_card(&mut self, players: &[Player]) -> Result<Card, BlackjackGameError> {
        match self.deck.deal() {
            Err(BlackjackGameError::EmptyDeck)
                if self.exhaustion_policy == ExhaustionPolicy::FreshDeck =>
            {
                let in_play: Vec<Card> = players
                    .iter()
                    .flat_map(|p| p.hand().cards().iter().copied())
                    .chain(self.dealer.hand().cards().iter().copied())
                    .collect();
                log::warn!(
                    "deck exhausted with {} cards on the table, bringing in a fresh deck",
                    in_play.len()
                );
                let mut deck = self.deck_source.next_deck();
                deck.remove_cards(&in_play);
                self.deck = deck;
                self.deck.deal()
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::StackedDeckSource;
    use crate::score_log::MemoryScoreLog;
    use crate::test_util::{card as c, ScriptedIo};

    fn table_with(decks: Vec<Vec<Card>>, config: &GameConfig) -> Table<StackedDeckSource> {
        let mut source = StackedDeckSource::new();
        for deck in decks {
            source.push(deck);
        }
        Table::new(source, config)
    }

    #[test]
    fn test_action_from_input_is_lenient() {
        assert_eq!(Action::from_input("h"), Action::Hit);
        assert_eq!(Action::from_input(" H \n"), Action::Hit);
        assert_eq!(Action::from_input("Hit"), Action::Hit);
        assert_eq!(Action::from_input("s"), Action::Stand);
        assert_eq!(Action::from_input("x"), Action::Stand);
        assert_eq!(Action::from_input(""), Action::Stand);
    }

    #[test]
    fn test_single_player_wins_when_dealer_busts() {
        // player 10 10, dealer 10 6 then draws 7
        let mut table = table_with(vec![vec![c(10), c(10), c(10), c(6), c(7)]], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[50], &[Action::Stand]);
        let mut log = MemoryScoreLog::new();

        let report = table.play_single_game(&mut players, &mut io, &mut log).unwrap();

        let result = report.result_for("alice").unwrap();
        assert_eq!(result.player_score, 20);
        assert_eq!(result.dealer_score, 23);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.payout, 100);
        assert_eq!(players[0].balance(), 150);
        assert_eq!(players[0].bet(), 0);
        assert_eq!(table.phase(), RoundPhase::Done);

        let entry = log.last().unwrap();
        assert_eq!(entry.outcome.label(), "Victory");
        assert_eq!(entry.balance, 150);
    }

    #[test]
    fn test_invalid_bets_are_asked_again() {
        let mut table = table_with(vec![vec![c(10), c(9), c(10), c(8)]], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[0, 101, 30], &[]);
        let mut log = MemoryScoreLog::new();

        table.play_single_game(&mut players, &mut io, &mut log).unwrap();

        assert_eq!(io.events[0], "rejected alice 0");
        assert_eq!(io.events[1], "rejected alice 101");
        assert_eq!(io.events[2], "bet alice 30");
        // 19 beats 18
        assert_eq!(players[0].balance(), 130);
    }

    #[test]
    fn test_dealer_at_16_draws() {
        let mut table = table_with(vec![vec![c(10), c(7), c(10), c(6), c(2)]], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[10], &[]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert_eq!(report.dealer_hand.len(), 3);
        assert_eq!(report.dealer_hand.value(), 18);
        assert_eq!(report.results[0].outcome, Outcome::Loss);
        assert_eq!(players[0].balance(), 90);
    }

    #[test]
    fn test_dealer_at_17_stands() {
        let mut table = table_with(vec![vec![c(10), c(7), c(10), c(7), c(2)]], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[10], &[]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert_eq!(report.dealer_hand.len(), 2);
        assert_eq!(report.results[0].outcome, Outcome::Tie);
        assert_eq!(players[0].balance(), 100);
    }

    #[test]
    fn test_bust_ends_turn_without_asking_again() {
        // player 10 6 hits a king and busts, dealer 10 9
        let mut table = table_with(
            vec![vec![c(10), c(6), c(10), c(9), c(13)]],
            &GameConfig::default(),
        );
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[20], &[Action::Hit, Action::Hit]);
        table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert!(io.saw("bust alice"));
        // the second hit was never requested
        assert_eq!(io.actions.len(), 1);
        assert_eq!(players[0].balance(), 80);
    }

    #[test]
    fn test_players_deal_order_and_independent_settlement() {
        // alice gets 10 9, bob gets 5 6, dealer 10 8
        let deck = vec![c(10), c(5), c(9), c(6), c(10), c(8), c(4)];
        let mut table = table_with(vec![deck], &GameConfig::default());
        let mut players = vec![Player::new("alice"), Player::new("bob")];
        // alice stands, bob hits a 4 to 15 and stands
        let mut io = ScriptedIo::new(&[10, 20], &[Action::Stand, Action::Hit, Action::Stand]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();

        assert_eq!(report.result_for("alice").unwrap().player_score, 19);
        assert_eq!(report.result_for("alice").unwrap().outcome, Outcome::Win);
        assert_eq!(report.result_for("bob").unwrap().player_score, 15);
        assert_eq!(report.result_for("bob").unwrap().outcome, Outcome::Loss);
        assert_eq!(players[0].balance(), 110);
        assert_eq!(players[1].balance(), 80);
    }

    #[test]
    fn test_dealer_still_plays_when_everyone_busts() {
        let deck = vec![c(10), c(6), c(10), c(2), c(10), c(3), c(4)];
        let mut table = table_with(vec![deck.clone()], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[10], &[Action::Hit]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert!(report.dealer_played);
        assert_eq!(report.dealer_hand.value(), 19);
        assert_eq!(report.results[0].outcome, Outcome::Loss);

        let config = GameConfig::new().dealer_plays_when_all_bust(false).build();
        let mut table = table_with(vec![deck], &config);
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[10], &[Action::Hit]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert!(!report.dealer_played);
        assert_eq!(report.dealer_hand.value(), 12);
        assert_eq!(report.results[0].outcome, Outcome::Loss);
        assert!(io.saw("dealer skipped"));
    }

    #[test]
    fn test_empty_deck_fails_and_refunds() {
        // not enough cards to finish the deal
        let mut table = table_with(vec![vec![c(10), c(9), c(10)]], &GameConfig::default());
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[40], &[]);
        let mut log = MemoryScoreLog::new();
        let result = table.play_single_game(&mut players, &mut io, &mut log);
        assert!(matches!(result, Err(BlackjackGameError::EmptyDeck)));
        assert_eq!(players[0].balance(), 100);
        assert!(log.is_empty());
        assert_eq!(table.phase(), RoundPhase::Done);
    }

    #[test]
    fn test_fresh_deck_policy_continues() {
        let config = GameConfig::new()
            .exhaustion_policy(ExhaustionPolicy::FreshDeck)
            .build();
        let ten_of_hearts = Card::new(10, crate::card::Suit::Hearts).unwrap();
        let mut table = table_with(vec![vec![c(10), c(9), ten_of_hearts]], &config);
        let mut players = vec![Player::new("alice")];
        let mut io = ScriptedIo::new(&[40], &[]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert!(report.dealer_hand.len() >= 2);
        // no card on the table may appear twice
        let mut seen = HashSet::new();
        for card in players[0].hand().cards().iter().chain(report.dealer_hand.cards()) {
            assert!(seen.insert(*card), "duplicate card {}", card);
        }
    }

    #[test]
    fn test_seat_validation() {
        let table = table_with(vec![], &GameConfig::default());
        assert!(matches!(
            table.seat_players::<&str>(&[]),
            Err(BlackjackGameError::InvalidPlayerCount { got: 0, max: 6 })
        ));
        assert!(matches!(
            table.seat_players(&["a", "b", "c", "d", "e", "f", "g"]),
            Err(BlackjackGameError::InvalidPlayerCount { got: 7, .. })
        ));
        assert!(matches!(
            table.seat_players(&["a", "  "]),
            Err(BlackjackGameError::InvalidPlayerName)
        ));
        assert!(matches!(
            table.seat_players(&["a", "b\nc"]),
            Err(BlackjackGameError::InvalidPlayerName)
        ));
        assert!(matches!(
            table.seat_players(&["a\tb"]),
            Err(BlackjackGameError::InvalidPlayerName)
        ));
        assert!(matches!(
            table.seat_players(&["a", "a"]),
            Err(BlackjackGameError::DuplicatePlayerName(_))
        ));
        let players = table.seat_players(&["alice", "bob"]).unwrap();
        assert_eq!(players[1].balance(), 100);
    }

    #[test]
    fn test_all_in_win_on_a_huge_starting_balance() {
        let config = GameConfig::from_json(r#"{ "starting_balance": 3000000000 }"#).unwrap();
        let mut table = table_with(vec![vec![c(10), c(10), c(10), c(6), c(7)]], &config);
        let mut players = table.seat_players(&["alice"]).unwrap();
        let mut io = ScriptedIo::new(&[3_000_000_000], &[Action::Stand]);
        let report = table
            .play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new())
            .unwrap();
        assert_eq!(report.results[0].outcome, Outcome::Win);
        assert_eq!(players[0].balance(), u32::MAX);
    }

    #[test]
    fn test_names_with_log_separators_read_back() {
        let mut table = table_with(vec![vec![c(10), c(9), c(10), c(8)]], &GameConfig::default());
        let mut players = table.seat_players(&["Mr: X | Dealer: 3"]).unwrap();
        let mut io = ScriptedIo::new(&[10], &[]);
        let mut log = MemoryScoreLog::new();
        table.play_single_game(&mut players, &mut io, &mut log).unwrap();

        let line = log.last().unwrap().to_string();
        let parsed: ScoreEntry = line.parse().unwrap();
        assert_eq!(parsed.player_name, "Mr: X | Dealer: 3");
        assert_eq!(parsed.player_score, 19);
        assert_eq!(parsed.dealer_score, 18);
    }

    #[test]
    fn test_broke_player_cannot_sit_down() {
        let mut table = table_with(vec![], &GameConfig::default());
        let mut players = vec![Player::with_balance("alice", 0)];
        let mut io = ScriptedIo::new(&[], &[]);
        assert!(matches!(
            table.play_single_game(&mut players, &mut io, &mut MemoryScoreLog::new()),
            Err(BlackjackGameError::InsufficientBalance(_))
        ));
    }
}
