use crate::console::ConsoleIo;
use crate::render;
use blackjack_lib::prelude::*;
use std::io::{BufRead, Write};

/// Entries on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SingleGame,
    Tournament,
    ScoreHistory,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::SingleGame),
            "2" => Some(MenuChoice::Tournament),
            "3" => Some(MenuChoice::ScoreHistory),
            "4" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Struct tying the console to the engine: sets up tables from the configuration and runs the
/// game modes the menu offers.
pub struct App {
    config: GameConfig,
    seed: Option<u64>,
    rounds: Option<u32>,
    games_started: u64,
}

impl App {
    /// `seed` makes the deck shuffles reproducible, `rounds` skips the rounds prompt of a tournament.
    pub fn new(config: GameConfig, seed: Option<u64>, rounds: Option<u32>) -> Self {
        App {
            config,
            seed,
            rounds,
            games_started: 0,
        }
    }

    /// Every game gets its own deck source, seeded games stay reproducible but differ from each other.
    fn table(&mut self) -> Table<ShuffledDeckSource> {
        let source = match self.seed {
            Some(seed) => ShuffledDeckSource::from_seed(seed.wrapping_add(self.games_started)),
            None => ShuffledDeckSource::new(),
        };
        self.games_started += 1;
        Table::new(source, &self.config)
    }

    fn score_log(&self) -> FileScoreLog {
        FileScoreLog::new(self.config.score_log_path.clone())
    }

    pub fn single_game<R: BufRead, W: Write>(
        &mut self,
        console: &mut ConsoleIo<R, W>,
    ) -> Result<RoundReport, BlackjackGameError> {
        let mut table = self.table();
        let names = console.prompt_player_names(table.max_players())?;
        let mut players = table.seat_players(&names)?;
        log::info!("single game with {} players", players.len());
        table.play_single_game(&mut players, console, &mut self.score_log())
    }

    pub fn tournament<R: BufRead, W: Write>(
        &mut self,
        console: &mut ConsoleIo<R, W>,
    ) -> Result<TournamentReport, BlackjackGameError> {
        let table = self.table();
        let names = console.prompt_player_names(table.max_players())?;
        let players = table.seat_players(&names)?;
        let rounds = match self.rounds {
            Some(rounds) => rounds,
            None => console.prompt_rounds(self.config.tournament_rounds)?,
        };
        log::info!("tournament of {} rounds with {} players", rounds, players.len());
        let mut tournament = Tournament::new(table, players, rounds)?;
        tournament.run(console, &mut self.score_log())
    }

    pub fn show_scores<R: BufRead, W: Write>(
        &self,
        console: &mut ConsoleIo<R, W>,
        json: bool,
    ) -> Result<(), BlackjackGameError> {
        let entries = self.score_log().entries()?;
        if json {
            console.say(&render::score_history_json(&entries)?);
        } else {
            console.write_text(&render::score_history(&entries));
        }
        Ok(())
    }

    /// The interactive menu. Errors from a game are reported and the menu is shown again, closing
    /// the input quits.
    pub fn menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut ConsoleIo<R, W>,
    ) -> Result<(), BlackjackGameError> {
        loop {
            console.write_text(render::MENU);
            let Some(line) = console.prompt("Your choice: ")? else {
                return Ok(());
            };
            let result = match MenuChoice::parse(&line) {
                Some(MenuChoice::SingleGame) => self.single_game(console).map(|_| ()),
                Some(MenuChoice::Tournament) => self.tournament(console).map(|_| ()),
                Some(MenuChoice::ScoreHistory) => self.show_scores(console, false),
                Some(MenuChoice::Quit) => {
                    console.say("See you soon!");
                    return Ok(());
                }
                None => {
                    console.say("Invalid choice.");
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::error!("{}", e);
                console.say(&format!("error: {}", e));
            }
        }
    }
}
