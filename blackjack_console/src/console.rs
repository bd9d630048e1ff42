use crate::render;
use blackjack_lib::prelude::*;
use std::collections::HashSet;
use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

/// Terminal front end for a table. Reads answers line by line from `input` and writes prompts and
/// rendered events to `output`.
pub struct ConsoleIo<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleIo {
            input,
            output,
            color: true,
        }
    }

    /// Turns ANSI colouring of the red suits on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` as is. Output errors are logged, a broken terminal should not end the game.
    pub fn write_text(&mut self, text: &str) {
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
        {
            log::warn!("failed to write to the console: {}", e);
        }
    }

    pub fn say(&mut self, line: &str) {
        self.write_text(line);
        self.write_text("\n");
    }

    /// Shows `message` and reads one line, `None` once the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.write_text(message);
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Same as `prompt` but treats the end of input as an error.
    fn prompt_required(&mut self, message: &str) -> Result<String, BlackjackGameError> {
        match self.prompt(message)? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed").into()),
        }
    }

    /// Keeps asking until the answer parses and passes `accept`.
    fn prompt_number<T: FromStr>(
        &mut self,
        message: &str,
        accept: impl Fn(&T) -> bool,
        complaint: &str,
    ) -> Result<T, BlackjackGameError> {
        loop {
            let line = self.prompt_required(message)?;
            match line.parse::<T>() {
                Ok(n) if accept(&n) => return Ok(n),
                _ => self.say(complaint),
            }
        }
    }

    /// Asks how many players sit down and what they are called. Names must be non empty and unique.
    pub fn prompt_player_names(&mut self, max_players: usize) -> Result<Vec<String>, BlackjackGameError> {
        let count = self.prompt_number::<usize>(
            &format!("Number of players (1-{}): ", max_players),
            |n| (1..=max_players).contains(n),
            &format!("Please enter a number between 1 and {}.", max_players),
        )?;

        let mut names = Vec::with_capacity(count);
        let mut seen = HashSet::new();
        while names.len() < count {
            let name = self.prompt_required(&format!("Name of player {}: ", names.len() + 1))?;
            if name.is_empty() {
                self.say("A name cannot be empty.");
            } else if !seen.insert(name.clone()) {
                self.say(&format!("{} is already at the table.", name));
            } else {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Asks for the number of tournament rounds, an empty answer takes `default`.
    pub fn prompt_rounds(&mut self, default: u32) -> Result<u32, BlackjackGameError> {
        loop {
            let line = self.prompt_required(&format!("Number of rounds [{}]: ", default))?;
            if line.is_empty() {
                return Ok(default);
            }
            match line.parse::<u32>() {
                Ok(n) if n >= 1 => return Ok(n),
                _ => self.say("Please enter a number of rounds of at least 1."),
            }
        }
    }
}

impl<R: BufRead, W: Write> TableIo for ConsoleIo<R, W> {
    fn request_bet(&mut self, player: &Player) -> u32 {
        let message = format!(
            "{}, you have {} tokens. Your bet: ",
            player.name(),
            player.balance()
        );
        loop {
            match self.prompt(&message) {
                Ok(Some(line)) => match line.parse::<u32>() {
                    Ok(amount) => return amount,
                    Err(_) => self.say("Please enter a whole number of tokens."),
                },
                Ok(None) => {
                    log::warn!("input closed, {} bets the minimum", player.name());
                    return 1;
                }
                Err(e) => {
                    log::warn!("failed to read a bet: {}", e);
                    return 1;
                }
            }
        }
    }

    fn request_action(&mut self, player: &Player, _dealer: &Dealer) -> Action {
        match self.prompt(&format!("{}, hit or stand (h/s)? ", player.name())) {
            Ok(Some(line)) => Action::from_input(&line),
            Ok(None) => Action::Stand,
            Err(e) => {
                log::warn!("failed to read an action: {}", e);
                Action::Stand
            }
        }
    }

    fn notify(&mut self, event: GameEvent<'_>) {
        let color = self.color;
        match event {
            GameEvent::RoundStarted {
                round,
                total_rounds,
            } => self.say(&format!("\n===== ROUND {}/{} =====", round, total_rounds)),
            GameEvent::BetRejected { player, amount } => self.say(&format!(
                "A bet of {} is not possible, bet between 1 and {} tokens.",
                amount,
                player.balance()
            )),
            GameEvent::BetPlaced { .. } => {}
            GameEvent::HandsShown {
                player,
                dealer,
                reveal_hole,
            } => {
                self.say("");
                self.write_text(&render::table_view(player, dealer, reveal_hole, color));
            }
            GameEvent::PlayerBusted { player } => self.say(&format!("{} busts!", player.name())),
            GameEvent::DealerTurnSkipped => self.say("Every player busted, the dealer reveals nothing."),
            GameEvent::DealerPlayed { dealer } => {
                self.say("");
                self.write_text(&render::dealer_view(dealer, color));
            }
            GameEvent::Settled { result, .. } => self.say(&render::outcome_message(result)),
            GameEvent::Eliminated { player, round } => self.say(&format!(
                "{} is out of tokens and leaves the table after round {}.",
                player.name(),
                round
            )),
            GameEvent::TournamentFinished { report } => {
                self.write_text(&render::ranking_table(report))
            }
        }
    }
}
