use crate::card::{Card, Suit};
use crate::dealer::Dealer;
use crate::player::{Participant, Player};
use crate::table::{Action, GameEvent, TableIo};
use std::collections::VecDeque;

/// Answers requests from queues and records every event it is told about.
pub(crate) struct ScriptedIo {
    pub bets: VecDeque<u32>,
    pub actions: VecDeque<Action>,
    pub events: Vec<String>,
}

impl ScriptedIo {
    pub fn new(bets: &[u32], actions: &[Action]) -> Self {
        ScriptedIo {
            bets: bets.iter().copied().collect(),
            actions: actions.iter().copied().collect(),
            events: vec![],
        }
    }

    pub fn saw(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

impl TableIo for ScriptedIo {
    fn request_bet(&mut self, player: &Player) -> u32 {
        self.bets.pop_front().unwrap_or(player.balance())
    }

    fn request_action(&mut self, _player: &Player, _dealer: &Dealer) -> Action {
        self.actions.pop_front().unwrap_or(Action::Stand)
    }

    fn notify(&mut self, event: GameEvent<'_>) {
        let line = match event {
            GameEvent::RoundStarted { round, .. } => format!("round {}", round),
            GameEvent::BetRejected { player, amount } => format!("rejected {} {}", player.name(), amount),
            GameEvent::BetPlaced { player } => format!("bet {} {}", player.name(), player.bet()),
            GameEvent::HandsShown { player, .. } => format!("shown {}", player.name()),
            GameEvent::PlayerBusted { player } => format!("bust {}", player.name()),
            GameEvent::DealerTurnSkipped => "dealer skipped".to_string(),
            GameEvent::DealerPlayed { dealer } => format!("dealer {}", dealer.hand_value()),
            GameEvent::Settled { result, .. } => format!("settled {} {}", result.name, result.outcome),
            GameEvent::Eliminated { player, round } => format!("eliminated {} {}", player.name(), round),
            GameEvent::TournamentFinished { report } => format!(
                "finished {}",
                report.champion.as_deref().unwrap_or("nobody")
            ),
        };
        self.events.push(line);
    }
}

/// A spade of the given rank, suits never matter for scoring.
pub(crate) fn card(rank: u8) -> Card {
    Card::new(rank, Suit::Spades).unwrap()
}
