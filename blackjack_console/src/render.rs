//! Text rendering for the console: card art, hands, results and rankings.

use blackjack_lib::prelude::*;
use crossterm::style::Stylize;

pub const MENU: &str = "\n===== MENU =====\n\
1. New single game\n\
2. Tournament mode (rounds + ranking)\n\
3. View score history\n\
4. Quit\n";

/// Suit symbol, red for hearts and diamonds when `color` is set.
pub fn suit_symbol(suit: Suit, color: bool) -> String {
    if color && suit.is_red() {
        suit.symbol().red().to_string()
    } else {
        suit.symbol().to_string()
    }
}

/// Draws `cards` side by side, three lines tall, each face four columns wide to fit the border.
/// With `hide_hole` the second card is drawn face down.
pub fn card_art(cards: &[Card], hide_hole: bool, color: bool) -> String {
    let (mut top, mut mid, mut bot) = (String::new(), String::new(), String::new());
    for (idx, card) in cards.iter().enumerate() {
        top.push_str("┌────┐ ");
        if hide_hole && idx == 1 {
            mid.push_str("│ ?? │ ");
        } else {
            mid.push_str(&format!(
                "│{:<2}{} │ ",
                card.display_value(),
                suit_symbol(card.suit(), color)
            ));
        }
        bot.push_str("└────┘ ");
    }
    format!("{}\n{}\n{}\n", top.trim_end(), mid.trim_end(), bot.trim_end())
}

/// Hand total as shown next to the cards, soft totals and naturals are called out.
pub fn total_label(hand: &Hand) -> String {
    if hand.is_natural() {
        format!("{}, Blackjack!", hand.value())
    } else if hand.is_soft() {
        format!("soft {}", hand.value())
    } else {
        hand.value().to_string()
    }
}

/// The dealer's hand over one player's hand, as shown during that player's turn.
pub fn table_view(player: &Player, dealer: &Dealer, reveal_hole: bool, color: bool) -> String {
    let dealer_total = if reveal_hole {
        total_label(dealer.hand())
    } else {
        match dealer.up_card() {
            Some(card) => format!("{} + ?", card.pip_value()),
            None => "?".to_string(),
        }
    };
    format!(
        "Dealer ({})\n{}{} ({})\n{}",
        dealer_total,
        card_art(dealer.hand().cards(), !reveal_hole, color),
        player.name(),
        total_label(player.hand()),
        card_art(player.hand().cards(), false, color)
    )
}

pub fn dealer_view(dealer: &Dealer, color: bool) -> String {
    format!(
        "Dealer ({})\n{}",
        total_label(dealer.hand()),
        card_art(dealer.hand().cards(), false, color)
    )
}

/// One line announcing how a player's hand was settled.
pub fn outcome_message(result: &PlayerResult) -> String {
    let headline = match result.outcome {
        Outcome::Loss if result.player_score > BLACKJACK => format!("{} busts, dealer wins!", result.name),
        Outcome::Loss => format!("Dealer beats {}!", result.name),
        Outcome::Win if result.dealer_score > BLACKJACK => {
            format!("{} wins! Dealer busts.", result.name)
        }
        Outcome::Win => format!("{} wins!", result.name),
        Outcome::Tie => format!("Push for {}!", result.name),
    };
    format!("{} Balance: {} tokens", headline, result.balance)
}

/// The final ranking of a tournament as a table.
pub fn ranking_table(report: &TournamentReport) -> String {
    let mut out = format!("\n===== RANKING after {} rounds =====\n", report.rounds_played);
    out.push_str(&format!("{:<4} {:<20} {:>8} {:>7}\n", "#", "Player", "Tokens", "Points"));
    for (rank, standing) in report.standings.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<20} {:>8} {:>7.1}\n",
            rank + 1,
            standing.name,
            standing.balance,
            standing.tally
        ));
    }
    for elimination in &report.eliminated {
        out.push_str(&format!(
            "     {} (eliminated in round {}, {:.1} points)\n",
            elimination.name,
            elimination.round,
            report.tally.get(&elimination.name)
        ));
    }
    match &report.champion {
        Some(name) => out.push_str(&format!("Champion: {}\n", name)),
        None => out.push_str("Every player was eliminated, no champion this time.\n"),
    }
    out
}

pub fn score_history(entries: &[ScoreEntry]) -> String {
    if entries.is_empty() {
        return "No scores recorded yet.\n".to_string();
    }
    let mut out = String::from("\n===== SCORE HISTORY =====\n");
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

pub fn score_history_json(entries: &[ScoreEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
