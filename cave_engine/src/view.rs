//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

mod icons;
pub mod view_item;

pub use view_item::{InventoryLine, ViewItem};

use colored::Colorize;
use log::debug;
use textwrap::{fill, termwidth};

use crate::style::{GameStyle, indented_block, normal_block};
use icons::{ICON_ATTACK, ICON_CELEBRATE, ICON_DEATH, ICON_ENGINE, ICON_ERROR, ICON_HARMED, ICON_LOOT};

/// Top-level output sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Transition,
    Environment,
    DirectResult,
    WorldResponse,
    System,
    Prompt,
}

/// Where flushed frames go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Styled output to stdout.
    Terminal,
    /// Nothing is printed; every flushed item is appended to `View::history`.
    Recorded,
}

/// View aggregates information to be displayed on each pass through the game loop and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub mode: ViewMode,
    pub items: Vec<ViewItem>,
    pub history: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view that prints to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            mode: ViewMode::Terminal,
            items: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Create a view that keeps flushed items instead of printing them.
    pub fn recorded() -> Self {
        Self {
            mode: ViewMode::Recorded,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        debug!("flushing {} view items", self.items.len());
        if self.mode == ViewMode::Recorded {
            self.history.append(&mut self.items);
            return;
        }

        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if let Some(msg) = self.items.iter().find_map(|i| match i {
            ViewItem::TransitionMessage(msg) => Some(msg),
            _ => None,
        }) {
            println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
        }
        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.tile_description();
        }
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.attack_results();
            self.inventory();
            self.errors();
        }
        if self.has_section(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.loot_taken();
            self.player_harmed();
            self.player_death();
        }
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.engine_messages();
            self.victory();
            self.game_summary();
        }
        self.action_menu();

        self.items.clear();
    }

    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|i| i.section() == section)
    }

    fn tile_description(&self) {
        for text in self.items.iter().filter_map(|i| match i {
            ViewItem::TileDescription(text) => Some(text),
            _ => None,
        }) {
            println!("{}\n", fill(text, normal_block()).description_style());
        }
    }

    fn attack_results(&self) {
        for report in self.items.iter().filter_map(|i| match i {
            ViewItem::AttackResult(report) => Some(report),
            _ => None,
        }) {
            println!(
                "{:<4}You strike the {} with {} for {} damage.",
                ICON_ATTACK.bright_white(),
                report.target.enemy_style(),
                report.weapon.item_style(),
                report.damage
            );
            if report.killed {
                println!("    You killed the {}!", report.target.enemy_style());
            } else {
                println!("    The {} has {} HP remaining.", report.target.enemy_style(), report.target_hp);
            }
            println!();
        }
    }

    fn inventory(&self) {
        if let Some(ViewItem::Inventory(lines)) = self.items.iter().find(|i| i.is_inventory()) {
            println!("{}:", "Inventory".subheading_style());
            if lines.is_empty() {
                println!("   {}", "You have... nothing at all.".italic().dimmed());
            }
            for line in lines {
                println!("   {}", line.name.item_style());
                println!("{}", fill(&line.description, indented_block()).dimmed());
            }
            println!();
        }
    }

    fn errors(&self) {
        for msg in self.items.iter().filter_map(|i| match i {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        }) {
            println!(
                "{}\n",
                fill(format!("{:<4}{}", ICON_ERROR.bright_red(), msg.error_style()).as_str(), normal_block())
            );
        }
    }

    fn loot_taken(&self) {
        for name in self.items.iter().filter_map(|i| match i {
            ViewItem::LootTaken(name) => Some(name),
            _ => None,
        }) {
            println!("{:<4}{} added to inventory.", ICON_LOOT.green(), name.item_style());
        }
    }

    fn player_harmed(&self) {
        for (cause, amount, hp_left) in self.items.iter().filter_map(|i| match i {
            ViewItem::PlayerHarmed { cause, amount, hp_left } => Some((cause, amount, hp_left)),
            _ => None,
        }) {
            println!(
                "{:<4}{} does {} damage. You have {} HP remaining.",
                ICON_HARMED.bright_yellow(),
                cause.enemy_style(),
                amount.to_string().harmed_style(),
                hp_left
            );
        }
    }

    fn player_death(&self) {
        if let Some(ViewItem::PlayerDeath { cause }) = self.items.iter().find(|i| i.is_player_death()) {
            let msg = match cause {
                Some(cause) => format!("You were slain by the {cause}."),
                None => "You have died.".to_string(),
            };
            println!("\n{:<4}{}", ICON_DEATH.bright_red(), msg.death_style());
        }
    }

    fn engine_messages(&self) {
        for msg in self.items.iter().filter_map(|i| match i {
            ViewItem::EngineMessage(msg) => Some(msg),
            _ => None,
        }) {
            println!("{:<4}{}", ICON_ENGINE.dimmed(), msg.italic());
        }
    }

    fn victory(&self) {
        if self.items.iter().any(ViewItem::is_victory) {
            println!("{:<4}{}\n", ICON_CELEBRATE, "You escaped the cave!".victory_style());
        }
    }

    fn game_summary(&self) {
        if let Some(ViewItem::GameSummary {
            outcome,
            turns,
            hp,
            gold,
        }) = self.items.iter().find(|i| i.is_game_summary())
        {
            println!("{}", "Game Over".subheading_style());
            println!("   Outcome: {}", outcome.bold());
            println!("   Turns:   {turns}");
            println!("   HP:      {hp}");
            println!("   Gold:    {}", gold.to_string().item_style());
            println!();
        }
    }

    fn action_menu(&self) {
        if let Some(ViewItem::ActionMenu(lines)) = self.items.iter().find(|i| i.is_action_menu()) {
            println!("{}", "Choose an action:".prompt_style());
            for line in lines {
                let (hotkey, name) = line.split_once(": ").unwrap_or(("", line.as_str()));
                println!("{}: {name}", hotkey.hotkey_style());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_flush_moves_items_to_history() {
        let mut view = View::recorded();
        view.push(ViewItem::TileDescription("A damp passage.".into()));
        view.push(ViewItem::LootTaken("Dagger (damage 10)".into()));
        view.flush();
        assert!(view.items.is_empty());
        assert_eq!(view.history.len(), 2);
        assert!(view.history[0].is_tile_description());
    }

    #[test]
    fn flush_of_empty_frame_is_noop() {
        let mut view = View::recorded();
        view.flush();
        assert!(view.history.is_empty());
    }

    #[test]
    fn terminal_flush_clears_frame() {
        let mut view = View::new();
        view.push(ViewItem::Error("Invalid action!".into()));
        view.push(ViewItem::ActionMenu(vec!["f: Flee".into(), "a: Attack".into()]));
        view.flush();
        assert!(view.items.is_empty());
        assert!(view.history.is_empty());
    }
}
