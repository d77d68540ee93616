//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn.

use variantly::Variantly;

use crate::player::AttackReport;
use crate::view::Section;

/// One line of the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub name: String,
    pub description: String,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Menu of the actions offered this turn, already formatted as `"{hotkey}: {name}"`.
    ActionMenu(Vec<String>),
    AttackResult(AttackReport),
    EngineMessage(String),
    Error(String),
    GameSummary {
        outcome: String,
        turns: usize,
        hp: i32,
        gold: u32,
    },
    Inventory(Vec<InventoryLine>),
    LootTaken(String),
    PlayerDeath {
        cause: Option<String>,
    },
    PlayerHarmed {
        cause: String,
        amount: u32,
        hp_left: i32,
    },
    TileDescription(String),
    TransitionMessage(String),
    Victory,
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::TileDescription(_) => Section::Environment,
            ViewItem::AttackResult(_) | ViewItem::Inventory(_) | ViewItem::Error(_) => Section::DirectResult,
            ViewItem::LootTaken(_) | ViewItem::PlayerHarmed { .. } | ViewItem::PlayerDeath { .. } => {
                Section::WorldResponse
            },
            ViewItem::Victory | ViewItem::GameSummary { .. } | ViewItem::EngineMessage(_) => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
            ViewItem::ActionMenu(_) => Section::Prompt,
        }
    }
}
