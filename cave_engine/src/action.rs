//! Action module
//!
//! Describes the commands offered to the player each turn. An [`Action`] is a plain value:
//! a behavior tag ([`ActionKind`]) carrying whatever parameters it needs, plus the menu
//! name and hotkey. Actions are not tied to any player; [`dispatch_action`] binds one to
//! the session's player when it is executed.

use std::fmt::Display;

use anyhow::Result;
use log::info;
use rand::Rng;
use variantly::Variantly;

use crate::repl::{attack_handler, flee_handler, inv_handler, move_handler};
use crate::view::View;
use crate::world::{CaveWorld, Coord, Direction};

/// The behaviors an action can trigger, with their bound parameters.
///
/// Parameters that refer to places in the cave are [`Coord`] handles into the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ActionKind {
    /// Step one tile in a direction.
    Go(Direction),
    /// List the player's inventory.
    ViewInventory,
    /// Strike the enemy on the tile at `enemy_at`.
    Attack { enemy_at: Coord },
    /// Run to a random neighbor of `tile`.
    Flee { tile: Coord },
}

/// A legal, user-selectable command for the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub name: &'static str,
    pub hotkey: char,
}

impl Action {
    /// Movement one tile in `dir`.
    pub fn go(dir: Direction) -> Action {
        let (name, hotkey) = match dir {
            Direction::North => ("Move North", 'n'),
            Direction::South => ("Move South", 's'),
            Direction::East => ("Move East", 'e'),
            Direction::West => ("Move West", 'w'),
        };
        Action {
            kind: ActionKind::Go(dir),
            name,
            hotkey,
        }
    }

    pub fn view_inventory() -> Action {
        Action {
            kind: ActionKind::ViewInventory,
            name: "View inventory",
            hotkey: 'i',
        }
    }

    /// Attack the enemy living on the tile at `enemy_at`.
    pub fn attack(enemy_at: Coord) -> Action {
        Action {
            kind: ActionKind::Attack { enemy_at },
            name: "Attack",
            hotkey: 'a',
        }
    }

    /// Flee from the tile at `tile` to a random neighbor.
    pub fn flee(tile: Coord) -> Action {
        Action {
            kind: ActionKind::Flee { tile },
            name: "Flee",
            hotkey: 'f',
        }
    }

    /// Returns true if `input` is exactly this action's hotkey (case-sensitive).
    pub fn matches(&self, input: &str) -> bool {
        let mut chars = input.chars();
        chars.next() == Some(self.hotkey) && chars.next().is_none()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.hotkey, self.name)
    }
}

/// Find the offered action whose hotkey matches `input` exactly.
pub fn find_by_hotkey<'a>(actions: &'a [Action], input: &str) -> Option<&'a Action> {
    actions.iter().find(|action| action.matches(input))
}

/// Execute `action` on behalf of the session's player.
///
/// This is the single dispatch point from behavior tags to handlers.
///
/// # Errors
/// Propagates invariant violations from the handlers (missing tiles, nowhere to flee).
pub fn dispatch_action<R: Rng + ?Sized>(
    world: &mut CaveWorld,
    view: &mut View,
    action: &Action,
    rng: &mut R,
) -> Result<()> {
    info!("{} chose '{}'", world.player.name, action.name);
    match action.kind {
        ActionKind::Go(dir) => move_handler(world, view, dir)?,
        ActionKind::ViewInventory => inv_handler(world, view),
        ActionKind::Attack { enemy_at } => attack_handler(world, view, enemy_at)?,
        ActionKind::Flee { tile } => flee_handler(world, view, tile, rng)?,
    }
    Ok(())
}
