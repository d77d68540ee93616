//! Tile definitions.
//!
//! Every addressable location in the cave is a [`Tile`]. Tile variants form a closed set
//! ([`TileKind`]); each decides its own intro text, its passive effect on a player standing
//! on it, and which actions it offers, all from its current state.
//!
//! Two variants carry state that changes during play:
//! - loot rooms hold `Some(item)` until the first visit, then `None` (loot-present -> loot-taken);
//! - enemy rooms hold an [`Enemy`] that stays in the room after death (enemy-alive -> enemy-dead).
//!
//! Neither transition ever reverses.

use log::info;
use variantly::Variantly;

use crate::action::Action;
use crate::enemy::Enemy;
use crate::health::LivingEntity;
use crate::item::Item;
use crate::player::Player;
use crate::view::{View, ViewItem};
use crate::world::{CaveMap, Coord};

const STARTING_ROOM_TEXT: &str = "You find yourself in a cave with a flickering torch on the wall. \
     You can make out four paths, each equally as dark and foreboding.";
const EMPTY_PATH_TEXT: &str = "Another unremarkable part of the cave. You must forge onwards.";
const FIND_DAGGER_TEXT: &str = "You notice something shiny in the corner. It's a dagger! You pick it up.";
const FIND_GOLD_TEXT: &str = "You notice some gold on the ground. You pick it up.";
const SPIDER_ALIVE_TEXT: &str = "A giant spider jumps down from its web in front of you!";
const SPIDER_DEAD_TEXT: &str = "The corpse of a dead spider rots on the ground.";
const OGRE_ALIVE_TEXT: &str = "An ogre is looking at you very aggressively.";
const OGRE_DEAD_TEXT: &str = "The corpse of an ogre rots on the ground.";
const LEAVE_CAVE_TEXT: &str = "You see a bright light in the distance... it grows as you get closer! \
     It's sunlight!\n\nVictory is yours!";

/// The variants a tile can take, with their variant-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum TileKind {
    StartingRoom,
    EmptyCavePath,
    FindDaggerRoom { item: Option<Item> },
    FindGoldRoom { item: Option<Item> },
    GiantSpiderRoom { enemy: Enemy },
    OgreRoom { enemy: Enemy },
    LeaveCaveRoom,
}

/// One room of the cave, positioned on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub coord: Coord,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(coord: Coord, kind: TileKind) -> Tile {
        Tile { coord, kind }
    }

    /// The loot still lying here, if this is a loot room with something left in it.
    pub fn loot(&self) -> Option<&Item> {
        match &self.kind {
            TileKind::FindDaggerRoom { item } | TileKind::FindGoldRoom { item } => item.as_ref(),
            _ => None,
        }
    }

    /// The enemy in this room, dead or alive.
    pub fn enemy(&self) -> Option<&Enemy> {
        match &self.kind {
            TileKind::GiantSpiderRoom { enemy } | TileKind::OgreRoom { enemy } => Some(enemy),
            _ => None,
        }
    }

    /// Mutable access to the enemy in this room.
    pub fn enemy_mut(&mut self) -> Option<&mut Enemy> {
        match &mut self.kind {
            TileKind::GiantSpiderRoom { enemy } | TileKind::OgreRoom { enemy } => Some(enemy),
            _ => None,
        }
    }

    /// The enemy in this room, only while it is still alive.
    pub fn living_enemy(&self) -> Option<&Enemy> {
        self.enemy().filter(|enemy| enemy.is_alive())
    }

    /// Description shown on entering the tile, reflecting its current state.
    pub fn intro_text(&self) -> &'static str {
        match &self.kind {
            TileKind::StartingRoom => STARTING_ROOM_TEXT,
            TileKind::EmptyCavePath => EMPTY_PATH_TEXT,
            TileKind::FindDaggerRoom { item: Some(_) } => FIND_DAGGER_TEXT,
            TileKind::FindGoldRoom { item: Some(_) } => FIND_GOLD_TEXT,
            TileKind::FindDaggerRoom { item: None } | TileKind::FindGoldRoom { item: None } => EMPTY_PATH_TEXT,
            TileKind::GiantSpiderRoom { enemy } => {
                if enemy.is_alive() {
                    SPIDER_ALIVE_TEXT
                } else {
                    SPIDER_DEAD_TEXT
                }
            },
            TileKind::OgreRoom { enemy } => {
                if enemy.is_alive() {
                    OGRE_ALIVE_TEXT
                } else {
                    OGRE_DEAD_TEXT
                }
            },
            TileKind::LeaveCaveRoom => LEAVE_CAVE_TEXT,
        }
    }

    /// Apply this tile's passive effect to a player standing on it.
    ///
    /// Loot moves into the inventory once and is gone afterwards. A living enemy hits the
    /// player every turn. The exit marks the player victorious.
    pub fn modify_player(&mut self, player: &mut Player, view: &mut View) {
        match &mut self.kind {
            TileKind::FindDaggerRoom { item } | TileKind::FindGoldRoom { item } => {
                if let Some(loot) = item.take() {
                    info!("{} picked up {loot} at {}", player.name, self.coord);
                    view.push(ViewItem::LootTaken(loot.to_string()));
                    player.inventory.push(loot);
                }
            },
            TileKind::GiantSpiderRoom { enemy } | TileKind::OgreRoom { enemy } => {
                if enemy.is_alive() {
                    player.damage(enemy.damage);
                    info!(
                        "{} hit {} for {} ({} hp left)",
                        enemy.name,
                        player.name,
                        enemy.damage,
                        player.current_hp()
                    );
                    view.push(ViewItem::PlayerHarmed {
                        cause: enemy.name.clone(),
                        amount: enemy.damage,
                        hp_left: player.current_hp(),
                    });
                }
            },
            TileKind::LeaveCaveRoom => {
                if !player.victory {
                    info!("{} reached the exit at {}", player.name, self.coord);
                }
                player.victory = true;
            },
            TileKind::StartingRoom | TileKind::EmptyCavePath => {},
        }
    }

    /// The actions a player on this tile may choose from, in menu order.
    ///
    /// A living enemy pins the player down to `[Flee, Attack]`, or to `[Attack]` when the room
    /// has no neighbor to flee into. Everywhere else the player may move to any existing
    /// neighbor or check their inventory.
    pub fn available_actions(&self, map: &CaveMap) -> Vec<Action> {
        let mut actions = map.adjacent_moves(self.coord);
        if self.living_enemy().is_some() {
            let attack = Action::attack(self.coord);
            if actions.is_empty() {
                return vec![attack];
            }
            return vec![Action::flee(self.coord), attack];
        }
        // a dead enemy's room gets the full default set, inventory included
        actions.push(Action::view_inventory());
        actions
    }
}
