//! Player -- module for the player character
use cave_data::PlayerDef;

use crate::enemy::Enemy;
use crate::health::{HealthState, LivingEntity};
use crate::item::Item;
use crate::world::Coord;

/// Damage dealt when the player has no weapon to swing.
pub const UNARMED_DAMAGE: u32 = 1;
/// What the combat log calls the player's bare hands.
pub const UNARMED_NAME: &str = "your bare hands";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub inventory: Vec<Item>,
    pub health: HealthState,
    pub location: Coord,
    pub victory: bool,
}
impl Player {
    /// A player with an empty inventory and full health at `location`.
    pub fn new(name: &str, max_hp: i32, location: Coord) -> Player {
        Player {
            name: name.to_string(),
            inventory: Vec::new(),
            health: HealthState::new_at_max(max_hp),
            location,
            victory: false,
        }
    }

    /// Build the starting player from its definition, placed at `start`.
    pub fn from_def(def: &PlayerDef, start: Coord) -> Player {
        let mut player = Player::new(&def.name, def.max_hp, start);
        player.inventory = def.inventory.iter().map(Item::from).collect();
        player
    }

    /// Translate the player's position. No bounds checking happens here; callers only
    /// offer moves toward tiles that exist.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> Coord {
        self.location = self.location.offset(dx, dy);
        self.location
    }

    /// The weapon with the highest damage in the inventory. The first one found wins ties.
    pub fn best_weapon(&self) -> Option<&Item> {
        let mut best: Option<(&Item, u32)> = None;
        for item in &self.inventory {
            if let Some(damage) = item.damage()
                && best.is_none_or(|(_, top)| damage > top)
            {
                best = Some((item, damage));
            }
        }
        best.map(|(item, _)| item)
    }

    /// Strike `enemy` with the best weapon at hand (or bare hands if there is none).
    pub fn attack(&self, enemy: &mut Enemy) -> AttackReport {
        let (weapon, damage) = self
            .best_weapon()
            .and_then(|w| w.damage().map(|d| (w.name().to_string(), d)))
            .unwrap_or_else(|| (UNARMED_NAME.to_string(), UNARMED_DAMAGE));
        enemy.damage(damage);
        AttackReport {
            weapon,
            target: enemy.name.clone(),
            damage,
            target_hp: enemy.current_hp(),
            killed: !enemy.is_alive(),
        }
    }

    /// Total gold carried.
    pub fn gold(&self) -> u32 {
        self.inventory.iter().map(Item::gold).sum()
    }
}
impl LivingEntity for Player {
    fn health(&self) -> &HealthState {
        &self.health
    }

    fn damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }
}

/// Outcome of a single blow against an enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub weapon: String,
    pub target: String,
    pub damage: u32,
    pub target_hp: i32,
    pub killed: bool,
}
