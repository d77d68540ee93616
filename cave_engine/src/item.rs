//! Item types and related helpers.
//!
//! Items are the loose objects a player can carry: gold, rocks, and weapons. They are
//! immutable values; the only thing that happens to them is moving into an inventory.

use cave_data::ItemDef;
use std::fmt::Display;

/// Anything that can sit in the player's inventory or lie on a loot tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A pile of coins.
    Gold { amount: u32 },
    /// A fist-sized rock. Not a weapon.
    Rock,
    /// A weapon dealing `damage` per blow.
    Dagger { damage: u32 },
}

impl Item {
    /// The display name of the item.
    pub fn name(&self) -> &'static str {
        match self {
            Item::Gold { .. } => "Gold",
            Item::Rock => "Rock",
            Item::Dagger { .. } => "Dagger",
        }
    }

    /// A general description of the item.
    pub fn description(&self) -> String {
        match self {
            Item::Gold { amount } => format!("A round coin with {amount} stamped on the front."),
            Item::Rock => "A fist-sized rock. Heavy, but no use in a fight.".to_string(),
            Item::Dagger { .. } => "A small dagger with some rust. Somewhat more dangerous than a rock.".to_string(),
        }
    }

    /// Damage dealt per attack, or `None` if the item is not a weapon.
    pub fn damage(&self) -> Option<u32> {
        match self {
            Item::Dagger { damage } => Some(*damage),
            Item::Gold { .. } | Item::Rock => None,
        }
    }

    /// Returns true if the item can be used to attack.
    pub fn is_weapon(&self) -> bool {
        self.damage().is_some()
    }

    /// Number of gold coins this item is worth (zero for anything but gold).
    pub fn gold(&self) -> u32 {
        match self {
            Item::Gold { amount } => *amount,
            Item::Rock | Item::Dagger { .. } => 0,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Gold { amount } => write!(f, "Gold ({amount} coins)"),
            Item::Rock => write!(f, "Rock"),
            Item::Dagger { damage } => write!(f, "Dagger (damage {damage})"),
        }
    }
}

impl From<&ItemDef> for Item {
    fn from(def: &ItemDef) -> Self {
        match def {
            ItemDef::Gold { amount } => Item::Gold { amount: *amount },
            ItemDef::Rock => Item::Rock,
            ItemDef::Dagger { damage } => Item::Dagger { damage: *damage },
        }
    }
}
