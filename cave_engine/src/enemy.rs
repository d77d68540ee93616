//! Enemy Module
//!
//! The monsters that guard enemy rooms. An enemy is alive while its hit points stay above zero.

use cave_data::EnemyDef;
use std::fmt::Display;

use crate::health::{HealthState, LivingEntity};

/// The species of an enemy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    GiantSpider,
    Ogre,
}
impl Display for EnemyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnemyKind::GiantSpider => write!(f, "giant spider"),
            EnemyKind::Ogre => write!(f, "ogre"),
        }
    }
}

/// A hostile creature occupying a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: String,
    pub damage: u32,
    pub health: HealthState,
}
impl Enemy {
    pub fn new(kind: EnemyKind, name: &str, hp: i32, damage: u32) -> Enemy {
        Enemy {
            kind,
            name: name.to_string(),
            damage,
            health: HealthState::new_at_max(hp),
        }
    }

    /// Build an enemy of `kind` from its definition.
    pub fn from_def(kind: EnemyKind, def: &EnemyDef) -> Enemy {
        Enemy::new(kind, &def.name, def.hp, def.damage)
    }

    /// A Giant Spider with stock stats (10 hp, 2 damage).
    pub fn giant_spider() -> Enemy {
        Enemy::new(EnemyKind::GiantSpider, "Giant Spider", 10, 2)
    }

    /// An Ogre with stock stats (30 hp, 15 damage).
    pub fn ogre() -> Enemy {
        Enemy::new(EnemyKind::Ogre, "Ogre", 30, 15)
    }
}
impl LivingEntity for Enemy {
    fn health(&self) -> &HealthState {
        &self.health
    }

    fn damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }
}
