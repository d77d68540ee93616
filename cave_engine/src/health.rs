//! Health Module
//!
//! Handles health for living entities (the player and the enemies lurking in the cave).

/// Represents the state of a living entity's health.
///
/// Hit points are signed and not clamped at zero: a 10-point blow against 5 hp leaves
/// the entity at -5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthState {
    max_hp: i32,
    current_hp: i32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: i32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health.
    pub fn damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// Abilities common to game entities that are alive
pub trait LivingEntity {
    fn health(&self) -> &HealthState;
    fn damage(&mut self, amount: u32);

    fn current_hp(&self) -> i32 {
        self.health().current_hp()
    }

    fn life_state(&self) -> LifeState {
        self.health().life_state()
    }

    fn is_alive(&self) -> bool {
        matches!(self.life_state(), LifeState::Alive)
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}
