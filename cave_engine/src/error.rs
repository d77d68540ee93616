//! Error Module
//!
//! Invariant violations inside the running game. None of these should happen when the cave
//! definition passed validation; if one does, it ends the session instead of being papered over.

use thiserror::Error;

use crate::world::Coord;

/// Broken game invariants detected while a turn is being played.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no tile exists at {0}")]
    NoTileAt(Coord),
    #[error("cannot flee from {0}: no adjacent tile to run to")]
    NoEscapeRoute(Coord),
    #[error("attack ordered at {0}, but no living enemy is there")]
    NoEnemyAt(Coord),
}
