#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Cave Crawl **
//! A small grid-based text adventure: find a weapon, survive the cave's inhabitants, reach daylight.

pub const CAVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod data_paths;
pub mod enemy;
pub mod error;
pub mod health;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod spinners;
pub mod style;
pub mod tile;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use action::{Action, ActionKind, dispatch_action};
pub use enemy::{Enemy, EnemyKind};
pub use error::GameError;
pub use health::LivingEntity;
pub use item::Item;
pub use loader::{build_world, load_world, load_world_from};
pub use player::Player;
pub use repl::{GameOutcome, run_game, run_repl};
pub use tile::{Tile, TileKind};
pub use view::{View, ViewItem};
pub use world::{CaveMap, CaveWorld, Coord, Direction};
