//! `repl::movement` module
//!
//! Contains handlers for actions that change player location.

use anyhow::Result;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::action::dispatch_action;
use crate::error::GameError;
use crate::spinners::SpinnerType;
use crate::view::{View, ViewItem};
use crate::world::{CaveWorld, Coord, Direction};

/// Step the player one tile in `dir` and show the destination's intro text.
///
/// # Errors
/// - if no tile exists at the destination
pub fn move_handler(world: &mut CaveWorld, view: &mut View, dir: Direction) -> Result<()> {
    let (dx, dy) = dir.delta();
    let to = world.player.move_by(dx, dy);
    let tile = world.map.tile_at(to).ok_or(GameError::NoTileAt(to))?;
    info!("{} moved {dir} to {to}", world.player.name);
    view.push(ViewItem::TileDescription(tile.intro_text().to_string()));
    Ok(())
}

/// Run from the tile at `tile` along a randomly chosen open path.
///
/// # Errors
/// - if the tile has no neighbors to run to
/// - if the chosen move fails
pub fn flee_handler<R: Rng + ?Sized>(world: &mut CaveWorld, view: &mut View, tile: Coord, rng: &mut R) -> Result<()> {
    let moves = world.map.adjacent_moves(tile);
    let Some(escape) = moves.choose(rng).cloned() else {
        return Err(GameError::NoEscapeRoute(tile).into());
    };
    info!("{} fled from {tile} via '{}'", world.player.name, escape.name);
    view.push(ViewItem::TransitionMessage(world.spin(SpinnerType::Flee)));
    dispatch_action(world, view, &escape, rng)
}
