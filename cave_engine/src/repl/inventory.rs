//! `repl::inventory` module

use log::info;

use crate::view::{InventoryLine, View, ViewItem};
use crate::world::CaveWorld;

/// List everything the player carries, in pickup order.
pub fn inv_handler(world: &CaveWorld, view: &mut View) {
    let lines: Vec<InventoryLine> = world
        .player
        .inventory
        .iter()
        .map(|item| InventoryLine {
            name: item.to_string(),
            description: item.description(),
        })
        .collect();
    info!("{} checked inventory ({} items)", world.player.name, lines.len());
    view.push(ViewItem::Inventory(lines));
}
