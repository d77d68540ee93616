//! `repl::combat` module
//!
//! Handler for the player's attack on an enemy.

use anyhow::Result;
use log::info;

use crate::error::GameError;
use crate::health::LivingEntity;
use crate::view::{View, ViewItem};
use crate::world::{CaveWorld, Coord};

/// Strike the living enemy on the tile at `enemy_at` with the player's best weapon.
///
/// # Errors
/// - if there is no tile at `enemy_at`, or no living enemy on it
pub fn attack_handler(world: &mut CaveWorld, view: &mut View, enemy_at: Coord) -> Result<()> {
    let tile = world.map.tile_at_mut(enemy_at).ok_or(GameError::NoTileAt(enemy_at))?;
    let enemy = tile
        .enemy_mut()
        .filter(|enemy| enemy.is_alive())
        .ok_or(GameError::NoEnemyAt(enemy_at))?;
    let report = world.player.attack(enemy);
    info!(
        "{} hit {} with {} for {} ({} hp left)",
        world.player.name, report.target, report.weapon, report.damage, report.target_hp
    );
    if report.killed {
        info!("{} killed at {enemy_at}", report.target);
    }
    view.push(ViewItem::AttackResult(report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::item::Item;
    use crate::player::Player;
    use crate::tile::{Tile, TileKind};
    use crate::world::CaveMap;

    fn spider_world(inventory: Vec<Item>) -> CaveWorld {
        let at = Coord::new(0, 0);
        let tiles = vec![
            Tile::new(
                at,
                TileKind::GiantSpiderRoom {
                    enemy: Enemy::giant_spider(),
                },
            ),
            Tile::new(Coord::new(1, 0), TileKind::StartingRoom),
        ];
        let map = CaveMap::new(tiles, Coord::new(1, 0)).unwrap();
        let mut player = Player::new("Tester", 100, at);
        player.inventory = inventory;
        CaveWorld::new(map, player)
    }

    #[test]
    fn dagger_kills_spider_in_one_blow() {
        let mut world = spider_world(vec![Item::Rock, Item::Dagger { damage: 10 }]);
        let mut view = View::recorded();
        attack_handler(&mut world, &mut view, Coord::new(0, 0)).unwrap();
        let tile = world.map.tile_at(Coord::new(0, 0)).unwrap();
        assert!(tile.living_enemy().is_none());
        assert!(view.items[0].clone().unwrap_attack_result().killed);
    }

    #[test]
    fn attacking_a_corpse_is_an_error() {
        let mut world = spider_world(vec![Item::Dagger { damage: 10 }]);
        let mut view = View::recorded();
        attack_handler(&mut world, &mut view, Coord::new(0, 0)).unwrap();
        let err = attack_handler(&mut world, &mut view, Coord::new(0, 0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::NoEnemyAt(Coord::new(0, 0)))
        );
    }

    #[test]
    fn attacking_an_empty_room_is_an_error() {
        let mut world = spider_world(Vec::new());
        let mut view = View::recorded();
        assert!(attack_handler(&mut world, &mut view, Coord::new(1, 0)).is_err());
        assert!(attack_handler(&mut world, &mut view, Coord::new(9, 9)).is_err());
    }
}
