//! Loader utilities for building a `CaveWorld` from serialized data.
//!
//! The cave layout, enemy stats, loot values and starting player are read from a RON
//! [`CaveDef`], validated as a whole, and only then turned into live game state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use cave_data::{CaveDef, TileDef};
use log::info;

use crate::data_paths::data_path;
use crate::enemy::{Enemy, EnemyKind};
use crate::item::Item;
use crate::player::Player;
use crate::tile::{Tile, TileKind};
use crate::world::{CaveMap, CaveWorld, Coord};

/// Load the `CaveWorld` from the shipped `cave.ron`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world() -> Result<CaveWorld> {
    load_world_from(&data_path("cave.ron"))
}

/// Load, validate and build a `CaveWorld` from the RON file at `path`.
///
/// # Errors
/// - if the file can't be read or parsed
/// - if the definition fails validation
pub fn load_world_from(path: &Path) -> Result<CaveWorld> {
    let def = load_cave_def(path)?;
    validate_cave_def(&def)?;
    build_world(&def).context("while building world from cave definition")
}

/// Read and deserialize a `CaveDef` without validating it.
///
/// # Errors
/// - if the file can't be read or parsed
pub fn load_cave_def(path: &Path) -> Result<CaveDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading cave definition from {}", path.display()))?;
    let def: CaveDef = ron::from_str(&text).with_context(|| format!("parsing cave definition from {}", path.display()))?;
    info!("cave definition \"{}\" loaded from {}", def.title, path.display());
    Ok(def)
}

/// Validate the `CaveDef` and return a single aggregated error.
fn validate_cave_def(def: &CaveDef) -> Result<()> {
    let errors = cave_data::validate_cave(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("cave definition validation failed:\n{details}");
}

/// Turn a (validated) definition into a playable world.
///
/// # Errors
/// - if the layout has no starting room
pub fn build_world(def: &CaveDef) -> Result<CaveWorld> {
    let start = def
        .cells()
        .find(|(_, _, tile)| *tile == TileDef::StartingRoom)
        .map(|(x, y, _)| Coord::new(x, y))
        .context("cave layout has no starting room")?;

    let tiles: Vec<Tile> = def
        .cells()
        .map(|(x, y, tile)| Tile::new(Coord::new(x, y), tile_kind(def, tile)))
        .collect();
    let map = CaveMap::new(tiles, start)?;
    info!("{} tiles added to CaveWorld", map.len());

    let player = Player::from_def(&def.player, start);
    info!("player \"{}\" added to CaveWorld at {start}", player.name);

    let mut world = CaveWorld::new(map, player);
    world.title.clone_from(&def.title);
    world.intro.clone_from(&def.intro);
    Ok(world)
}

fn tile_kind(def: &CaveDef, tile: TileDef) -> TileKind {
    match tile {
        TileDef::StartingRoom => TileKind::StartingRoom,
        TileDef::EmptyCavePath => TileKind::EmptyCavePath,
        TileDef::FindDaggerRoom => TileKind::FindDaggerRoom {
            item: Some(Item::Dagger {
                damage: def.loot.dagger_damage,
            }),
        },
        TileDef::FindGoldRoom => TileKind::FindGoldRoom {
            item: Some(Item::Gold {
                amount: def.loot.gold_amount,
            }),
        },
        TileDef::GiantSpiderRoom => TileKind::GiantSpiderRoom {
            enemy: Enemy::from_def(EnemyKind::GiantSpider, &def.enemies.giant_spider),
        },
        TileDef::OgreRoom => TileKind::OgreRoom {
            enemy: Enemy::from_def(EnemyKind::Ogre, &def.enemies.ogre),
        },
        TileDef::LeaveCaveRoom => TileKind::LeaveCaveRoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::LivingEntity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TINY_CAVE: &str = r#"
CaveDef(
    title: "Tiny",
    loot: LootTable(dagger_damage: 7, gold_amount: 3),
    rows: [
        [Some(StartingRoom), Some(FindDaggerRoom)],
        [Some(OgreRoom),     Some(LeaveCaveRoom)],
    ],
)
"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builds_world_from_definition() {
        let file = write_temp(TINY_CAVE);
        let world = load_world_from(file.path()).unwrap();
        assert_eq!(world.title, "Tiny");
        assert_eq!(world.map.len(), 4);
        assert_eq!(world.player.location, Coord::new(0, 0));
        assert_eq!(world.player.inventory, vec![Item::Gold { amount: 15 }, Item::Rock]);

        let dagger_room = world.map.tile_at(Coord::new(1, 0)).unwrap();
        assert_eq!(dagger_room.loot(), Some(&Item::Dagger { damage: 7 }));
        let ogre = world.map.tile_at(Coord::new(0, 1)).unwrap().enemy().unwrap();
        assert_eq!(ogre.current_hp(), 30);
    }

    #[test]
    fn invalid_definition_reports_every_problem() {
        let file = write_temp(
            r#"CaveDef(title: "Broken", rows: [[Some(EmptyCavePath), None], [None, Some(OgreRoom)]])"#,
        );
        let err = load_world_from(file.path()).unwrap_err().to_string();
        assert!(err.contains("validation failed"));
        let problems = err.lines().filter(|line| line.starts_with("- ")).count();
        // no start, no exit, an ogre with nowhere to flee
        assert_eq!(problems, 3);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(load_world_from(Path::new("/definitely/not/here/cave.ron")).is_err());
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let file = write_temp("CaveDef(title: ");
        let err = load_world_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing cave definition"));
    }

    #[test]
    fn shipped_cave_loads() {
        let world = load_world().unwrap();
        assert_eq!(world.player.location, Coord::new(2, 2));
        assert!(world.player_tile().unwrap().kind.is_starting_room());
    }
}
