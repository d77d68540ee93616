//! Data structures representing the game world.
//!
//! This module defines [`CaveWorld`], the explicitly constructed session value that owns
//! the [`CaveMap`] (every tile in the cave) and the [`Player`]. Other components refer to
//! tiles by [`Coord`] handle rather than by reference, so the map stays the single owner.

use crate::CAVE_VERSION;
use crate::action::Action;
use crate::error::GameError;
use crate::player::Player;
use crate::spinners::{SpinnerType, Spinners};
use crate::tile::Tile;

use log::info;
use std::collections::HashMap;
use std::fmt::Display;

/// An (x, y) position in the cave grid. `x` grows to the east, `y` to the south.
#[derive(Copy, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}
impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Returns the coordinate translated by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Coord {
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the neighboring coordinate in `dir`.
    pub const fn step(self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass directions a player can move in.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
}
impl Direction {
    /// The fixed order in which neighbors are checked when building movement actions.
    pub const SCAN_ORDER: [Direction; 4] = [Direction::East, Direction::West, Direction::South, Direction::North];

    /// Grid offset for one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::East => write!(f, "East"),
            Direction::West => write!(f, "West"),
            Direction::South => write!(f, "South"),
            Direction::North => write!(f, "North"),
        }
    }
}

/// Sparse mapping from coordinates to tiles, populated once at load time.
///
/// The layout never changes after construction; only the mutable payload of individual
/// tiles (loot presence, enemy health) is updated in place.
#[derive(Debug, Clone, Default)]
pub struct CaveMap {
    tiles: HashMap<Coord, Tile>,
    start: Coord,
}
impl CaveMap {
    /// Build a map from a set of tiles and the player's starting coordinate.
    ///
    /// # Errors
    /// - if no tile exists at `start`
    pub fn new(tiles: impl IntoIterator<Item = Tile>, start: Coord) -> Result<CaveMap, GameError> {
        let tiles: HashMap<Coord, Tile> = tiles.into_iter().map(|tile| (tile.coord, tile)).collect();
        if !tiles.contains_key(&start) {
            return Err(GameError::NoTileAt(start));
        }
        Ok(CaveMap { tiles, start })
    }

    /// The coordinate where a new player begins.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Number of populated tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up the tile at a coordinate, if one exists.
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Mutable lookup of the tile at a coordinate.
    pub fn tile_at_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.tiles.get_mut(&coord)
    }

    /// Movement actions toward every existing neighbor of `coord`, checked east, west, south, north.
    pub fn adjacent_moves(&self, coord: Coord) -> Vec<Action> {
        Direction::SCAN_ORDER
            .into_iter()
            .filter(|dir| self.tiles.contains_key(&coord.step(*dir)))
            .map(Action::go)
            .collect()
    }

    /// The actions legal for a player standing on the tile at `coord`.
    ///
    /// # Errors
    /// - if no tile exists at `coord`
    pub fn available_actions(&self, coord: Coord) -> Result<Vec<Action>, GameError> {
        let tile = self.tile_at(coord).ok_or(GameError::NoTileAt(coord))?;
        Ok(tile.available_actions(self))
    }
}

/// Complete state of a running game session.
///
/// `CaveWorld` holds the map and the player. It is created by the loader and then
/// mutated by the game loop and by action handlers for the rest of the session.
#[derive(Debug, Clone)]
pub struct CaveWorld {
    pub title: String,
    pub intro: String,
    pub map: CaveMap,
    pub player: Player,
    pub turn_count: usize,
    pub spinners: Spinners,
    pub version: String,
}
impl CaveWorld {
    /// Create a new session from a loaded map and a player.
    pub fn new(map: CaveMap, player: Player) -> CaveWorld {
        info!("new 'CaveWorld' created with {} tiles", map.len());
        Self {
            title: String::new(),
            intro: String::new(),
            map,
            player,
            turn_count: 0,
            spinners: Spinners::default(),
            version: CAVE_VERSION.to_string(),
        }
    }

    /// Pick a random line of flavor text for `kind`.
    pub fn spin(&self, kind: SpinnerType) -> String {
        self.spinners.spin(kind)
    }

    /// Obtain a reference to the tile the player occupies.
    ///
    /// # Errors
    /// - if the player's coordinate has no tile
    pub fn player_tile(&self) -> Result<&Tile, GameError> {
        let here = self.player.location;
        self.map.tile_at(here).ok_or(GameError::NoTileAt(here))
    }

    /// Obtain a mutable reference to the tile the player occupies.
    ///
    /// # Errors
    /// - if the player's coordinate has no tile
    pub fn player_tile_mut(&mut self) -> Result<&mut Tile, GameError> {
        let here = self.player.location;
        self.map.tile_at_mut(here).ok_or(GameError::NoTileAt(here))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::enemy::Enemy;
    use crate::tile::{Tile, TileKind};

    fn path(x: i32, y: i32) -> Tile {
        Tile::new(Coord::new(x, y), TileKind::EmptyCavePath)
    }

    fn plus_shaped_map() -> CaveMap {
        let tiles = vec![
            Tile::new(Coord::new(1, 1), TileKind::StartingRoom),
            path(2, 1),
            path(0, 1),
            path(1, 2),
            path(1, 0),
        ];
        CaveMap::new(tiles, Coord::new(1, 1)).unwrap()
    }

    #[test]
    fn coord_step_follows_compass() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin.step(Direction::East), Coord::new(4, 3));
        assert_eq!(origin.step(Direction::West), Coord::new(2, 3));
        assert_eq!(origin.step(Direction::South), Coord::new(3, 4));
        assert_eq!(origin.step(Direction::North), Coord::new(3, 2));
    }

    #[test]
    fn map_requires_start_tile() {
        let result = CaveMap::new(vec![path(0, 0)], Coord::new(5, 5));
        assert!(matches!(result, Err(GameError::NoTileAt(c)) if c == Coord::new(5, 5)));
    }

    #[test]
    fn tile_at_returns_none_outside_populated_cells() {
        let map = plus_shaped_map();
        assert!(map.tile_at(Coord::new(1, 1)).is_some());
        assert!(map.tile_at(Coord::new(0, 0)).is_none());
        assert!(map.tile_at(Coord::new(-7, 40)).is_none());
    }

    #[test]
    fn adjacent_moves_use_fixed_order() {
        let map = plus_shaped_map();
        let dirs: Vec<_> = map
            .adjacent_moves(Coord::new(1, 1))
            .into_iter()
            .map(|a| a.kind.unwrap_go())
            .collect();
        assert_eq!(
            dirs,
            vec![Direction::East, Direction::West, Direction::South, Direction::North]
        );
    }

    #[test]
    fn adjacent_moves_skip_missing_neighbors() {
        let map = plus_shaped_map();
        // (2, 1) only touches the center tile, which lies to the west
        let moves = map.adjacent_moves(Coord::new(2, 1));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, ActionKind::Go(Direction::West));
    }

    #[test]
    fn available_actions_errors_on_missing_tile() {
        let map = plus_shaped_map();
        assert!(map.available_actions(Coord::new(9, 9)).is_err());
    }

    #[test]
    fn player_tile_follows_player_location() {
        let mut tiles = vec![Tile::new(Coord::new(0, 0), TileKind::StartingRoom)];
        tiles.push(Tile::new(
            Coord::new(1, 0),
            TileKind::GiantSpiderRoom {
                enemy: Enemy::giant_spider(),
            },
        ));
        let map = CaveMap::new(tiles, Coord::new(0, 0)).unwrap();
        let mut world = CaveWorld::new(map, Player::new("Tester", 100, Coord::new(0, 0)));
        assert!(world.player_tile().unwrap().kind.is_starting_room());

        world.player.location = Coord::new(1, 0);
        assert!(world.player_tile().unwrap().enemy().is_some());

        world.player.location = Coord::new(2, 0);
        assert!(world.player_tile_mut().is_err());
    }
}
