use serde::{Deserialize, Serialize};

/// Top-level cave definition loaded by the engine.
///
/// `rows[y][x]` names the tile at coordinate `(x, y)`; `x` grows to the east and
/// `y` grows to the south. `None` cells are solid rock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaveDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub player: PlayerDef,
    #[serde(default)]
    pub enemies: EnemyTable,
    #[serde(default)]
    pub loot: LootTable,
    pub rows: Vec<Vec<Option<TileDef>>>,
}

impl CaveDef {
    /// Iterate over every populated cell as `(x, y, tile)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, TileDef)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|tile| (to_coord(x), to_coord(y), tile)))
        })
    }

    /// Returns the tile named at `(x, y)`, if any.
    pub fn tile_def_at(&self, x: i32, y: i32) -> Option<TileDef> {
        let row = self.rows.get(usize::try_from(y).ok()?)?;
        row.get(usize::try_from(x).ok()?).copied().flatten()
    }
}

fn to_coord(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// The kinds of tile a cave cell may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileDef {
    StartingRoom,
    EmptyCavePath,
    FindDaggerRoom,
    FindGoldRoom,
    GiantSpiderRoom,
    OgreRoom,
    LeaveCaveRoom,
}

impl TileDef {
    /// Returns `true` for tiles that hold an enemy.
    pub fn has_enemy(self) -> bool {
        matches!(self, TileDef::GiantSpiderRoom | TileDef::OgreRoom)
    }
}

/// Item definitions, used for the starting inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemDef {
    Gold { amount: u32 },
    Rock,
    Dagger { damage: u32 },
}

/// Starting configuration for the player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default = "default_max_hp")]
    pub max_hp: i32,
    #[serde(default = "default_inventory")]
    pub inventory: Vec<ItemDef>,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            max_hp: default_max_hp(),
            inventory: default_inventory(),
        }
    }
}

/// Stats for a single enemy type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub name: String,
    pub hp: i32,
    pub damage: u32,
}

/// Stats for every enemy type that can appear in a cave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTable {
    #[serde(default = "default_giant_spider")]
    pub giant_spider: EnemyDef,
    #[serde(default = "default_ogre")]
    pub ogre: EnemyDef,
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self {
            giant_spider: default_giant_spider(),
            ogre: default_ogre(),
        }
    }
}

/// Values of the items found lying around in loot rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootTable {
    #[serde(default = "default_dagger_damage")]
    pub dagger_damage: u32,
    #[serde(default = "default_gold_amount")]
    pub gold_amount: u32,
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            dagger_damage: default_dagger_damage(),
            gold_amount: default_gold_amount(),
        }
    }
}

fn default_player_name() -> String {
    "Adventurer".to_string()
}

fn default_max_hp() -> i32 {
    100
}

fn default_inventory() -> Vec<ItemDef> {
    vec![ItemDef::Gold { amount: 15 }, ItemDef::Rock]
}

fn default_giant_spider() -> EnemyDef {
    EnemyDef {
        name: "Giant Spider".to_string(),
        hp: 10,
        damage: 2,
    }
}

fn default_ogre() -> EnemyDef {
    EnemyDef {
        name: "Ogre".to_string(),
        hp: 30,
        damage: 15,
    }
}

fn default_dagger_damage() -> u32 {
    10
}

fn default_gold_amount() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CAVE: &str = r#"
        CaveDef(
            title: "Test Cave",
            rows: [
                [Some(StartingRoom), Some(EmptyCavePath)],
                [None, Some(LeaveCaveRoom)],
            ],
        )
    "#;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let def: CaveDef = ron::from_str(SMALL_CAVE).unwrap();
        assert_eq!(def.player.max_hp, 100);
        assert_eq!(def.player.inventory, vec![ItemDef::Gold { amount: 15 }, ItemDef::Rock]);
        assert_eq!(def.enemies.ogre.damage, 15);
        assert_eq!(def.loot.dagger_damage, 10);
        assert!(def.intro.is_empty());
    }

    #[test]
    fn cells_skip_empty_positions() {
        let def: CaveDef = ron::from_str(SMALL_CAVE).unwrap();
        let cells: Vec<_> = def.cells().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, TileDef::StartingRoom),
                (1, 0, TileDef::EmptyCavePath),
                (1, 1, TileDef::LeaveCaveRoom),
            ]
        );
    }

    #[test]
    fn tile_def_at_handles_out_of_range() {
        let def: CaveDef = ron::from_str(SMALL_CAVE).unwrap();
        assert_eq!(def.tile_def_at(1, 1), Some(TileDef::LeaveCaveRoom));
        assert_eq!(def.tile_def_at(0, 1), None);
        assert_eq!(def.tile_def_at(-1, 0), None);
        assert_eq!(def.tile_def_at(5, 5), None);
    }
}
