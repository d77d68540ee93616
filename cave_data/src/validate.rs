use std::fmt;

use crate::*;

/// Validation error for a malformed `CaveDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyLayout,
    RaggedRow { row: usize, len: usize, expected: usize },
    StartCount { found: usize },
    NoExit,
    NoEscapeRoute { x: i32, y: i32 },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyLayout => write!(f, "cave layout has no rows"),
            ValidationError::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has {len} cells (expected {expected})")
            },
            ValidationError::StartCount { found } => {
                write!(f, "cave needs exactly one StartingRoom (found {found})")
            },
            ValidationError::NoExit => write!(f, "cave has no LeaveCaveRoom"),
            ValidationError::NoEscapeRoute { x, y } => {
                write!(f, "enemy tile at ({x}, {y}) has no adjacent tile to flee to")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the layout and basic invariants of a `CaveDef`.
///
/// ```
/// use cave_data::{CaveDef, EnemyTable, LootTable, PlayerDef, TileDef, validate_cave};
///
/// let cave = CaveDef {
///     title: "Demo".into(),
///     intro: String::new(),
///     player: PlayerDef::default(),
///     enemies: EnemyTable::default(),
///     loot: LootTable::default(),
///     rows: vec![vec![Some(TileDef::StartingRoom), Some(TileDef::LeaveCaveRoom)]],
/// };
/// assert!(validate_cave(&cave).is_empty());
/// ```
pub fn validate_cave(cave: &CaveDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if cave.title.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "cave title missing".to_string(),
        });
    }

    check_layout_shape(&cave.rows, &mut errors);

    let starts = cave.cells().filter(|(_, _, t)| *t == TileDef::StartingRoom).count();
    if starts != 1 && !cave.rows.is_empty() {
        errors.push(ValidationError::StartCount { found: starts });
    }
    if !cave.rows.is_empty() && !cave.cells().any(|(_, _, t)| t == TileDef::LeaveCaveRoom) {
        errors.push(ValidationError::NoExit);
    }

    // every enemy must leave the player somewhere to run to
    for (x, y, tile) in cave.cells() {
        if tile.has_enemy() && !has_neighbor(cave, x, y) {
            errors.push(ValidationError::NoEscapeRoute { x, y });
        }
    }

    if cave.player.max_hp <= 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("player max_hp must be positive ({})", cave.player.max_hp),
        });
    }
    for item in &cave.player.inventory {
        check_item(item, &mut errors, "player inventory");
    }
    check_enemy(&cave.enemies.giant_spider, &mut errors);
    check_enemy(&cave.enemies.ogre, &mut errors);
    if cave.loot.dagger_damage == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "loot dagger_damage is zero".to_string(),
        });
    }

    errors
}

fn check_layout_shape(rows: &[Vec<Option<TileDef>>], errors: &mut Vec<ValidationError>) {
    let Some(first) = rows.first() else {
        errors.push(ValidationError::EmptyLayout);
        return;
    };
    let expected = first.len();
    for (row, cells) in rows.iter().enumerate().skip(1) {
        if cells.len() != expected {
            errors.push(ValidationError::RaggedRow {
                row,
                len: cells.len(),
                expected,
            });
        }
    }
}

fn has_neighbor(cave: &CaveDef, x: i32, y: i32) -> bool {
    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .iter()
        .any(|(dx, dy)| cave.tile_def_at(x + dx, y + dy).is_some())
}

fn check_item(item: &ItemDef, errors: &mut Vec<ValidationError>, context: &str) {
    if let ItemDef::Dagger { damage: 0 } = item {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: dagger damage is zero"),
        });
    }
}

fn check_enemy(enemy: &EnemyDef, errors: &mut Vec<ValidationError>) {
    if enemy.hp <= 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("enemy '{}' hp must be positive ({})", enemy.name, enemy.hp),
        });
    }
    if enemy.damage == 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("enemy '{}' damage is zero", enemy.name),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cave() -> CaveDef {
        CaveDef {
            title: "Demo".into(),
            intro: "Intro".into(),
            player: PlayerDef::default(),
            enemies: EnemyTable::default(),
            loot: LootTable::default(),
            rows: vec![
                vec![Some(TileDef::StartingRoom), Some(TileDef::GiantSpiderRoom)],
                vec![None, Some(TileDef::LeaveCaveRoom)],
            ],
        }
    }

    #[test]
    fn valid_cave_has_no_errors() {
        assert!(validate_cave(&base_cave()).is_empty());
    }

    #[test]
    fn empty_layout_is_reported() {
        let mut cave = base_cave();
        cave.rows.clear();
        assert_eq!(validate_cave(&cave), vec![ValidationError::EmptyLayout]);
    }

    #[test]
    fn ragged_rows_are_reported() {
        let mut cave = base_cave();
        cave.rows[1].push(None);

        let errors = validate_cave(&cave);
        assert!(errors.contains(&ValidationError::RaggedRow {
            row: 1,
            len: 3,
            expected: 2
        }));
    }

    #[test]
    fn missing_or_extra_start_is_reported() {
        let mut cave = base_cave();
        cave.rows[0][0] = Some(TileDef::EmptyCavePath);
        assert!(validate_cave(&cave).contains(&ValidationError::StartCount { found: 0 }));

        let mut cave = base_cave();
        cave.rows[1][0] = Some(TileDef::StartingRoom);
        assert!(validate_cave(&cave).contains(&ValidationError::StartCount { found: 2 }));
    }

    #[test]
    fn missing_exit_is_reported() {
        let mut cave = base_cave();
        cave.rows[1][1] = Some(TileDef::EmptyCavePath);
        assert!(validate_cave(&cave).contains(&ValidationError::NoExit));
    }

    #[test]
    fn isolated_enemy_is_reported() {
        let mut cave = base_cave();
        cave.rows = vec![
            vec![Some(TileDef::StartingRoom), None, Some(TileDef::OgreRoom)],
            vec![Some(TileDef::LeaveCaveRoom), None, None],
        ];
        assert!(validate_cave(&cave).contains(&ValidationError::NoEscapeRoute { x: 2, y: 0 }));
    }

    #[test]
    fn bad_stats_are_reported() {
        let mut cave = base_cave();
        cave.player.max_hp = 0;
        cave.enemies.ogre.damage = 0;
        cave.player.inventory.push(ItemDef::Dagger { damage: 0 });

        let errors = validate_cave(&cave);
        let invalid = errors
            .iter()
            .filter(|err| matches!(err, ValidationError::InvalidValue { .. }))
            .count();
        assert_eq!(invalid, 3);
    }

    #[test]
    fn errors_render_readably() {
        let err = ValidationError::NoEscapeRoute { x: 3, y: 4 };
        assert_eq!(err.to_string(), "enemy tile at (3, 4) has no adjacent tile to flee to");
    }
}
