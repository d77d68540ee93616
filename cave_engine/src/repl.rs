//! Game loop and action handlers.
//!
//! The game runs in a read-eval-print loop. This module drives the turn sequence and its
//! submodules implement the handlers that manipulate the [`CaveWorld`].

pub mod combat;
pub mod input;
pub mod inventory;
pub mod movement;

pub use combat::*;
pub use input::{InputEvent, InputManager, LineSource, ScriptedInput};
pub use inventory::*;
pub use movement::*;

use std::fmt::Display;

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use crate::action::{Action, dispatch_action, find_by_hotkey};
use crate::error::GameError;
use crate::health::LivingEntity;
use crate::spinners::SpinnerType;
use crate::style::GameStyle;
use crate::tile::Tile;
use crate::view::{View, ViewItem};
use crate::world::CaveWorld;

const ACTION_PROMPT: &str = "Action: ";

/// How a game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Victory,
    Death,
    /// Input ran out before the game was decided.
    Abandoned,
}
impl Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Victory => write!(f, "Escaped the cave"),
            GameOutcome::Death => write!(f, "Died in the dark"),
            GameOutcome::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// Play `world` in the terminal until the player wins, dies, or closes input.
///
/// # Errors
/// - Propagates failures from [`run_game`].
pub fn run_repl(world: &mut CaveWorld) -> Result<GameOutcome> {
    let mut view = View::new();
    let mut input = InputManager::new();
    let mut rng = rand::rng();
    run_game(world, &mut view, &mut input, &mut rng)
}

/// Run turns until the player is dead, has won, or `input` is exhausted.
///
/// Each turn: the current tile acts on the player; a dead or victorious player ends the game
/// before any prompt; otherwise the tile's actions are shown and input is read until it names
/// one of them exactly, and that action is dispatched.
///
/// # Errors
/// - if the player stands on (or is sent to) a coordinate with no tile
/// - if a handler reports a broken invariant (nowhere to flee, no enemy to attack)
/// - if reading input fails
pub fn run_game<S, R>(world: &mut CaveWorld, view: &mut View, input: &mut S, rng: &mut R) -> Result<GameOutcome>
where
    S: LineSource + ?Sized,
    R: Rng + ?Sized,
{
    view.push(ViewItem::TileDescription(world.player_tile()?.intro_text().to_string()));

    let outcome = loop {
        world.turn_count += 1;
        info!("================> BEGIN TURN {} <================", world.turn_count);

        let here = world.player.location;
        let tile = world.map.tile_at_mut(here).ok_or(GameError::NoTileAt(here))?;
        tile.modify_player(&mut world.player, view);

        if !world.player.is_alive() {
            let cause = world.map.tile_at(here).and_then(Tile::enemy).map(|e| e.kind.to_string());
            info!("{} died at {here}", world.player.name);
            view.push(ViewItem::PlayerDeath { cause });
            break GameOutcome::Death;
        }
        if world.player.victory {
            view.push(ViewItem::Victory);
            break GameOutcome::Victory;
        }

        let actions = world.map.available_actions(here)?;
        view.push(ViewItem::ActionMenu(actions.iter().map(ToString::to_string).collect()));
        view.flush();

        let Some(action) = read_action(world, view, input, &actions)? else {
            info!("input closed on turn {}", world.turn_count);
            view.push(ViewItem::EngineMessage(world.spin(SpinnerType::Abandon)));
            break GameOutcome::Abandoned;
        };
        dispatch_action(world, view, &action, rng)?;
    };

    info!("game over after {} turns: {outcome:?}", world.turn_count);
    view.push(ViewItem::GameSummary {
        outcome: outcome.to_string(),
        turns: world.turn_count,
        hp: world.player.current_hp(),
        gold: world.player.gold(),
    });
    view.flush();
    Ok(outcome)
}

/// Prompt until the input is exactly one of the offered hotkeys. `None` means input ended.
fn read_action<S: LineSource + ?Sized>(
    world: &CaveWorld,
    view: &mut View,
    input: &mut S,
    actions: &[Action],
) -> Result<Option<Action>> {
    let prompt = ACTION_PROMPT.prompt_style().to_string();
    loop {
        let line = match input.read_line(&prompt).context("while reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(None),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Canceled. Choose an action.".to_string()));
                view.flush();
                continue;
            },
        };
        if let Some(action) = find_by_hotkey(actions, &line) {
            return Ok(Some(action.clone()));
        }
        info!("unrecognized input {line:?}");
        view.push(ViewItem::Error(world.spin(SpinnerType::InvalidHotkey)));
        view.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::item::Item;
    use crate::player::Player;
    use crate::tile::TileKind;
    use crate::world::{CaveMap, Coord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // start (0,0) -> dagger (1,0) -> spider (2,0) -> exit (3,0)
    fn line_world() -> CaveWorld {
        let tiles = vec![
            Tile::new(Coord::new(0, 0), TileKind::StartingRoom),
            Tile::new(
                Coord::new(1, 0),
                TileKind::FindDaggerRoom {
                    item: Some(Item::Dagger { damage: 10 }),
                },
            ),
            Tile::new(
                Coord::new(2, 0),
                TileKind::GiantSpiderRoom {
                    enemy: Enemy::giant_spider(),
                },
            ),
            Tile::new(Coord::new(3, 0), TileKind::LeaveCaveRoom),
        ];
        let map = CaveMap::new(tiles, Coord::new(0, 0)).unwrap();
        CaveWorld::new(map, Player::new("Tester", 100, Coord::new(0, 0)))
    }

    #[test]
    fn straight_run_reaches_the_exit() {
        let mut world = line_world();
        let mut view = View::recorded();
        let mut input = ScriptedInput::new(["e", "e", "a", "e"]);
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = run_game(&mut world, &mut view, &mut input, &mut rng).unwrap();
        assert_eq!(outcome, GameOutcome::Victory);
        assert_eq!(input.prompts_seen(), 4);
        assert_eq!(world.turn_count, 5);
        // one spider bite on arrival
        assert_eq!(world.player.current_hp(), 98);
        assert!(view.history.last().unwrap().is_game_summary());
    }

    #[test]
    fn invalid_hotkeys_reprompt_without_consuming_a_turn() {
        let mut world = line_world();
        let mut view = View::recorded();
        let mut input = ScriptedInput::new(["x", "E", "i", "w"]);
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = run_game(&mut world, &mut view, &mut input, &mut rng).unwrap();
        assert_eq!(outcome, GameOutcome::Abandoned);
        let errors = view.history.iter().filter(|i| i.is_error()).count();
        // "x", "E" and "w" are not offered at the start
        assert_eq!(errors, 3);
        assert_eq!(world.turn_count, 2);
        assert_eq!(world.player.location, Coord::new(0, 0));
    }

    #[test]
    fn missing_start_tile_is_fatal() {
        let mut world = line_world();
        world.player.location = Coord::new(40, 40);
        let mut view = View::recorded();
        let mut input = ScriptedInput::new(["e"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(run_game(&mut world, &mut view, &mut input, &mut rng).is_err());
    }
}
