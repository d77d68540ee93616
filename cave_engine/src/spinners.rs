//! Flavor text spinners.
//!
//! A spinner picks one of several equivalent messages at random so repeated events
//! don't read identically every time.

use std::collections::HashMap;

use gametools::{Spinner, Wedge};
use log::warn;

/// The situations that draw a random line of flavor text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    /// Input didn't match any offered hotkey.
    InvalidHotkey,
    /// Player ran from a living enemy.
    Flee,
    /// Player closed the input stream.
    Abandon,
}
impl SpinnerType {
    pub const ALL: [SpinnerType; 3] = [SpinnerType::InvalidHotkey, SpinnerType::Flee, SpinnerType::Abandon];

    /// Built-in lines for this spinner.
    pub fn default_lines(self) -> &'static [&'static str] {
        match self {
            SpinnerType::InvalidHotkey => &[
                "Invalid action!",
                "That isn't one of your choices.",
                "You hesitate, unsure what that means.",
                "Nothing happens. Pick a hotkey from the list.",
            ],
            SpinnerType::Flee => &[
                "You turn and run!",
                "You scramble away as fast as your legs will carry you.",
                "Discretion being the better part of valor, you flee.",
            ],
            SpinnerType::Abandon => &[
                "You sit down in the dark and stop moving.",
                "The cave swallows another adventurer.",
            ],
        }
    }

    /// The line used when no spinner is available.
    pub fn fallback(self) -> &'static str {
        self.default_lines()[0]
    }
}

pub trait SpinnerExt {
    fn from_strs(words: &[&'static str]) -> Self;
}
impl SpinnerExt for Spinner<&'static str> {
    fn from_strs(words: &[&'static str]) -> Self {
        let wedges = words.iter().map(|w| Wedge::new(*w)).collect::<Vec<_>>();
        Spinner::new(wedges)
    }
}

/// Spinner table keyed by situation.
#[derive(Debug, Clone)]
pub struct Spinners {
    map: HashMap<SpinnerType, Spinner<&'static str>>,
}
impl Default for Spinners {
    fn default() -> Self {
        let map = SpinnerType::ALL
            .into_iter()
            .map(|kind| (kind, Spinner::from_strs(kind.default_lines())))
            .collect();
        Self { map }
    }
}
impl Spinners {
    /// Spin the spinner of the given type, falling back to its first built-in line.
    pub fn spin(&self, kind: SpinnerType) -> String {
        self.map.get(&kind).and_then(Spinner::spin).map_or_else(
            || {
                warn!("spinner {kind:?} produced no value, using fallback");
                kind.fallback().to_string()
            },
            ToString::to_string,
        )
    }
}
