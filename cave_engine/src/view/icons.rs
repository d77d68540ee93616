//! module Icons
//!
//! Unicode icons used as prefixes for the various message types.

pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_LOOT: &str = "➕";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_ATTACK: &str = "⚔"; // U+2694
pub(crate) const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_DEATH: &str = "☠";
