//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn harmed_style(&self) -> ColoredString;
    fn hotkey_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn enemy_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).bold()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn harmed_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn hotkey_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(150, 230, 30)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(250, 220, 90)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn harmed_style(&self) -> ColoredString {
        self.as_str().harmed_style()
    }
    fn hotkey_style(&self) -> ColoredString {
        self.as_str().hotkey_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
}

/// Wrapping options for a full-width paragraph.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(100))
}

/// Wrapping options for an indented paragraph.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth().min(100))
        .initial_indent("    ")
        .subsequent_indent("    ")
}
