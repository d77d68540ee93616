#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Cave Crawl **
//! Terminal entry point.

use cave_engine::style::{GameStyle, normal_block};
use cave_engine::{load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::fill;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading cave...");
    let mut world = load_world().context("while loading CaveWorld")?;
    info!("CaveWorld loaded successfully (v{}).", world.version);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^60}", world.title.bright_yellow().underline());
    println!("\nYou are {}.\n", world.player.name.bold().bright_blue());
    if !world.intro.is_empty() {
        println!("{}\n", fill(&world.intro, normal_block()).description_style());
    }

    let outcome = run_repl(&mut world)?;
    info!("session ended: {outcome:?}");
    Ok(())
}
