// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! numpuzzle - Main entry point
//!
//! A CLI for the missing-number and staircase-counting puzzles.

use anyhow::Result;
use clap::Parser;
use numpuzzle::colors::{Status, StyledText};
use numpuzzle::commands::{self, Context};
use numpuzzle::{Cli, Commands, ConfigCommands, PuzzleConfig};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = PuzzleConfig::load(cli.config.as_deref())?;
    let ctx = Context {
        config,
        config_path: cli.config,
        json: cli.json,
    };

    match cli.command {
        Commands::Missing {
            values,
            expected,
            strict,
            stdin,
        } => commands::find_missing(&ctx, &values, expected, strict, stdin),

        Commands::Stairs { steps, table } => {
            if table {
                commands::stairs_table(&ctx, steps)
            } else {
                commands::count_stairs(&ctx, steps)
            }
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config_show(&ctx),
            ConfigCommands::Path => commands::config_path(&ctx),
            ConfigCommands::Set { validation, format } => {
                commands::config_set(&ctx, validation, format)
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", Status::error(), e.to_string().err());
        std::process::exit(1);
    }
}
