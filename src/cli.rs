// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::missing::Validation;

/// numpuzzle - find missing numbers and count staircase climbs
#[derive(Parser)]
#[command(name = "numpuzzle")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Find the missing number in a range and count staircase climbs", long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "NUMPUZZLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the value missing from a permutation of 1..=m
    #[command(visible_alias = "miss")]
    Missing {
        /// Sequence values (omit with --stdin)
        #[arg(allow_negative_numbers = true, conflicts_with = "stdin")]
        values: Vec<i64>,

        /// Range size m; inferred as the number of values + 1 when omitted
        #[arg(long, short = 'e')]
        expected: Option<usize>,

        /// Reject duplicates and out-of-range values
        #[arg(long)]
        strict: bool,

        /// Read a count followed by that many integers from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Count the ways to climb a staircase taking 1 or 2 steps at a time
    #[command(visible_alias = "climb")]
    Stairs {
        /// Number of steps
        #[arg(allow_negative_numbers = true)]
        steps: i64,

        /// Print counts for every step count from 0 up to STEPS
        #[arg(long)]
        table: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Update configuration values
    Set {
        /// Validation mode for `missing`
        #[arg(long, value_enum)]
        validation: Option<Validation>,

        /// Default output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_missing_with_expected() {
        let cli = Cli::parse_from(["numpuzzle", "missing", "2", "3", "1", "5", "--expected", "5"]);
        match cli.command {
            Commands::Missing {
                values, expected, ..
            } => {
                assert_eq!(values, vec![2, 3, 1, 5]);
                assert_eq!(expected, Some(5));
            }
            _ => panic!("expected missing command"),
        }
    }

    #[test]
    fn test_parse_negative_steps() {
        let cli = Cli::parse_from(["numpuzzle", "stairs", "-3"]);
        assert!(matches!(cli.command, Commands::Stairs { steps: -3, .. }));
    }
}
