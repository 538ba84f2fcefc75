// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! numpuzzle - Library
//!
//! Two small, pure numeric puzzles:
//!
//! - **Missing number** - recover the one value removed from a permutation
//!   of `1..=m`, with `m` inferred from the sequence or given explicitly.
//! - **Staircase counting** - the number of ways to climb `n` stairs taking
//!   one or two steps at a time.
//!
//! ```rust
//! use numpuzzle::{count_staircase_ways, find_missing_number, find_missing_number_in_range};
//!
//! assert_eq!(find_missing_number(&[1, 2, 4, 5]).unwrap(), 3);
//! assert_eq!(find_missing_number_in_range(&[2, 3, 1, 5], 5).unwrap(), 4);
//! assert_eq!(count_staircase_ways(5).unwrap(), 8);
//! ```

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod error;
pub mod missing;
pub mod staircase;

// Re-export commonly used items
pub use cli::{Cli, Commands, ConfigCommands};
pub use config::{OutputFormat, PuzzleConfig};
pub use error::{PuzzleError, Result};
pub use missing::{
    find_missing_number, find_missing_number_in_range, triangular, MissingNumberFinder, Validation,
};
pub use staircase::{count_staircase_ways, staircase_table, StaircaseWays, MAX_EXACT_STEPS};
