// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Missing number in a contiguous range
//!
//! Given the integers `1..=m` with exactly one value removed and the rest in
//! any order, recover the removed value. The range size `m` is either
//! inferred from the sequence (`len + 1`) or supplied by the caller.
//!
//! The sum of `1..=m` is the triangular number `m * (m + 1) / 2`; the missing
//! value is that sum minus the sum of the sequence. Both sums are carried in
//! `i128` so no intermediate can overflow for any slice that fits in memory.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// How much the finder trusts the caller's input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Validation {
    /// Single pass, no allocation. A violated precondition yields an error
    /// only when the difference cannot be a member of the range.
    #[default]
    Trust,
    /// Check every value is in `1..=m` and appears once.
    Strict,
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validation::Trust => write!(f, "trust"),
            Validation::Strict => write!(f, "strict"),
        }
    }
}

/// Finds the single absent value of a `1..=m` permutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingNumberFinder {
    validation: Validation,
}

impl MissingNumberFinder {
    pub fn new(validation: Validation) -> Self {
        Self { validation }
    }

    /// Finder that rejects duplicates and out-of-range values
    pub fn strict() -> Self {
        Self::new(Validation::Strict)
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Missing value, inferring the range size as `sequence.len() + 1`.
    ///
    /// An empty sequence is the range `{1}` with its only member removed,
    /// so the answer is `1`.
    pub fn find(&self, sequence: &[i64]) -> Result<i64> {
        let range_size = sequence.len().checked_add(1).ok_or_else(|| {
            PuzzleError::InvalidInput("sequence too long to describe a range".to_string())
        })?;
        self.solve(sequence, range_size)
    }

    /// Missing value for an explicit range size `expected_count`.
    ///
    /// The sequence must hold exactly `expected_count - 1` values.
    pub fn find_in_range(&self, sequence: &[i64], expected_count: usize) -> Result<i64> {
        if expected_count == 0 || sequence.len() != expected_count - 1 {
            return Err(PuzzleError::LengthMismatch {
                expected: expected_count,
                actual: sequence.len(),
            });
        }
        self.solve(sequence, expected_count)
    }

    fn solve(&self, sequence: &[i64], range_size: usize) -> Result<i64> {
        log::debug!(
            "finding missing number: {} values, range 1..={}, validation={}",
            sequence.len(),
            range_size,
            self.validation
        );

        if self.validation == Validation::Strict {
            check_members(sequence, range_size)?;
        }

        let expected = triangular(range_size);
        let actual: i128 = sequence.iter().map(|&v| i128::from(v)).sum();
        let missing = expected - actual;

        if missing < 1 || missing > range_size as i128 {
            return Err(PuzzleError::InvalidInput(format!(
                "sequence is not 1..={} with one value removed (difference of sums is {})",
                range_size, missing
            )));
        }

        i64::try_from(missing)
            .map_err(|_| PuzzleError::InvalidInput(format!("missing value {} exceeds i64", missing)))
    }
}

/// Sum of `1..=m`.
///
/// One of `m` and `m + 1` is even; halving it before the multiply keeps the
/// product below `2^127` for every `usize`.
pub fn triangular(m: usize) -> i128 {
    let m = m as i128;
    if m % 2 == 0 {
        (m / 2) * (m + 1)
    } else {
        m * ((m + 1) / 2)
    }
}

fn check_members(sequence: &[i64], range_size: usize) -> Result<()> {
    let mut seen = vec![false; range_size];
    for &value in sequence {
        let slot = usize::try_from(value)
            .ok()
            .filter(|v| (1..=range_size).contains(v))
            .ok_or(PuzzleError::OutOfRange {
                value,
                max: range_size,
            })?;
        if std::mem::replace(&mut seen[slot - 1], true) {
            return Err(PuzzleError::DuplicateValue(value));
        }
    }
    Ok(())
}

/// Missing value of `1..=len+1`, trusting the input shape
pub fn find_missing_number(sequence: &[i64]) -> Result<i64> {
    MissingNumberFinder::default().find(sequence)
}

/// Missing value of `1..=expected_count`, trusting the input shape
pub fn find_missing_number_in_range(sequence: &[i64], expected_count: usize) -> Result<i64> {
    MissingNumberFinder::default().find_in_range(sequence, expected_count)
}
