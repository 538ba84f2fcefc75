// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Staircase counting
//!
//! Number of distinct ways to climb `n` stairs taking one or two steps per
//! move. For `n >= 1` this is the Fibonacci number `F(n + 1)`. A staircase
//! with no steps counts as zero ways, as do negative step counts.

use crate::error::{PuzzleError, Result};

/// Largest step count whose way count fits in a `u128` (`F(186)`)
pub const MAX_EXACT_STEPS: i64 = 185;

/// Ways to climb `step_count` stairs with moves of 1 or 2.
///
/// Returns [`PuzzleError::Overflow`] when `step_count > MAX_EXACT_STEPS`.
pub fn count_staircase_ways(step_count: i64) -> Result<u128> {
    log::debug!("counting staircase ways for {} steps", step_count);

    match step_count {
        n if n <= 0 => Ok(0),
        1 => Ok(1),
        n => {
            let (mut a, mut b): (u128, u128) = (1, 1);
            for _ in 2..=n {
                let next = a.checked_add(b).ok_or(PuzzleError::Overflow {
                    steps: n,
                    max: MAX_EXACT_STEPS,
                })?;
                a = b;
                b = next;
            }
            Ok(b)
        }
    }
}

/// Iterator over `(step_count, ways)` starting at zero steps.
///
/// Ends after [`MAX_EXACT_STEPS`] rather than wrapping.
#[derive(Debug, Clone)]
pub struct StaircaseWays {
    step: i64,
    prev: u128,
    current: u128,
}

impl Iterator for StaircaseWays {
    type Item = (i64, u128);

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.step {
            0 => (0, 0),
            1 => (1, 1),
            n if n > MAX_EXACT_STEPS => return None,
            n => {
                let next = self.prev.checked_add(self.current)?;
                self.prev = self.current;
                self.current = next;
                (n, next)
            }
        };
        self.step += 1;
        Some(item)
    }
}

/// Way counts for every step count from 0 up to [`MAX_EXACT_STEPS`]
pub fn staircase_table() -> StaircaseWays {
    StaircaseWays {
        step: 0,
        prev: 1,
        current: 1,
    }
}
