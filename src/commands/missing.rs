// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Missing number command

use anyhow::Result;
use std::io::{self, IsTerminal, Read};

use super::Context;
use crate::colors::{Status, StyledText};
use crate::error::PuzzleError;
use crate::missing::MissingNumberFinder;

/// Find and print the missing number
pub fn find_missing(
    ctx: &Context,
    values: &[i64],
    expected: Option<usize>,
    strict: bool,
    from_stdin: bool,
) -> Result<()> {
    let finder = if strict {
        MissingNumberFinder::strict()
    } else {
        ctx.config.finder()
    };

    let owned;
    let values = if from_stdin {
        let interactive = io::stdin().is_terminal();
        if interactive {
            eprint!("Enter the number of elements, then the elements: ");
        }
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        owned = parse_counted_values(&input)?;
        owned.as_slice()
    } else {
        values
    };

    let range_size = expected.unwrap_or(values.len() + 1);
    log::info!(
        "missing: {} values, range size {}, {} validation",
        values.len(),
        range_size,
        finder.validation()
    );

    let missing = match expected {
        Some(m) => finder.find_in_range(values, m)?,
        None => finder.find(values)?,
    };

    if ctx.wants_json() {
        let out = serde_json::json!({
            "missing": missing,
            "range_size": range_size,
            "validation": finder.validation(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} Missing number is: {}",
            Status::ok(),
            missing.to_string().count()
        );
    }

    Ok(())
}

/// Parse a count followed by that many integers, separated by whitespace.
///
/// Tokens after the counted values are ignored.
pub fn parse_counted_values(input: &str) -> std::result::Result<Vec<i64>, PuzzleError> {
    let mut tokens = input.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| PuzzleError::Parse("expected the number of elements".to_string()))?;
    let count: usize = count_token
        .parse()
        .map_err(|_| PuzzleError::Parse(format!("invalid element count '{}'", count_token)))?;

    // The count is untrusted input; grow as values actually arrive
    let mut values = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        let token = tokens.next().ok_or_else(|| {
            PuzzleError::Parse(format!("expected {} elements, got {}", count, index))
        })?;
        let value = token
            .parse()
            .map_err(|_| PuzzleError::Parse(format!("invalid integer '{}'", token)))?;
        values.push(value);
    }

    let extra = tokens.count();
    if extra > 0 {
        log::warn!("ignoring {} trailing tokens after {} elements", extra, count);
    }

    Ok(values)
}
