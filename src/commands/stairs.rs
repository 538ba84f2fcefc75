// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Staircase command

use anyhow::Result;

use super::Context;
use crate::colors::{separator, Status, StyledText};
use crate::staircase::{count_staircase_ways, staircase_table, MAX_EXACT_STEPS};

/// Print the number of ways to climb `steps` stairs
pub fn count_stairs(ctx: &Context, steps: i64) -> Result<()> {
    let ways = count_staircase_ways(steps)?;
    log::info!("stairs: {} steps -> {} ways", steps, ways);

    if ctx.wants_json() {
        // u128 does not round-trip through JSON numbers, emit as a string
        let out = serde_json::json!({
            "steps": steps,
            "ways": ways.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} Ways to climb {} steps: {}",
            Status::ok(),
            steps,
            ways.to_string().count()
        );
    }

    Ok(())
}

/// Print way counts for every step count in `0..=steps`
pub fn stairs_table(ctx: &Context, steps: i64) -> Result<()> {
    if steps > MAX_EXACT_STEPS {
        // Surface the overflow error for the requested size
        count_staircase_ways(steps)?;
    }

    let rows: Vec<(i64, u128)> = staircase_table().take_while(|(n, _)| *n <= steps).collect();

    if ctx.wants_json() {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(n, ways)| serde_json::json!({ "steps": n, "ways": ways.to_string() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{} No step counts up to {}", Status::info(), steps);
        return Ok(());
    }

    for line in render_table(&rows) {
        println!("{}", line);
    }

    Ok(())
}

/// Text table lines: header, separator, one row per step count.
///
/// Cells are padded before styling so escape codes do not affect alignment.
fn render_table(rows: &[(i64, u128)]) -> Vec<String> {
    let width = rows
        .last()
        .map(|(_, ways)| ways.to_string().len())
        .unwrap_or(1)
        .max(4);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{}  {}",
        format!("{:>5}", "Steps").header(),
        format!("{:>width$}", "Ways", width = width).header()
    ));
    lines.push(separator(width + 7).to_string());
    for (n, ways) in rows {
        lines.push(format!(
            "{:>5}  {}",
            n,
            format!("{:>width$}", ways, width = width).count()
        ));
    }
    lines
}
