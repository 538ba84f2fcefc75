// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Config command implementations

use anyhow::Result;

use super::Context;
use crate::colors::{Status, StyledText};
use crate::config::{OutputFormat, PuzzleConfig};
use crate::missing::Validation;

/// Show the effective configuration
pub fn config_show(ctx: &Context) -> Result<()> {
    if ctx.wants_json() {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    let path = PuzzleConfig::resolve_path(ctx.config_path.as_deref())?;
    println!("{}", "[CONFIG]".header());
    println!("  file:       {}", path.display().to_string().path());
    println!("  validation: {}", ctx.config.validation);
    println!(
        "  format:     {}",
        match ctx.config.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );

    Ok(())
}

/// Print the config file location
pub fn config_path(ctx: &Context) -> Result<()> {
    let path = PuzzleConfig::resolve_path(ctx.config_path.as_deref())?;
    println!("{}", path.display());
    Ok(())
}

/// Update and save configuration values
pub fn config_set(
    ctx: &Context,
    validation: Option<Validation>,
    format: Option<OutputFormat>,
) -> Result<()> {
    if validation.is_none() && format.is_none() {
        println!(
            "{} Nothing to change. Use --validation or --format",
            Status::info()
        );
        return Ok(());
    }

    let mut config = ctx.config.clone();
    if let Some(v) = validation {
        config.validation = v;
    }
    if let Some(f) = format {
        config.format = f;
    }

    let path = config.save(ctx.config_path.as_deref())?;
    log::info!("saved config to {}", path.display());

    println!(
        "{} Config saved to {}",
        Status::ok(),
        path.display().to_string().path()
    );

    Ok(())
}
