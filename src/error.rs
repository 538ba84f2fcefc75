// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for numpuzzle

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate value in sequence: {0}")]
    DuplicateValue(i64),

    #[error("Value {value} is outside the range 1..={max}")]
    OutOfRange { value: i64, max: usize },

    #[error("Range size {expected} does not match a sequence of {actual} values")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Staircase of {steps} steps overflows u128 (largest exact count is for {max} steps)")]
    Overflow { steps: i64, max: i64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config directory not found")]
    ConfigNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
