//! Quantize command implementation
//!
//! Snaps notenames or midinotes to a grid of 1, 2 or 4 steps per semitone.

use anyhow::{Context, Result};
use colored::Colorize;
use pitchtools::note::validate_divisions;
use pitchtools::{m2n, n2m, quantize_midinote, quantize_notename, QuantizeMethod};
use std::process::ExitCode;

use super::convert::format_number;

/// Quantizes one input and returns it in the same representation.
///
/// Notenames rounded to the nearest step keep their spelling. Floor
/// quantization goes through the midinote and is respelled.
pub fn quantize(input: &str, divisions: u32, method: QuantizeMethod) -> Result<String> {
    let divisions = validate_divisions(divisions)?;
    if let Ok(midinote) = input.trim().parse::<f64>() {
        return Ok(format_number(quantize_midinote(midinote, divisions, method)?));
    }
    let quantized = match method {
        QuantizeMethod::Round => quantize_notename(input, divisions)?,
        QuantizeMethod::Floor => m2n(quantize_midinote(n2m(input)?, divisions, method)?),
    };
    Ok(quantized)
}

/// Run the quantize command
///
/// # Arguments
/// * `inputs` - Notenames or midinotes
/// * `divisions` - Divisions per semitone (1, 2 or 4)
/// * `method` - "round" or "floor"
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(inputs: &[String], divisions: u32, method: &str) -> Result<ExitCode> {
    let method: QuantizeMethod = method.parse()?;
    for input in inputs {
        let quantized = quantize(input, divisions, method)
            .with_context(|| format!("Failed to quantize '{}'", input))?;
        println!("{} {} {}", input, "->".dimmed(), quantized.cyan().bold());
    }
    Ok(ExitCode::SUCCESS)
}
