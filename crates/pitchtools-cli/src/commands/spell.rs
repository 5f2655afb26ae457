//! Spelling commands: enharmonic, transpose and variations

use anyhow::{Context, Result};
use colored::Colorize;
use pitchtools::{
    enharmonic, enharmonic_variations, transpose, AlterationDirection, FixedSlots,
};
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, VariationsOutput};

/// Run the enharmonic command
///
/// # Arguments
/// * `notenames` - Notenames to respell
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run_enharmonic(notenames: &[String]) -> Result<ExitCode> {
    for notename in notenames {
        let respelled = enharmonic(notename)
            .with_context(|| format!("Failed to respell '{}'", notename))?;
        println!("{} {} {}", notename, "->".dimmed(), respelled.cyan().bold());
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the transpose command
///
/// # Arguments
/// * `notename` - The note to transpose
/// * `interval` - Interval in semitones, fractional values allowed
/// * `no_unusual` - Replace E#, Fb, B# and Cb by their natural equivalents
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run_transpose(notename: &str, interval: f64, no_unusual: bool) -> Result<ExitCode> {
    let transposed = transpose(notename, interval, !no_unusual)
        .with_context(|| format!("Failed to transpose '{}' by {}", notename, interval))?;
    println!(
        "{} {} {}",
        notename,
        format!("-({:+})->", interval).dimmed(),
        transposed.cyan().bold()
    );
    Ok(ExitCode::SUCCESS)
}

/// Parses a `SLOT=DIRECTION` pin, e.g. `2=flat` or `4=#`.
pub fn parse_fixed_slot(text: &str) -> Result<(u32, AlterationDirection)> {
    let (slot, direction) = text.split_once('=').with_context(|| {
        format!(
            "{}: expected SLOT=DIRECTION, got '{}'",
            error_codes::INVALID_ARGUMENT,
            text
        )
    })?;
    let slot: u32 = slot.trim().parse().with_context(|| {
        format!(
            "{}: slot must be a microtone index, got '{}'",
            error_codes::INVALID_ARGUMENT,
            slot
        )
    })?;
    let direction: AlterationDirection = direction.trim().parse()?;
    Ok((slot, direction))
}

/// Collects repeated `--fix` arguments into a slot map.
///
/// A later pin for the same slot replaces an earlier one.
pub fn parse_fixed_slots(pins: &[String]) -> Result<FixedSlots> {
    let mut slots = FixedSlots::new();
    for pin in pins {
        let (slot, direction) = parse_fixed_slot(pin)?;
        slots.insert(slot, direction);
    }
    Ok(slots)
}

/// Run the variations command
///
/// # Arguments
/// * `notes` - The notes of the chord or scale
/// * `pins` - `SLOT=DIRECTION` pins fixing the spelling of a slot
/// * `force` - Return the input spelling if nothing is consistent
/// * `json` - Print machine-readable output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run_variations(
    notes: &[String],
    pins: &[String],
    force: bool,
    json: bool,
) -> Result<ExitCode> {
    if json {
        return run_variations_json(notes, pins, force);
    }

    let fixed_slots = parse_fixed_slots(pins)?;
    let variations = enharmonic_variations(notes, &fixed_slots, force)
        .context("Failed to search enharmonic variations")?;

    if variations.is_empty() {
        println!(
            "{} no consistent spelling of {}",
            "WARNING".yellow().bold(),
            notes.join(" ")
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} variation(s) of {}",
        "Found".cyan().bold(),
        variations.len(),
        notes.join(" ")
    );
    for row in &variations {
        println!("  {}", row.join(" "));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_variations_json(notes: &[String], pins: &[String], force: bool) -> Result<ExitCode> {
    let output = match parse_fixed_slots(pins) {
        Err(e) => VariationsOutput::failure(
            notes.to_vec(),
            vec![JsonError::new(error_codes::INVALID_ARGUMENT, format!("{:#}", e))],
        ),
        Ok(fixed_slots) => match enharmonic_variations(notes, &fixed_slots, force) {
            Ok(variations) => VariationsOutput::success(notes.to_vec(), variations),
            Err(e) => VariationsOutput::failure(notes.to_vec(), vec![JsonError::from(&e)]),
        },
    };
    let code = if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };
    let json = serde_json::to_string_pretty(&output)
        .with_context(|| format!("{}: failed to serialize output", error_codes::JSON_SERIALIZE))?;
    println!("{}", json);
    Ok(code)
}
