//! Conversion commands: n2m, m2n, n2f and f2n
//!
//! Each command maps every input to one output line.

use anyhow::{Context, Result};
use colored::Colorize;
use pitchtools::PitchConverter;
use std::process::ExitCode;

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Notename to midinote
    N2m,
    /// Midinote to notename
    M2n,
    /// Notename to frequency
    N2f,
    /// Frequency to notename
    F2n,
}

/// Builds a converter from the `--a4` and `--no-eighth-tones` flags.
pub fn converter_from_flags(a4: f64, no_eighth_tones: bool) -> Result<PitchConverter> {
    if !(a4.is_finite() && a4 > 0.0) {
        anyhow::bail!("reference frequency must be a positive number of Hz (got {})", a4);
    }
    Ok(PitchConverter::new()
        .with_reference_freq(a4)
        .with_eighth_tone_symbols(!no_eighth_tones))
}

/// Converts a single input.
pub fn convert(converter: &PitchConverter, conversion: Conversion, input: &str) -> Result<String> {
    let output = match conversion {
        Conversion::N2m => format_number(converter.n2m(input)?),
        Conversion::N2f => format_number(converter.n2f(input)?),
        Conversion::M2n => converter.m2n(parse_number(input, "midinote")?),
        Conversion::F2n => converter.f2n(parse_number(input, "frequency")?),
    };
    Ok(output)
}

/// Run a conversion command
///
/// # Arguments
/// * `conversion` - Which conversion to apply
/// * `inputs` - Notenames, midinotes or frequencies, depending on `conversion`
/// * `a4` - Reference frequency in Hz
/// * `no_eighth_tones` - Write 25/75 cents numerically instead of `>`/`<`
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    conversion: Conversion,
    inputs: &[String],
    a4: f64,
    no_eighth_tones: bool,
) -> Result<ExitCode> {
    let converter = converter_from_flags(a4, no_eighth_tones)?;
    for input in inputs {
        let output = convert(&converter, conversion, input)
            .with_context(|| format!("Failed to convert '{}'", input))?;
        println!("{} {} {}", input, "->".dimmed(), output.cyan().bold());
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_number(input: &str, what: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .with_context(|| format!("'{}' is not a valid {}", input, what))
}

/// Formats a number with at most six decimals and no trailing zeros.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    rounded.to_string()
}
