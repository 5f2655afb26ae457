//! Notate command implementation
//!
//! Shows how a pitch is written: spelling, alteration, accidental and staff position.

use anyhow::{Context, Result};
use colored::Colorize;
use pitchtools::{notated_pitch, NotatedPitch, Pitch, PitchResult};
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, NotateOutput, NotationInfo};

/// Interprets a command-line pitch: numbers are midinotes, anything else a notename.
pub fn parse_pitch(input: &str) -> Pitch {
    match input.trim().parse::<f64>() {
        Ok(midinote) => Pitch::Midinote(midinote),
        Err(_) => Pitch::from(input),
    }
}

/// Notates `input` with `divisions` steps per semitone.
pub fn notate(input: &str, divisions: u32) -> PitchResult<NotatedPitch> {
    notated_pitch(parse_pitch(input), divisions)
}

/// Run the notate command
///
/// # Arguments
/// * `input` - A notename or a midinote
/// * `divisions` - Divisions per semitone (1, 2 or 4)
/// * `json` - Print machine-readable output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, divisions: u32, json: bool) -> Result<ExitCode> {
    if json {
        return run_json(input, divisions);
    }

    let pitch = notate(input, divisions).with_context(|| format!("Failed to notate '{}'", input))?;
    let info = NotationInfo::from_notated(&pitch);

    println!("{} {}", "Notename:".cyan().bold(), info.notename);
    println!("  midinote:             {}", info.midinote);
    println!("  octave:               {}", info.octave);
    println!(
        "  spelling:             {} ({})",
        info.chromatic_name, info.diatonic_name
    );
    println!("  diatonic alteration:  {}", info.diatonic_alteration);
    println!("  chromatic alteration: {}", info.chromatic_alteration);
    println!("  cents deviation:      {}", info.cents_deviation);
    match &info.accidental {
        Some(accidental) => println!("  accidental:           {}", accidental),
        None => println!("  accidental:           {}", "out of range".yellow()),
    }
    println!("  vertical position:    {}", info.vertical_position);
    println!(
        "  microtone index:      {} (of {})",
        info.microtone_index,
        12 * pitch.divisions()
    );
    println!(
        "  key:                  {}",
        if info.black_key { "black" } else { "white" }
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str, divisions: u32) -> Result<ExitCode> {
    let (output, code) = match notate(input, divisions) {
        Ok(pitch) => (
            NotateOutput::success(NotationInfo::from_notated(&pitch)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            NotateOutput::failure(vec![JsonError::from(&e).with_input(input)]),
            ExitCode::from(1),
        ),
    };
    let json = serde_json::to_string_pretty(&output)
        .with_context(|| format!("{}: failed to serialize output", error_codes::JSON_SERIALIZE))?;
    println!("{}", json);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pitch() {
        assert_eq!(parse_pitch("60.5"), Pitch::Midinote(60.5));
        assert_eq!(parse_pitch("4C#"), Pitch::Notename("4C#".to_string()));
        assert_eq!(parse_pitch("-1C"), Pitch::Notename("-1C".to_string()));
    }

    #[test]
    fn test_notate_notename() {
        let pitch = notate("4C#+15", 4).unwrap();
        assert_eq!(pitch.fullname(), "4C#+15");
        assert_eq!(pitch.chromatic_name(), "C#");
        assert!(pitch.is_black_key());
    }

    #[test]
    fn test_notate_midinote_is_quantized() {
        let pitch = notate("60.1", 4).unwrap();
        assert_eq!(pitch.fullname(), "4C");
    }

    #[test]
    fn test_notate_rejects_unsupported_divisions() {
        let err = notate("4C", 3).unwrap_err();
        assert_eq!(err.code(), "PITCH_003");
    }
}
