//! Formatting midinotes as notenames and quantizing pitches.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{flat_name, is_black_key, sharp_name};
use crate::error::{PitchError, PitchResult};

/// The chromatic components of a midinote, as chosen by the formatter.
///
/// `symbol` is one of "", "+", "-", ">" or "<" and is only set when
/// `cents` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChromaticParts {
    pub octave: i32,
    pub chromatic_name: &'static str,
    pub symbol: &'static str,
    pub cents: i32,
}

impl ChromaticParts {
    fn new(octave: i32, chromatic_name: &'static str, symbol: &'static str, cents: i32) -> Self {
        Self {
            octave,
            chromatic_name,
            symbol,
            cents,
        }
    }
}

/// Splits a midinote into octave, chromatic spelling, microtone symbol and cents.
///
/// The spelling is deterministic: exact semitones use sharps, pitches more
/// than 50 cents above a semitone are written as a flat of the next semitone
/// with negative cents, quarter tones above a black key are written as the
/// next white key lowered by a quarter tone.
///
/// # Examples
/// ```
/// use pitchtools::note::midi_to_note_parts;
///
/// let parts = midi_to_note_parts(60.5, true);
/// assert_eq!((parts.octave, parts.chromatic_name, parts.symbol, parts.cents), (4, "C", "+", 0));
///
/// let parts = midi_to_note_parts(61.2, true);
/// assert_eq!((parts.octave, parts.chromatic_name, parts.symbol, parts.cents), (4, "C#", "", 20));
/// ```
pub fn midi_to_note_parts(midinote: f64, eighth_tone_symbols: bool) -> ChromaticParts {
    let whole = midinote.floor();
    let micro = midinote - whole;
    let whole = whole as i64;
    let mut octave = (whole.div_euclid(12) - 1) as i32;
    let mut pitch_class = whole.rem_euclid(12) as i32;
    let cents = (micro * 100.0 + 0.5).floor() as i32;

    match cents {
        0 => ChromaticParts::new(octave, sharp_name(pitch_class), "", 0),
        50 => {
            if is_black_key(pitch_class) {
                ChromaticParts::new(octave, sharp_name(pitch_class + 1), "-", 0)
            } else {
                ChromaticParts::new(octave, sharp_name(pitch_class), "+", 0)
            }
        }
        25 if eighth_tone_symbols => {
            let name = if pitch_class == 6 || pitch_class == 10 {
                flat_name(pitch_class)
            } else {
                sharp_name(pitch_class)
            };
            ChromaticParts::new(octave, name, ">", 0)
        }
        75 if eighth_tone_symbols => {
            advance_pitch_class(&mut octave, &mut pitch_class);
            let name = if is_black_key(pitch_class) {
                flat_name(pitch_class)
            } else {
                sharp_name(pitch_class)
            };
            ChromaticParts::new(octave, name, "<", 0)
        }
        c if c > 50 => {
            advance_pitch_class(&mut octave, &mut pitch_class);
            ChromaticParts::new(octave, flat_name(pitch_class), "", c - 100)
        }
        c => ChromaticParts::new(octave, sharp_name(pitch_class), "", c),
    }
}

fn advance_pitch_class(octave: &mut i32, pitch_class: &mut i32) {
    *pitch_class += 1;
    if *pitch_class > 11 {
        *pitch_class = 0;
        *octave += 1;
    }
}

/// Formats a midinote as a canonical (octave first) notename.
///
/// Numeric cents are explicitly signed and zero-padded to two digits.
///
/// # Examples
/// ```
/// use pitchtools::note::format_midinote;
///
/// assert_eq!(format_midinote(61.2, true), "4C#+20");
/// assert_eq!(format_midinote(60.05, true), "4C+05");
/// assert_eq!(format_midinote(63.7, true), "4E-30");
/// assert_eq!(format_midinote(60.25, true), "4C>");
/// assert_eq!(format_midinote(60.25, false), "4C+25");
/// ```
pub fn format_midinote(midinote: f64, eighth_tone_symbols: bool) -> String {
    let parts = midi_to_note_parts(midinote, eighth_tone_symbols);
    let ChromaticParts {
        octave,
        chromatic_name,
        symbol,
        cents,
    } = parts;
    match cents {
        0 => format!("{}{}{}", octave, chromatic_name, symbol),
        c if c > 0 => format!("{}{}+{:02}", octave, chromatic_name, c),
        c => format!("{}{}-{:02}", octave, chromatic_name, -c),
    }
}

/// How a midinote is snapped to a pitch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantizeMethod {
    /// Nearest grid point (ties to even).
    #[default]
    Round,
    /// Next lower grid point.
    Floor,
}

impl FromStr for QuantizeMethod {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round" => Ok(QuantizeMethod::Round),
            "floor" => Ok(QuantizeMethod::Floor),
            other => Err(PitchError::UnknownQuantizeMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// Quantizes a midinote to a grid of `divisions` steps per semitone.
///
/// # Examples
/// ```
/// use pitchtools::note::{quantize_midinote, QuantizeMethod};
///
/// assert_eq!(quantize_midinote(60.1, 4, QuantizeMethod::Round).unwrap(), 60.0);
/// assert_eq!(quantize_midinote(60.2, 4, QuantizeMethod::Round).unwrap(), 60.25);
/// assert_eq!(quantize_midinote(60.7, 2, QuantizeMethod::Floor).unwrap(), 60.5);
/// ```
pub fn quantize_midinote(
    midinote: f64,
    divisions: u32,
    method: QuantizeMethod,
) -> PitchResult<f64> {
    if divisions == 0 {
        return Err(PitchError::UnsupportedDivisions { divisions });
    }
    let divisions = divisions as f64;
    let steps = match method {
        QuantizeMethod::Round => (midinote * divisions).round_ties_even(),
        QuantizeMethod::Floor => (midinote * divisions).floor(),
    };
    Ok(steps / divisions)
}
