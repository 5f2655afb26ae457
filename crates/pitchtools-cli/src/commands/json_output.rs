//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `notate` and `variations`. Library errors keep
//! their `PITCH_XXX` code; errors raised by the CLI itself use `CLI_XXX`.

use pitchtools::{NotatedPitch, PitchError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// A command-line argument could not be interpreted
    pub const INVALID_ARGUMENT: &str = "CLI_001";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "PITCH_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The input that caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Error category reported by the library (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            input: None,
            kind: None,
        }
    }

    /// Sets the offending input for this error.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl From<&PitchError> for JsonError {
    fn from(err: &PitchError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            input: None,
            kind: Some(err.kind().to_string()),
        }
    }
}

/// Notation details of a single pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotationInfo {
    pub notename: String,
    pub midinote: f64,
    pub octave: i32,
    pub diatonic_name: String,
    pub chromatic_name: String,
    pub diatonic_alteration: f64,
    pub chromatic_alteration: f64,
    pub cents_deviation: i32,
    /// Accidental glyph, absent when the alteration is out of range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accidental: Option<String>,
    pub vertical_position: i32,
    pub microtone_index: u32,
    pub black_key: bool,
}

impl NotationInfo {
    /// Collects the details of `pitch`.
    pub fn from_notated(pitch: &NotatedPitch) -> Self {
        Self {
            notename: pitch.fullname(),
            midinote: pitch.midinote(),
            octave: pitch.octave(),
            diatonic_name: pitch.diatonic_name().to_string(),
            chromatic_name: pitch.chromatic_name().to_string(),
            diatonic_alteration: pitch.diatonic_alteration(),
            chromatic_alteration: pitch.chromatic_alteration(),
            cents_deviation: pitch.cents_deviation(),
            accidental: pitch.accidental().ok().map(|a| a.to_string()),
            vertical_position: pitch.vertical_position(),
            microtone_index: pitch.microtone_index(pitch.divisions()),
            black_key: pitch.is_black_key(),
        }
    }
}

/// JSON output for the `notate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotateOutput {
    /// Whether notation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The notation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<NotationInfo>,
}

impl NotateOutput {
    /// Creates a successful notate output.
    pub fn success(info: NotationInfo) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(info),
        }
    }

    /// Creates a failed notate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `variations` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationsOutput {
    /// Whether the search succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The input notes
    pub notes: Vec<String>,
    /// Every consistent respelling of `notes`
    pub variations: Vec<Vec<String>>,
}

impl VariationsOutput {
    /// Creates a successful variations output.
    pub fn success(notes: Vec<String>, variations: Vec<Vec<String>>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            notes,
            variations,
        }
    }

    /// Creates a failed variations output.
    pub fn failure(notes: Vec<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            notes,
            variations: Vec::new(),
        }
    }
}
