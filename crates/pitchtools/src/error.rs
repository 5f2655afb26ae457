//! Error types for notename parsing and spelling operations.

use thiserror::Error;

/// Broad classification of a [`PitchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input text does not follow the notename grammar.
    Parse,
    /// An argument is outside of the supported domain.
    InvalidArgument,
    /// A pitch reached a state the spelling engine does not cover.
    ///
    /// This signals a defect, not bad input.
    InternalInconsistency,
}

impl ErrorKind {
    /// Returns the kind as a lowercase string (e.g., "parse").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::InternalInconsistency => "internal_inconsistency",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while parsing, formatting or respelling pitches.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    #[error("could not parse notename '{input}': {reason}")]
    InvalidNotename { input: String, reason: String },
    #[error("unknown alteration '{alteration}', expected one of {expected}")]
    UnknownAlteration {
        alteration: String,
        expected: &'static str,
    },
    #[error("divisions per semitone must be 1, 2 or 4 (got {divisions})")]
    UnsupportedDivisions { divisions: u32 },
    #[error("quantization method should be either 'round' or 'floor' (got '{method}')")]
    UnknownQuantizeMethod { method: String },
    #[error("alteration of {cents} cents is outside the supported range of +/-150 cents")]
    AlterationOutOfRange { cents: i32 },
    #[error("'{root}' cannot be used as a root for transposition")]
    UnsupportedRoot { root: String },
    #[error("cannot transpose by {interval} semitones")]
    IntervalOutOfRange { interval: f64 },
    #[error("too many notes for an enharmonic variation search ({count}, max {max})")]
    TooManyNotes { count: usize, max: usize },
    #[error("inconsistent pitch for '{notename}': {message}")]
    Inconsistent { notename: String, message: String },
}

impl PitchError {
    /// Builds an [`PitchError::InvalidNotename`] for `input`.
    pub(crate) fn invalid_notename(input: &str, reason: impl Into<String>) -> Self {
        PitchError::InvalidNotename {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code (e.g., "PITCH_001").
    ///
    /// These codes are stable and can be used for programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            PitchError::InvalidNotename { .. } => "PITCH_001",
            PitchError::UnknownAlteration { .. } => "PITCH_002",
            PitchError::UnsupportedDivisions { .. } => "PITCH_003",
            PitchError::UnknownQuantizeMethod { .. } => "PITCH_004",
            PitchError::AlterationOutOfRange { .. } => "PITCH_005",
            PitchError::UnsupportedRoot { .. } => "PITCH_006",
            PitchError::TooManyNotes { .. } => "PITCH_007",
            PitchError::Inconsistent { .. } => "PITCH_008",
            PitchError::IntervalOutOfRange { .. } => "PITCH_009",
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PitchError::InvalidNotename { .. } | PitchError::UnknownAlteration { .. } => {
                ErrorKind::Parse
            }
            PitchError::UnsupportedDivisions { .. }
            | PitchError::UnknownQuantizeMethod { .. }
            | PitchError::AlterationOutOfRange { .. }
            | PitchError::UnsupportedRoot { .. }
            | PitchError::IntervalOutOfRange { .. }
            | PitchError::TooManyNotes { .. } => ErrorKind::InvalidArgument,
            PitchError::Inconsistent { .. } => ErrorKind::InternalInconsistency,
        }
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }
}

/// Result type for pitch operations.
pub type PitchResult<T> = Result<T, PitchError>;
