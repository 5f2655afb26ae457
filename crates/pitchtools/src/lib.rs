//! Pitch conversion and spelling library
//!
//! This crate converts between three representations of musical pitch:
//! fractional **midinotes** (60 = C4), **frequencies** in Hz and
//! **notenames** (e.g. `4C#+20`), and provides spelling-aware operations on
//! top of that conversion.
//!
//! # Overview
//!
//! Notenames are written octave first (`4C#+20`) or letter first (`C#4+20`).
//! The microtonal suffix is either a signed number of cents or one of the
//! shortcuts `+` (+50), `-` (-50), `>` (+25) and `<` (-25).
//!
//! # Example
//!
//! ```
//! use pitchtools::{enharmonic, m2n, n2m, transpose};
//!
//! assert_eq!(n2m("4D-20").unwrap(), 61.8);
//! assert_eq!(m2n(61.2), "4C#+20");
//! assert_eq!(enharmonic("4C+").unwrap(), "4Db-");
//! assert_eq!(transpose("4Db", 2.0, true).unwrap(), "4Eb");
//! ```
//!
//! # Modules
//!
//! - [`note`]: Notename grammar, lookup tables and formatting
//! - [`converter`]: [`PitchConverter`] and the process-wide default
//! - [`notated`]: [`NotatedPitch`], a pitch in relation to its notation
//! - [`spelling`]: Enharmonics, transposition and enharmonic variations
//! - [`units`]: Intervals, amplitudes, mel scale and pitchbend
//! - [`error`]: Error types

pub mod converter;
pub mod error;
pub mod memo;
pub mod notated;
pub mod note;
pub mod spelling;
pub mod units;

// Re-export commonly used items at the crate root
pub use converter::{
    default_converter, f2m, f2n, m2f, m2n, n2f, n2m, normalize_notename, pitch_round,
    quantize_notename, reference_freq, set_default_converter, set_reference_freq, str2midi,
    PitchConverter,
};
pub use error::{ErrorKind, PitchError, PitchResult};
pub use notated::{
    notated_interval, notated_pitch, pitchclass, vertical_position, vertical_position_to_note,
    AlterationDirection, NotatedPitch, Pitch,
};
pub use note::{
    accidental_name, alteration_to_cents, construct_notename, cents_repr, format_midinote,
    is_valid_notename, midi_to_note_parts, notename_to_midinote, notename_upper,
    quantize_midinote, split_cents, split_notename, Accidental, Alteration, ChromaticParts,
    NoteParts, QuantizeMethod, DEFAULT_DIVISIONS, DEFAULT_MIN_PITCH, DEFAULT_REFERENCE_FREQ,
    MAX_CENTS_DEVIATION, MAX_OCTAVE,
};
pub use spelling::{
    enharmonic, enharmonic_variations, transpose, FixedSlots, MAX_TRANSPOSE_INTERVAL,
    MAX_VARIATION_NOTES,
};

/// Crate version, as recorded in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    /// Test the chain frequency -> midinote -> notename -> spelling.
    #[test]
    fn test_frequency_to_spelled_notename() {
        let cnv = PitchConverter::new().with_reference_freq(440.0);
        let notename = cnv.f2n(440.0);
        assert_eq!(notename, "4A");
        let third = transpose(&notename, 4.0, true).unwrap();
        assert_eq!(third, "5C#");
        assert_eq!(enharmonic(&third).unwrap(), "5Db");
    }
}
