//! Notename grammar, lookup tables and midinote formatting.

mod alteration;
mod constants;
mod format;
mod parse;

#[cfg(test)]
mod tests;

pub use alteration::{
    accidental_name, alteration_to_cents, cents_repr, validate_divisions, Accidental, Alteration,
};
pub use constants::{
    A4_MIDINOTE, DEFAULT_DIVISIONS, DEFAULT_REFERENCE_FREQ, DIATONIC_NAMES, MIN_FREQ,
    SUPPORTED_DIVISIONS,
};
pub use format::{
    format_midinote, midi_to_note_parts, quantize_midinote, ChromaticParts, QuantizeMethod,
};
pub use parse::{
    construct_notename, is_valid_notename, notename_to_midinote, notename_upper, split_cents,
    split_notename, NoteParts, DEFAULT_MIN_PITCH, MAX_CENTS_DEVIATION, MAX_OCTAVE,
};

pub(crate) use constants::{
    chromatic_pitch_class, flat_name, is_black_key, semitone_of, sharp_name,
};
