//! Spelling-aware operations: enharmonic respelling, transposition and
//! the search for consistent enharmonic variations of a set of notes.

mod enharmonic;
mod transpose;
mod variations;


pub use enharmonic::enharmonic;
pub use transpose::{transpose, CHROMATIC_TRANSPOSITIONS, MAX_TRANSPOSE_INTERVAL};
pub use variations::{
    enharmonic_variations, FixedSlots, MAX_VARIATION_NOTES, NON_ENHARMONIC_SLOTS,
};

use crate::note::{semitone_of, Alteration, NoteParts};

/// A chromatic spelling ("C#", "Db", "E") split into letter and alteration.
fn spelling_parts(name: &str) -> (char, Alteration) {
    let mut chars = name.chars();
    let letter = chars.next().unwrap_or('C');
    let alteration = Alteration::from_symbol(chars.as_str()).unwrap_or_default();
    (letter, alteration)
}

/// Spells a pitch given in cents above midinote 0 with `name` and `cents`,
/// choosing the written octave that makes the spelling sound at `sounding_cents`.
///
/// `sounding_cents - cents` must be a whole semitone of the pitch class of `name`.
fn spell_at(sounding_cents: i64, name: &str, cents: i32) -> NoteParts {
    let (letter, alteration) = spelling_parts(name);
    let written = semitone_of(letter).unwrap_or(0) + alteration.semitones();
    let base = sounding_cents - written as i64 * 100 - cents as i64;
    NoteParts {
        octave: (base.div_euclid(1200) - 1) as i32,
        diatonic_name: letter,
        alteration,
        cents_deviation: cents,
    }
}
