//! Lookup tables for notenames, alterations and accidentals.

/// Default reference frequency (A4) in Hz.
pub const DEFAULT_REFERENCE_FREQ: f64 = 442.0;

/// Frequencies below this value (in Hz) are mapped to midinote 0.
pub const MIN_FREQ: f64 = 9.0;

/// MIDI note of A4, the pitch the reference frequency applies to.
pub const A4_MIDINOTE: f64 = 69.0;

/// Default number of divisions per semitone used when notating pitches.
pub const DEFAULT_DIVISIONS: u32 = 4;

/// Supported numbers of divisions per semitone for notation.
pub const SUPPORTED_DIVISIONS: [u32; 3] = [1, 2, 4];

/// The diatonic letters, in ascending order starting at C.
pub const DIATONIC_NAMES: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Semitone offsets for note names (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(crate) const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Chromatic pitch names spelled with sharps.
pub(crate) const SHARPS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic pitch names spelled with flats.
pub(crate) const FLATS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Pitch classes of the black keys of a piano keyboard.
pub(crate) const BLACK_KEYS: [i32; 5] = [1, 3, 6, 8, 10];

/// Alteration symbols and their deviation in cents.
pub(crate) const ALTERATION_CENTS: [(&str, i32); 13] = [
    ("#+", 150),
    ("#>", 125),
    ("#", 100),
    ("#<", 75),
    ("+", 50),
    (">", 25),
    ("", 0),
    ("<", -25),
    ("-", -50),
    ("b>", -75),
    ("b", -100),
    ("b<", -125),
    ("b-", -150),
];

/// Human readable list of the symbols in [`ALTERATION_CENTS`].
pub(crate) const ALTERATION_SYMBOLS: &str = "#+, #>, #, #<, +, >, '', <, -, b>, b, b<, b-";

/// Pitch class of every single-alteration chromatic spelling.
///
/// `E#`, `Fb`, `B#` and `Cb` are included. The pitch class of `B#` is 0 and
/// that of `Cb` is 11, even though they sound in the neighbouring octave.
pub(crate) const CHROMATIC_PITCH_CLASSES: [(&str, i32); 21] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("E#", 5),
    ("Fb", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("B#", 0),
    ("Cb", 11),
];

/// Returns the semitone offset of a diatonic letter (case-insensitive).
pub(crate) fn semitone_of(letter: char) -> Option<i32> {
    let letter = letter.to_ascii_uppercase();
    SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s)
}

/// Returns the index (0=C .. 6=B) of a diatonic letter (case-insensitive).
pub(crate) fn diatonic_index_of(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    DIATONIC_NAMES.iter().position(|c| *c == letter)
}

/// Returns true if the pitch class is a black key.
pub(crate) fn is_black_key(pitch_class: i32) -> bool {
    BLACK_KEYS.contains(&pitch_class.rem_euclid(12))
}

/// Sharp spelling of a pitch class, wrapping around the octave.
pub(crate) fn sharp_name(pitch_class: i32) -> &'static str {
    SHARPS[pitch_class.rem_euclid(12) as usize]
}

/// Flat spelling of a pitch class, wrapping around the octave.
pub(crate) fn flat_name(pitch_class: i32) -> &'static str {
    FLATS[pitch_class.rem_euclid(12) as usize]
}

/// Pitch class of a chromatic spelling like "C#" or "Cb".
pub(crate) fn chromatic_pitch_class(name: &str) -> Option<i32> {
    CHROMATIC_PITCH_CLASSES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, pc)| *pc)
}
