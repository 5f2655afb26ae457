//! Notename grammar: parsing notenames into their parts and into midinotes.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::alteration::{cents_repr, Alteration};
use super::constants::{diatonic_index_of, semitone_of};
use crate::error::{PitchError, PitchResult};
use crate::memo::{Memo, DEFAULT_MEMO_CAPACITY};

/// Letter first: `C#4`, `Db4+20`, `c4>`.
const LETTER_FIRST_PATTERN: &str =
    r"^(?P<letter>[A-Ha-h])(?P<alt>[#b]?)(?P<oct>-?[0-9]+)(?P<micro>[-+><↓↑][0-9]*)?$";

/// Octave first (canonical): `4C#`, `4Db+20`, `4c>`.
const OCTAVE_FIRST_PATTERN: &str =
    r"^(?P<oct>-?[0-9]+)(?P<letter>[A-Ha-h])(?P<alt>[#b]?)(?P<micro>[-+><↓↑][0-9]*)?$";

/// Lowest midinote accepted by [`is_valid_notename`] by default.
pub const DEFAULT_MIN_PITCH: f64 = 12.0;

/// Largest octave number (in either direction) a notename may carry.
pub const MAX_OCTAVE: i32 = 100;

/// Largest cents deviation (in either direction) a notename may carry.
pub const MAX_CENTS_DEVIATION: i32 = 10_000;

static LETTER_FIRST_REGEX: OnceLock<Regex> = OnceLock::new();
static OCTAVE_FIRST_REGEX: OnceLock<Regex> = OnceLock::new();

static NOTE_PARTS_MEMO: Memo<NoteParts> = Memo::new("note_parts", DEFAULT_MEMO_CAPACITY);

fn letter_first_regex() -> &'static Regex {
    LETTER_FIRST_REGEX
        .get_or_init(|| Regex::new(LETTER_FIRST_PATTERN).expect("invalid regex pattern"))
}

fn octave_first_regex() -> &'static Regex {
    OCTAVE_FIRST_REGEX
        .get_or_init(|| Regex::new(OCTAVE_FIRST_PATTERN).expect("invalid regex pattern"))
}

/// The parts of a notename.
///
/// | Input    | octave | diatonic_name | alteration | cents_deviation |
/// |----------|--------|---------------|------------|-----------------|
/// | `4C#+10` | 4      | C             | #          | 10              |
/// | `Eb4-15` | 4      | E             | b          | -15             |
/// | `4C+`    | 4      | C             |            | 50              |
/// | `5Db<`   | 5      | D             | b          | -25             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteParts {
    /// Octave number, 4 = central octave.
    pub octave: i32,
    /// The diatonic step ('C', 'D', 'E', ...), always uppercase.
    pub diatonic_name: char,
    /// The chromatic alteration.
    pub alteration: Alteration,
    /// Deviation in cents from the chromatic pitch.
    pub cents_deviation: i32,
}

impl NoteParts {
    /// The cents corresponding to the alteration (-100, 0 or 100).
    pub fn alteration_cents(&self) -> i32 {
        self.alteration.cents()
    }

    /// The diatonic step as an index, where 0 is C.
    pub fn diatonic_step(&self) -> usize {
        diatonic_index_of(self.diatonic_name).unwrap_or(0)
    }

    /// The letter plus alteration, e.g. "C#" or "Eb".
    pub fn chromatic_name(&self) -> String {
        format!("{}{}", self.diatonic_name, self.alteration.symbol())
    }

    /// Semitone offset of the spelling above the C of the written octave.
    ///
    /// Ranges from -1 (`Cb`) to 12 (`B#`).
    pub fn written_semitone(&self) -> i32 {
        semitone_of(self.diatonic_name).unwrap_or(0) + self.alteration.semitones()
    }

    /// The sounding pitch in cents above midinote 0.
    pub fn sounding_cents(&self) -> i64 {
        (self.octave as i64 + 1) * 1200
            + self.written_semitone() as i64 * 100
            + self.cents_deviation as i64
    }

    /// The midinote this notename denotes.
    ///
    /// `B#` and `Cb` carry into the neighbouring octave.
    pub fn midinote(&self) -> f64 {
        let semitones = (self.octave as i64 + 1) * 12 + self.written_semitone() as i64;
        semitones as f64 + self.cents_deviation as f64 / 100.0
    }

    /// The canonical (octave first) notename for these parts.
    pub fn notename(&self) -> String {
        construct_notename(
            self.octave,
            self.diatonic_name,
            self.alteration,
            self.cents_deviation,
        )
    }
}

impl std::fmt::Display for NoteParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notename())
    }
}

/// Splits a notename into octave, letter, alteration and cents.
///
/// Both orders are accepted: octave first (`4C#+10`) and letter first
/// (`C#4+10`). The letter is case-insensitive. Microtonal suffixes
/// `+` (+50), `-` (-50), `>`/`↑` (+25) and `<`/`↓` (-25) are resolved to cents.
///
/// # Examples
/// ```
/// use pitchtools::note::{split_notename, Alteration};
///
/// let parts = split_notename("Eb4-15").unwrap();
/// assert_eq!(parts.octave, 4);
/// assert_eq!(parts.diatonic_name, 'E');
/// assert_eq!(parts.alteration, Alteration::Flat);
/// assert_eq!(parts.cents_deviation, -15);
/// ```
pub fn split_notename(notename: &str) -> PitchResult<NoteParts> {
    NOTE_PARTS_MEMO.get_or_try_insert_with(notename, || parse_note_parts(notename))
}

fn parse_note_parts(notename: &str) -> PitchResult<NoteParts> {
    let text = notename.trim();
    let Some(first) = text.chars().next() else {
        return Err(PitchError::invalid_notename(notename, "empty notename"));
    };

    let captures = if first.is_alphabetic() {
        letter_first_regex().captures(text)
    } else {
        octave_first_regex().captures(text)
    };
    let Some(captures) = captures else {
        return Err(PitchError::invalid_notename(
            notename,
            "does not match the notename grammar",
        ));
    };

    parts_from_captures(notename, &captures)
}

fn parts_from_captures(notename: &str, captures: &Captures<'_>) -> PitchResult<NoteParts> {
    let letter = captures
        .name("letter")
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| PitchError::invalid_notename(notename, "missing pitch letter"))?;
    if semitone_of(letter).is_none() {
        return Err(PitchError::invalid_notename(
            notename,
            format!("'{}' is not a diatonic pitch letter", letter),
        ));
    }

    let alt_str = captures.name("alt").map_or("", |m| m.as_str());
    let alteration = Alteration::from_symbol(alt_str).ok_or_else(|| {
        PitchError::invalid_notename(notename, format!("unknown alteration '{}'", alt_str))
    })?;

    let oct_str = captures.name("oct").map_or("", |m| m.as_str());
    let octave: i32 = oct_str.parse().map_err(|_| {
        PitchError::invalid_notename(notename, format!("invalid octave '{}'", oct_str))
    })?;
    if !(-MAX_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        return Err(PitchError::invalid_notename(
            notename,
            format!("octave {} is outside +/-{}", octave, MAX_OCTAVE),
        ));
    }

    let micro = captures.name("micro").map_or("", |m| m.as_str());
    let cents_deviation = parse_micro(notename, micro)?;
    if !(-MAX_CENTS_DEVIATION..=MAX_CENTS_DEVIATION).contains(&cents_deviation) {
        return Err(PitchError::invalid_notename(
            notename,
            format!(
                "cents deviation {} is outside +/-{}",
                cents_deviation, MAX_CENTS_DEVIATION
            ),
        ));
    }

    Ok(NoteParts {
        octave,
        diatonic_name: letter,
        alteration,
        cents_deviation,
    })
}

/// Resolves the microtonal suffix of a notename to cents.
fn parse_micro(notename: &str, micro: &str) -> PitchResult<i32> {
    match micro {
        "" => Ok(0),
        "+" => Ok(50),
        "-" => Ok(-50),
        ">" | "↑" => Ok(25),
        "<" | "↓" => Ok(-25),
        _ => micro.parse().map_err(|_| {
            PitchError::invalid_notename(notename, format!("could not parse cents '{}'", micro))
        }),
    }
}

/// Converts a notename to a midinote.
///
/// | Input    | Output |
/// |----------|--------|
/// | `4C`     | 60     |
/// | `4D-20`  | 61.8   |
/// | `4Eb+`   | 63.5   |
/// | `4E<`    | 63.75  |
/// | `4C#-12` | 60.88  |
///
/// # Examples
/// ```
/// use pitchtools::note::notename_to_midinote;
///
/// assert_eq!(notename_to_midinote("4C").unwrap(), 60.0);
/// assert_eq!(notename_to_midinote("A4").unwrap(), 69.0);
/// assert!(notename_to_midinote("C##4").is_err());
/// ```
pub fn notename_to_midinote(notename: &str) -> PitchResult<f64> {
    split_notename(notename).map(|parts| parts.midinote())
}

/// Returns true if `notename` parses and is not lower than `min_pitch`.
///
/// # Examples
/// ```
/// use pitchtools::note::{is_valid_notename, DEFAULT_MIN_PITCH};
///
/// assert!(is_valid_notename("4C#+10", DEFAULT_MIN_PITCH));
/// assert!(!is_valid_notename("4Z", DEFAULT_MIN_PITCH));
/// assert!(!is_valid_notename("-1C", DEFAULT_MIN_PITCH));
/// ```
pub fn is_valid_notename(notename: &str, min_pitch: f64) -> bool {
    match notename_to_midinote(notename) {
        Ok(midinote) => midinote >= min_pitch,
        Err(_) => false,
    }
}

/// Builds a notename from its parts.
///
/// | octave | letter | alteration | cents | notename |
/// |--------|--------|------------|-------|----------|
/// | 4      | a      | Flat       | -25   | `4Ab-25` |
/// | 6      | d      | Sharp      | 40    | `6D#+40` |
/// | 5      | e      | Natural    | -50   | `5E-`    |
pub fn construct_notename(octave: i32, letter: char, alteration: Alteration, cents: i32) -> String {
    format!(
        "{}{}{}{}",
        octave,
        letter.to_ascii_uppercase(),
        alteration.symbol(),
        cents_repr(cents, false)
    )
}

/// Splits a notename into its chromatic part and the cents deviation.
///
/// | Input    | Output         |
/// |----------|----------------|
/// | `4E-`    | ("4E", -50)    |
/// | `5C#+10` | ("5C#", 10)    |
pub fn split_cents(notename: &str) -> PitchResult<(String, i32)> {
    let parts = split_notename(notename)?;
    Ok((
        format!(
            "{}{}{}",
            parts.octave,
            parts.diatonic_name,
            parts.alteration.symbol()
        ),
        parts.cents_deviation,
    ))
}

/// Converts a notename to its octave-first, uppercase form (`eb4` -> `4Eb`).
pub fn notename_upper(notename: &str) -> PitchResult<String> {
    split_notename(notename).map(|parts| parts.notename())
}
