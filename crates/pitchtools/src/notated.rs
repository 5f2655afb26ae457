//! Pitches viewed in relation to their musical notation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::{default_converter, PitchConverter};
use crate::error::{PitchError, PitchResult};
use crate::note::{
    accidental_name, cents_repr, chromatic_pitch_class, is_black_key, quantize_midinote,
    split_notename, validate_divisions, Accidental, NoteParts, QuantizeMethod, DEFAULT_DIVISIONS,
    DIATONIC_NAMES,
};

/// A pitch given either as a midinote or as a notename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pitch {
    Midinote(f64),
    Notename(String),
}

impl From<f64> for Pitch {
    fn from(midinote: f64) -> Self {
        Pitch::Midinote(midinote)
    }
}

impl From<i32> for Pitch {
    fn from(midinote: i32) -> Self {
        Pitch::Midinote(midinote as f64)
    }
}

impl From<&str> for Pitch {
    fn from(notename: &str) -> Self {
        Pitch::Notename(notename.to_string())
    }
}

impl From<String> for Pitch {
    fn from(notename: String) -> Self {
        Pitch::Notename(notename)
    }
}

impl From<&String> for Pitch {
    fn from(notename: &String) -> Self {
        Pitch::Notename(notename.clone())
    }
}

/// Direction in which a notated pitch is altered from its diatonic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlterationDirection {
    Flat,
    Natural,
    Sharp,
}

impl AlterationDirection {
    /// -1 for flat, 0 for natural, 1 for sharp.
    pub fn value(&self) -> i32 {
        match self {
            AlterationDirection::Flat => -1,
            AlterationDirection::Natural => 0,
            AlterationDirection::Sharp => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlterationDirection::Flat => "flat",
            AlterationDirection::Natural => "natural",
            AlterationDirection::Sharp => "sharp",
        }
    }
}

impl std::fmt::Display for AlterationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlterationDirection {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sharp" | "#" | "1" | "+1" => Ok(AlterationDirection::Sharp),
            "flat" | "b" | "-1" => Ok(AlterationDirection::Flat),
            "natural" | "0" => Ok(AlterationDirection::Natural),
            _ => Err(PitchError::UnknownAlteration {
                alteration: s.to_string(),
                expected: "sharp, flat, natural (or #, b, 0)",
            }),
        }
    }
}

/// A parsed notename, to be queried in relation to its musical notation.
///
/// | Notename | chromatic_name | diatonic_alteration | chromatic_alteration | accidental |
/// |----------|----------------|---------------------|----------------------|------------|
/// | `4C#+15` | C#             | 1.15                | 0.15                 | sharp-up   |
/// | `4Db+15` | Db             | -0.85               | 0.15                 | flat-up    |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotatedPitch {
    parts: NoteParts,
    diatonic_index: usize,
    chromatic_index: i32,
    chromatic_name: String,
    alteration_cents: i32,
    divisions: u32,
}

impl NotatedPitch {
    fn from_parts(notename: &str, parts: NoteParts, divisions: u32) -> PitchResult<Self> {
        let chromatic_name = parts.chromatic_name();
        let chromatic_index =
            chromatic_pitch_class(&chromatic_name).ok_or_else(|| PitchError::Inconsistent {
                notename: notename.to_string(),
                message: format!("no pitch class for spelling '{}'", chromatic_name),
            })?;
        Ok(Self {
            parts,
            diatonic_index: parts.diatonic_step(),
            chromatic_index,
            chromatic_name,
            alteration_cents: parts.alteration_cents() + parts.cents_deviation,
            divisions,
        })
    }

    /// The parsed parts of the notename.
    pub fn parts(&self) -> &NoteParts {
        &self.parts
    }

    /// The written octave (4 = central octave).
    pub fn octave(&self) -> i32 {
        self.parts.octave
    }

    /// Index of the diatonic step: 0=C, 1=D, 2=E, ...
    pub fn diatonic_index(&self) -> usize {
        self.diatonic_index
    }

    pub fn diatonic_name(&self) -> char {
        DIATONIC_NAMES[self.diatonic_index]
    }

    /// Index of the chromatic pitch class: 0=C, 1=C#/Db, 2=D, ...
    pub fn chromatic_index(&self) -> i32 {
        self.chromatic_index
    }

    /// The letter plus alteration, e.g. "C#" or "Db".
    pub fn chromatic_name(&self) -> &str {
        &self.chromatic_name
    }

    /// Alteration relative to the diatonic step, in semitones (1.0 for C#, -1.0 for Db).
    pub fn diatonic_alteration(&self) -> f64 {
        self.alteration_cents as f64 / 100.0
    }

    /// Deviation from the chromatic pitch, in semitones (0.5 for C#+50).
    pub fn chromatic_alteration(&self) -> f64 {
        self.parts.cents_deviation as f64 / 100.0
    }

    /// The cents deviation from the notated chromatic pitch.
    pub fn cents_deviation(&self) -> i32 {
        self.parts.cents_deviation
    }

    /// Number of divisions per semitone the accidental is quantized to.
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// The accidental used to notate this pitch.
    ///
    /// Fails with [`PitchError::AlterationOutOfRange`] if the total
    /// alteration exceeds a three-quarters sharp or flat.
    pub fn accidental(&self) -> PitchResult<Accidental> {
        accidental_name(self.alteration_cents, self.divisions)
    }

    /// The full notename, e.g. "4C#+15".
    pub fn fullname(&self) -> String {
        format!("{}{}{}", self.octave(), self.chromatic_name, self.cents_str())
    }

    /// Abstract vertical position on the staff (octave * 7 + diatonic index).
    pub fn vertical_position(&self) -> i32 {
        self.octave() * 7 + self.diatonic_index as i32
    }

    /// The midinote of this pitch.
    ///
    /// `B#` and `Cb` are placed in the octave where they sound.
    pub fn midinote(&self) -> f64 {
        self.parts.midinote()
    }

    /// Index of the nearest microtone, with `divisions` steps per semitone.
    ///
    /// With 2 divisions, C is 0, C+ is 1, C#/Db is 2, and so on up to 23.
    /// A value of 0 is treated as 1.
    pub fn microtone_index(&self, divisions: u32) -> u32 {
        let steps = divisions.max(1) as i64;
        let index = (self.midinote() * steps as f64).round_ties_even() as i64;
        index.rem_euclid(12 * steps) as u32
    }

    pub fn is_white_key(&self) -> bool {
        !self.is_black_key()
    }

    pub fn is_black_key(&self) -> bool {
        is_black_key(self.chromatic_index)
    }

    /// Sign of the cents deviation: "", "+" or "-".
    pub fn cents_sign(&self) -> &'static str {
        match self.parts.cents_deviation {
            0 => "",
            c if c > 0 => "+",
            _ => "-",
        }
    }

    /// The cents deviation as written in a notename ("", "+", "-", "+15", ...).
    pub fn cents_str(&self) -> String {
        cents_repr(self.parts.cents_deviation, false)
    }

    /// Direction of the alteration, given a minimum alteration in semitones.
    ///
    /// | Note    | min 0.5 |
    /// |---------|---------|
    /// | `4C`    | natural |
    /// | `4C#`   | sharp   |
    /// | `4Eb`   | flat    |
    /// | `4C+`   | sharp   |
    /// | `4F-25` | natural |
    pub fn alteration_direction(&self, min_alteration: f64) -> AlterationDirection {
        let alteration = self.diatonic_alteration();
        if alteration >= min_alteration {
            AlterationDirection::Sharp
        } else if alteration <= -min_alteration {
            AlterationDirection::Flat
        } else {
            AlterationDirection::Natural
        }
    }
}

impl std::fmt::Display for NotatedPitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fullname())
    }
}

pub(crate) fn notate(
    converter: &PitchConverter,
    pitch: Pitch,
    divisions: u32,
) -> PitchResult<NotatedPitch> {
    let divisions = validate_divisions(divisions)?;
    let notename = match pitch {
        Pitch::Midinote(midinote) => {
            converter.m2n(quantize_midinote(midinote, divisions, QuantizeMethod::Round)?)
        }
        Pitch::Notename(notename) => notename,
    };
    let parts = split_notename(&notename)?;
    NotatedPitch::from_parts(&notename, parts, divisions)
}

/// Converts a midinote or a notename to a [`NotatedPitch`].
///
/// Midinotes are first snapped to a grid of `divisions` steps per semitone
/// (1, 2 or 4) and spelled with the default converter.
///
/// # Examples
/// ```
/// use pitchtools::notated_pitch;
///
/// let notated = notated_pitch("4Db+15", 4).unwrap();
/// assert_eq!(notated.chromatic_index(), 1);
/// assert_eq!(notated.diatonic_alteration(), -0.85);
/// assert_eq!(notated.accidental().unwrap().name(), "flat-up");
///
/// let notated = notated_pitch(61.6, 2).unwrap();
/// assert_eq!(notated.fullname(), "4D-");
/// ```
pub fn notated_pitch(pitch: impl Into<Pitch>, divisions: u32) -> PitchResult<NotatedPitch> {
    notate(&default_converter(), pitch.into(), divisions)
}

/// The vertical notated position of a notename.
///
/// Only the octave and the diatonic step count: `4G#` and `4G` share a
/// position, `4Ab` is one step higher.
pub fn vertical_position(notename: &str) -> PitchResult<i32> {
    notated_pitch(notename, DEFAULT_DIVISIONS).map(|n| n.vertical_position())
}

/// The diatonic note at a vertical position, where 0 is `0C`.
///
/// # Examples
/// ```
/// use pitchtools::vertical_position_to_note;
///
/// assert_eq!(vertical_position_to_note(2), "0E");
/// assert_eq!(vertical_position_to_note(30), "4D");
/// ```
pub fn vertical_position_to_note(position: i32) -> String {
    let octave = position.div_euclid(7);
    let step = DIATONIC_NAMES[position.rem_euclid(7) as usize];
    format!("{}{}", octave, step)
}

/// The notated interval between two notenames, as
/// (delta vertical position, delta midinote).
///
/// | n0    | n1    | result   |
/// |-------|-------|----------|
/// | `4C`  | `4D`  | (1, 2)   |
/// | `4C`  | `4C+` | (0, 0.5) |
/// | `4C`  | `4Db` | (1, 1)   |
/// | `4Db` | `4C`  | (-1, -1) |
pub fn notated_interval(n0: &str, n1: &str) -> PitchResult<(i32, f64)> {
    let p0 = notated_pitch(n0, DEFAULT_DIVISIONS)?;
    let p1 = notated_pitch(n1, DEFAULT_DIVISIONS)?;
    Ok((
        p1.vertical_position() - p0.vertical_position(),
        p1.midinote() - p0.midinote(),
    ))
}

/// The pitch class of a notename, rounded to `divisions` steps per semitone.
///
/// Enharmonic spellings share a pitch class. With 1 division `4C#` is 1; with
/// 2 divisions `4C#` is 2 and `4C+` is 1.
pub fn pitchclass(notename: &str, divisions: u32) -> PitchResult<u32> {
    if divisions == 0 {
        return Err(PitchError::UnsupportedDivisions { divisions });
    }
    notated_pitch(notename, DEFAULT_DIVISIONS).map(|n| n.microtone_index(divisions))
}
