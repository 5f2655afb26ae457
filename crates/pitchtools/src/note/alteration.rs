//! Alterations, accidentals and the textual representation of cents.

use serde::{Deserialize, Serialize};

use super::constants::{ALTERATION_CENTS, ALTERATION_SYMBOLS, SUPPORTED_DIVISIONS};
use crate::error::{PitchError, PitchResult};

/// The chromatic alteration written after the diatonic letter of a notename.
///
/// Only single sharps and flats are part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alteration {
    #[default]
    #[serde(rename = "")]
    Natural,
    #[serde(rename = "#")]
    Sharp,
    #[serde(rename = "b")]
    Flat,
}

impl Alteration {
    /// Parses the alteration character of a notename.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Alteration::Natural),
            "#" => Some(Alteration::Sharp),
            "b" => Some(Alteration::Flat),
            _ => None,
        }
    }

    /// The symbol as written in a notename ("", "#" or "b").
    pub fn symbol(&self) -> &'static str {
        match self {
            Alteration::Natural => "",
            Alteration::Sharp => "#",
            Alteration::Flat => "b",
        }
    }

    /// The alteration in semitones (-1, 0 or 1).
    pub fn semitones(&self) -> i32 {
        match self {
            Alteration::Natural => 0,
            Alteration::Sharp => 1,
            Alteration::Flat => -1,
        }
    }

    /// The alteration in cents (-100, 0 or 100).
    pub fn cents(&self) -> i32 {
        self.semitones() * 100
    }
}

impl std::fmt::Display for Alteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accidental glyph classes, from three-quarters-flat to three-quarters-sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    ThreeQuartersFlat,
    FlatDown,
    Flat,
    FlatUp,
    QuarterFlat,
    NaturalDown,
    Natural,
    NaturalUp,
    QuarterSharp,
    SharpDown,
    Sharp,
    SharpUp,
    ThreeQuartersSharp,
}

impl Accidental {
    /// All accidentals in ascending order of alteration.
    pub const ALL: [Accidental; 13] = [
        Accidental::ThreeQuartersFlat,
        Accidental::FlatDown,
        Accidental::Flat,
        Accidental::FlatUp,
        Accidental::QuarterFlat,
        Accidental::NaturalDown,
        Accidental::Natural,
        Accidental::NaturalUp,
        Accidental::QuarterSharp,
        Accidental::SharpDown,
        Accidental::Sharp,
        Accidental::SharpUp,
        Accidental::ThreeQuartersSharp,
    ];

    /// Looks up the accidental for an exact alteration in cents (multiple of 25).
    pub fn from_cents(cents: i32) -> Option<Self> {
        if cents % 25 != 0 || !(-150..=150).contains(&cents) {
            return None;
        }
        Some(Self::ALL[((cents + 150) / 25) as usize])
    }

    /// The alteration in cents this accidental stands for.
    pub fn cents(&self) -> i32 {
        // Variants are declared in steps of 25 cents starting at -150.
        (*self as i32) * 25 - 150
    }

    /// The name of the accidental (e.g., "quarter-sharp").
    pub fn name(&self) -> &'static str {
        match self {
            Accidental::ThreeQuartersFlat => "three-quarters-flat",
            Accidental::FlatDown => "flat-down",
            Accidental::Flat => "flat",
            Accidental::FlatUp => "flat-up",
            Accidental::QuarterFlat => "quarter-flat",
            Accidental::NaturalDown => "natural-down",
            Accidental::Natural => "natural",
            Accidental::NaturalUp => "natural-up",
            Accidental::QuarterSharp => "quarter-sharp",
            Accidental::SharpDown => "sharp-down",
            Accidental::Sharp => "sharp",
            Accidental::SharpUp => "sharp-up",
            Accidental::ThreeQuartersSharp => "three-quarters-sharp",
        }
    }
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that `divisions` is one of the supported resolutions (1, 2 or 4).
pub fn validate_divisions(divisions: u32) -> PitchResult<u32> {
    if SUPPORTED_DIVISIONS.contains(&divisions) {
        Ok(divisions)
    } else {
        Err(PitchError::UnsupportedDivisions { divisions })
    }
}

/// Converts an alteration symbol to its deviation in cents.
///
/// | Symbol | Cents |
/// |--------|-------|
/// | `#+`   | 150   |
/// | `#>`   | 125   |
/// | `#`    | 100   |
/// | `#<`   | 75    |
/// | `+`    | 50    |
/// | `>`    | 25    |
/// | `<`    | -25   |
/// | `-`    | -50   |
/// | `b>`   | -75   |
/// | `b`    | -100  |
/// | `b<`   | -125  |
/// | `b-`   | -150  |
///
/// # Examples
/// ```
/// use pitchtools::note::alteration_to_cents;
///
/// assert_eq!(alteration_to_cents("#<").unwrap(), 75);
/// assert_eq!(alteration_to_cents("b").unwrap(), -100);
/// assert!(alteration_to_cents("x").is_err());
/// ```
pub fn alteration_to_cents(alteration: &str) -> PitchResult<i32> {
    ALTERATION_CENTS
        .iter()
        .find(|(symbol, _)| *symbol == alteration)
        .map(|(_, cents)| *cents)
        .ok_or_else(|| PitchError::UnknownAlteration {
            alteration: alteration.to_string(),
            expected: ALTERATION_SYMBOLS,
        })
}

/// Returns the accidental for the given alteration, quantized to the
/// resolution `100 / divisions` cents.
///
/// # Examples
/// ```
/// use pitchtools::note::{accidental_name, Accidental};
///
/// assert_eq!(accidental_name(100, 4).unwrap(), Accidental::Sharp);
/// assert_eq!(accidental_name(-40, 2).unwrap().name(), "quarter-flat");
/// ```
pub fn accidental_name(alteration_cents: i32, divisions: u32) -> PitchResult<Accidental> {
    let divisions = validate_divisions(divisions)?;
    let resolution = 100 / divisions as i32;
    let steps = (alteration_cents as f64 / resolution as f64).round_ties_even() as i32;
    let quantized = steps * resolution;
    Accidental::from_cents(quantized)
        .ok_or(PitchError::AlterationOutOfRange { cents: quantized })
}

/// Returns the string representation of a cents deviation.
///
/// Zero is the empty string and +/-50 use the `+`/`-` shortcuts. With
/// `eighth_tone_shortcuts`, +/-25 are written as `>`/`<`. Any other value is
/// an explicitly signed integer.
///
/// # Examples
/// ```
/// use pitchtools::note::cents_repr;
///
/// assert_eq!(cents_repr(25, true), ">");
/// assert_eq!(cents_repr(25, false), "+25");
/// assert_eq!(cents_repr(-50, true), "-");
/// assert_eq!(cents_repr(-15, true), "-15");
/// ```
pub fn cents_repr(cents: i32, eighth_tone_shortcuts: bool) -> String {
    match cents {
        0 => String::new(),
        50 => "+".to_string(),
        -50 => "-".to_string(),
        25 if eighth_tone_shortcuts => ">".to_string(),
        -25 if eighth_tone_shortcuts => "<".to_string(),
        c if c > 0 => format!("+{}", c),
        c => c.to_string(),
    }
}
