use log::debug;

use crate::converter::m2n;
use crate::error::{PitchError, PitchResult};
use crate::note::{construct_notename, split_notename, Alteration, MAX_OCTAVE};

use super::spell_at;

/// Largest interval, in semitones, accepted by [`transpose`].
pub const MAX_TRANSPOSE_INTERVAL: f64 = 1200.0;

/// Spelling of each chromatic step above a root, for every supported root.
pub const CHROMATIC_TRANSPOSITIONS: [(&str, [&str; 12]); 17] = [
    ("C", ["C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"]),
    ("C#", ["C#", "D", "D#", "E", "E#", "F#", "G", "G#", "A", "A#", "B", "C"]),
    ("Db", ["Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B", "C"]),
    ("D", ["D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", "B", "C", "C#"]),
    ("D#", ["D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", "C", "C#", "D"]),
    ("Eb", ["Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B", "C", "Db", "D"]),
    ("E", ["E", "F", "F#", "G", "G#", "A", "Bb", "B", "C", "C#", "D", "D#"]),
    ("F", ["F", "F#", "G", "Ab", "A", "Bb", "B", "C", "Db", "D", "Eb", "E"]),
    ("F#", ["F#", "G", "G#", "A", "A#", "B", "C", "C#", "D", "D#", "E", "F"]),
    ("Gb", ["Gb", "G", "Ab", "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F"]),
    ("G", ["G", "Ab", "A", "Bb", "B", "C", "C#", "D", "Eb", "E", "F", "F#"]),
    ("G#", ["G#", "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G"]),
    ("Ab", ["Ab", "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G"]),
    ("A", ["A", "Bb", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]),
    ("A#", ["A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A"]),
    ("Bb", ["Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A"]),
    ("B", ["B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#"]),
];

fn transpositions_for(root: &str) -> Option<&'static [&'static str; 12]> {
    CHROMATIC_TRANSPOSITIONS
        .iter()
        .find(|(name, _)| *name == root)
        .map(|(_, row)| row)
}

/// Transposes a notename by an interval in semitones, keeping the spelling
/// consistent with the original note.
///
/// | Note  | Interval | Result                    | `m2n(n2m(note) + interval)` |
/// |-------|----------|---------------------------|-----------------------------|
/// | `4Eb` | 5        | `4Ab`                     | `4G#`                       |
/// | `4Db` | 2        | `4Eb`                     | `4D#`                       |
/// | `4C#` | 2        | `4D#`                     | `4D#`                       |
/// | `4Db` | 4.2      | `4F+20`                   | `4F+20`                     |
/// | `4C#` | 4.2      | `4E#+20` (`4F+20` if unusual spellings are disallowed) | `4F+20` |
///
/// With `allow_unusual_spellings` set to false, `E#`, `Fb`, `B#` and `Cb`
/// are replaced by `F`, `E`, `C` and `B`.
///
/// # Examples
/// ```
/// use pitchtools::transpose;
///
/// assert_eq!(transpose("4Eb", 5.0, true).unwrap(), "4Ab");
/// assert_eq!(transpose("4C#", 4.2, true).unwrap(), "4E#+20");
/// assert_eq!(transpose("4C#", 4.2, false).unwrap(), "4F+20");
/// ```
pub fn transpose(
    notename: &str,
    interval: f64,
    allow_unusual_spellings: bool,
) -> PitchResult<String> {
    if !interval.is_finite() || interval.abs() > MAX_TRANSPOSE_INTERVAL {
        return Err(PitchError::IntervalOutOfRange { interval });
    }
    let parts = split_notename(notename)?;
    let root = parts.chromatic_name();
    let row = transpositions_for(&root).ok_or(PitchError::UnsupportedRoot { root })?;

    let rounded = interval.round_ties_even();
    let deviation = ((interval - rounded) * 100.0).round_ties_even() as i32;
    let cents = deviation + parts.cents_deviation;
    let steps = rounded as i64;
    let target = parts.sounding_cents() + steps * 100 + deviation as i64;

    let name = row[steps.rem_euclid(12) as usize];
    let mut spelled = spell_at(target, name, cents);
    debug!(
        "transpose {} by {}: {} placed in octave {}",
        notename, interval, name, spelled.octave
    );

    if !allow_unusual_spellings {
        match (spelled.diatonic_name, spelled.alteration) {
            ('E', Alteration::Sharp) => {
                spelled.diatonic_name = 'F';
                spelled.alteration = Alteration::Natural;
            }
            ('F', Alteration::Flat) => {
                spelled.diatonic_name = 'E';
                spelled.alteration = Alteration::Natural;
            }
            ('B', Alteration::Sharp) => {
                spelled.diatonic_name = 'C';
                spelled.alteration = Alteration::Natural;
                spelled.octave += 1;
            }
            ('C', Alteration::Flat) => {
                spelled.diatonic_name = 'B';
                spelled.alteration = Alteration::Natural;
                spelled.octave -= 1;
            }
            _ => {}
        }
    }

    if !(-MAX_OCTAVE..=MAX_OCTAVE).contains(&spelled.octave) {
        return Err(PitchError::IntervalOutOfRange { interval });
    }
    if cents.abs() > 50 {
        return Ok(m2n(spelled.midinote()));
    }
    Ok(construct_notename(
        spelled.octave,
        spelled.diatonic_name,
        spelled.alteration,
        spelled.cents_deviation,
    ))
}
