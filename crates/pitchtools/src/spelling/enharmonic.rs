use crate::error::{PitchError, PitchResult};
use crate::notated::notated_pitch;
use crate::note::{cents_repr, flat_name, sharp_name, DEFAULT_DIVISIONS};

use super::spell_at;

/// Returns the enharmonic variant of a notename.
///
/// A variant has the same sounding pitch and at most a single sharp or flat.
/// Spellings like `Fb` or `E#` are never produced. When no variant exists
/// the notename is returned unchanged.
///
/// | Note    | Enharmonic |
/// |---------|------------|
/// | `4C#`   | `4Db`      |
/// | `4C+`   | `4Db-`     |
/// | `4E`    | `4E`       |
/// | `4E#`   | `4F`       |
/// | `4A+10` | `4A+10`    |
/// | `4E-`   | `4D#+`     |
/// | `4C-`   | `3B+`      |
///
/// # Examples
/// ```
/// use pitchtools::enharmonic;
///
/// assert_eq!(enharmonic("4F#").unwrap(), "4Gb");
/// assert_eq!(enharmonic("4G+60").unwrap(), "4Ab-40");
/// assert_eq!(enharmonic("4E+25").unwrap(), "4E+25");
/// ```
pub fn enharmonic(notename: &str) -> PitchResult<String> {
    let notated = notated_pitch(notename, DEFAULT_DIVISIONS)?;
    let parts = *notated.parts();
    let pitch_class = notated.chromatic_index();
    let cents = parts.cents_deviation;
    let alteration = parts.alteration_cents() + cents;

    // (spelling, new cents, eighth-tone shortcuts)
    let (name, new_cents, shortcuts) = if alteration.abs() < 100 {
        if cents.abs() < 50 {
            return Ok(notename.to_string());
        }
        if cents >= 50 {
            (flat_name(pitch_class + 1), cents - 100, true)
        } else {
            (sharp_name(pitch_class - 1), cents + 100, true)
        }
    } else if alteration >= 100 {
        match cents {
            c if c.abs() < 50 => (flat_name(pitch_class), c, false),
            50..=99 => (flat_name(pitch_class + 1), cents - 100, true),
            -99..=-50 => (flat_name(pitch_class - 1), cents + 100, true),
            _ => return Err(inconsistent(notename, cents)),
        }
    } else {
        match cents {
            c if c.abs() < 50 => (sharp_name(pitch_class), c, false),
            50..=99 => (sharp_name(pitch_class + 1), cents - 100, true),
            -99..=-50 => (sharp_name(pitch_class - 1), cents + 100, true),
            _ => return Err(inconsistent(notename, cents)),
        }
    };

    let spelled = spell_at(parts.sounding_cents(), name, new_cents);
    Ok(format!(
        "{}{}{}",
        spelled.octave,
        name,
        cents_repr(new_cents, shortcuts)
    ))
}

fn inconsistent(notename: &str, cents: i32) -> PitchError {
    PitchError::Inconsistent {
        notename: notename.to_string(),
        message: format!("cents deviation {} out of range for an enharmonic", cents),
    }
}
