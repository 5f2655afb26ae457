use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::error::{PitchError, PitchResult};
use crate::notated::{notated_pitch, AlterationDirection};
use crate::note::DEFAULT_DIVISIONS;

use super::enharmonic;

/// Maximum number of notes accepted by [`enharmonic_variations`].
pub const MAX_VARIATION_NOTES: usize = 20;

/// Quarter-tone slots (see [`crate::NotatedPitch::microtone_index`]) that have a
/// single natural spelling and never conflict.
///
/// ```text
/// C C+ C# D- D D+ D# E- E E+ F F+ F# G- G G+ G# A- A A+ A# B- B B+
/// 0 1  2  3  4 5  6  7  8 9  0 1  2  3  4 5  6  7  8 9  0  1  2 3
/// ```
pub const NON_ENHARMONIC_SLOTS: [u32; 7] = [0, 4, 8, 10, 14, 18, 22];

/// Alteration direction fixed per quarter-tone slot.
pub type FixedSlots = BTreeMap<u32, AlterationDirection>;

/// Notes above this count trigger a warning about the size of the search.
const LARGE_SEARCH_NOTES: usize = 12;

#[derive(Debug, Clone)]
struct Candidate {
    notename: String,
    slot: u32,
    direction: AlterationDirection,
}

impl Candidate {
    fn new(notename: String) -> PitchResult<Self> {
        let notated = notated_pitch(notename.as_str(), DEFAULT_DIVISIONS)?;
        Ok(Self {
            slot: notated.microtone_index(2),
            direction: notated.alteration_direction(0.5),
            notename,
        })
    }

    fn is_enharmonic_slot(&self) -> bool {
        !NON_ENHARMONIC_SLOTS.contains(&self.slot)
    }
}

/// Depth-first search over the spelling choices of each note.
struct Search<'a> {
    candidates: &'a [Vec<Candidate>],
    slots: FixedSlots,
    row: Vec<String>,
    found: BTreeSet<Vec<String>>,
    pruned: usize,
}

impl Search<'_> {
    fn visit(&mut self, depth: usize) {
        let candidates = self.candidates;
        let Some(choices) = candidates.get(depth) else {
            self.found.insert(self.row.clone());
            return;
        };

        for candidate in choices {
            if !candidate.is_enharmonic_slot() {
                self.descend(depth, candidate);
                continue;
            }
            let recorded = self.slots.get(&candidate.slot).copied();
            let Some(direction) = merge_direction(recorded, candidate.direction) else {
                self.pruned += 1;
                continue;
            };
            self.slots.insert(candidate.slot, direction);
            self.descend(depth, candidate);
            match recorded {
                Some(previous) => self.slots.insert(candidate.slot, previous),
                None => self.slots.remove(&candidate.slot),
            };
        }
    }

    fn descend(&mut self, depth: usize, candidate: &Candidate) {
        self.row.push(candidate.notename.clone());
        self.visit(depth + 1);
        self.row.pop();
    }
}

/// The direction a slot holds after placing a note with `direction` on it,
/// or `None` if it conflicts with the recorded one.
fn merge_direction(
    recorded: Option<AlterationDirection>,
    direction: AlterationDirection,
) -> Option<AlterationDirection> {
    match (recorded, direction) {
        (None, d) | (Some(AlterationDirection::Natural), d) => Some(d),
        (Some(r), AlterationDirection::Natural) => Some(r),
        (Some(r), d) if r == d => Some(r),
        _ => None,
    }
}

/// Generates the enharmonic variations of a set of notes.
///
/// Each note is kept or replaced by its [`enharmonic`]. A row is valid when
/// no two notes on the same quarter-tone slot are spelled in opposite
/// directions (for example `4C#` and `4Db`). `fixed_slots` pins slots to a
/// direction: slot 0 is C, 1 is C+/Db-, 2 is C#/Db, and so on.
///
/// Rows are returned de-duplicated and sorted. If no row is valid and `force`
/// is set, the notes themselves are returned as the only row.
///
/// # Examples
/// ```
/// use pitchtools::{enharmonic_variations, FixedSlots};
///
/// let rows = enharmonic_variations(&["4C#", "4Db"], &FixedSlots::new(), false).unwrap();
/// assert_eq!(rows, vec![vec!["4C#", "4C#"], vec!["4Db", "4Db"]]);
/// ```
pub fn enharmonic_variations<S: AsRef<str>>(
    notes: &[S],
    fixed_slots: &FixedSlots,
    force: bool,
) -> PitchResult<Vec<Vec<String>>> {
    if notes.len() > MAX_VARIATION_NOTES {
        return Err(PitchError::TooManyNotes {
            count: notes.len(),
            max: MAX_VARIATION_NOTES,
        });
    }
    if notes.len() > LARGE_SEARCH_NOTES {
        warn!(
            "enharmonic variation search over {} notes may take a while",
            notes.len()
        );
    }

    let mut candidates = Vec::with_capacity(notes.len());
    for note in notes {
        let note = note.as_ref();
        let variant = enharmonic(note)?;
        let mut choices = vec![Candidate::new(note.to_string())?];
        if variant != note {
            choices.push(Candidate::new(variant)?);
        }
        candidates.push(choices);
    }

    let mut search = Search {
        candidates: &candidates,
        slots: fixed_slots.clone(),
        row: Vec::with_capacity(notes.len()),
        found: BTreeSet::new(),
        pruned: 0,
    };
    search.visit(0);
    debug!(
        "enharmonic variations: {} rows found, {} branches pruned",
        search.found.len(),
        search.pruned
    );

    if search.found.is_empty() && force {
        return Ok(vec![notes.iter().map(|n| n.as_ref().to_string()).collect()]);
    }
    Ok(search.found.into_iter().collect())
}
