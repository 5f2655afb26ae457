//! Property-based tests for the notename grammar and the spelling engine.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pitchtools --test proptest_spelling
//! ```

use std::collections::BTreeMap;

use proptest::prelude::*;

use pitchtools::spelling::{CHROMATIC_TRANSPOSITIONS, NON_ENHARMONIC_SLOTS};
use pitchtools::{
    construct_notename, enharmonic, enharmonic_variations, m2n, n2m, notated_pitch,
    quantize_midinote, transpose, Alteration, AlterationDirection, FixedSlots, QuantizeMethod,
};

/// Strategy for notenames with a single alteration and cents within a semitone.
fn notename() -> impl Strategy<Value = String> {
    (
        0i32..=8,
        prop::sample::select(vec!['C', 'D', 'E', 'F', 'G', 'A', 'B']),
        prop::sample::select(vec![Alteration::Natural, Alteration::Sharp, Alteration::Flat]),
        -99i32..=99,
    )
        .prop_map(|(octave, letter, alteration, cents)| {
            construct_notename(octave, letter, alteration, cents)
        })
}

/// Strategy for notenames whose spelling is a transposition root.
fn root_notename() -> impl Strategy<Value = String> {
    (
        0i32..=8,
        prop::sample::select(CHROMATIC_TRANSPOSITIONS.iter().map(|(r, _)| *r).collect::<Vec<_>>()),
        -49i32..=49,
    )
        .prop_map(|(octave, root, cents)| format!("{}{}{}", octave, root, cents_suffix(cents)))
}

fn cents_suffix(cents: i32) -> String {
    match cents {
        0 => String::new(),
        c if c > 0 => format!("+{}", c),
        c => c.to_string(),
    }
}

// ============================================================================
// 1. Round trips
// ============================================================================

proptest! {
    /// Quarter-tone pitches survive formatting and parsing.
    #[test]
    fn quarter_tone_grid_roundtrip(step in 0i32..=(127 * 4)) {
        let midinote = step as f64 / 4.0;
        let parsed = n2m(&m2n(midinote)).unwrap();
        prop_assert!((parsed - midinote).abs() < 1e-6, "{} -> {}", midinote, parsed);
    }

    /// Arbitrary pitches survive formatting within a cent.
    #[test]
    fn formatting_is_accurate_to_a_cent(midinote in 0.0f64..127.0) {
        let parsed = n2m(&m2n(midinote)).unwrap();
        prop_assert!((parsed - midinote).abs() <= 0.005 + 1e-9, "{} -> {}", midinote, parsed);
    }

    /// Formatting a parsed notename denotes the same pitch.
    #[test]
    fn parse_then_format_denotes_same_pitch(n in notename()) {
        let midinote = n2m(&n).unwrap();
        let reparsed = n2m(&m2n(midinote)).unwrap();
        prop_assert!((reparsed - midinote).abs() < 1e-6, "{}", n);
    }

    /// Quantized midinotes lie on the grid, within half a step of the input.
    #[test]
    fn quantization_snaps_to_grid(
        midinote in 0.0f64..127.0,
        divisions in prop::sample::select(vec![1u32, 2, 4]),
    ) {
        let q = quantize_midinote(midinote, divisions, QuantizeMethod::Round).unwrap();
        let steps = q * divisions as f64;
        prop_assert!((steps - steps.round()).abs() < 1e-9);
        prop_assert!((q - midinote).abs() <= 0.5 / divisions as f64 + 1e-9);
    }
}

// ============================================================================
// 2. Spelling
// ============================================================================

proptest! {
    /// An enharmonic sounds at the same pitch as the original.
    #[test]
    fn enharmonic_preserves_pitch(n in notename()) {
        let variant = enharmonic(&n).unwrap();
        let a = n2m(&n).unwrap();
        let b = n2m(&variant).unwrap();
        prop_assert!((a - b).abs() < 1e-9, "{} ({}) -> {} ({})", n, a, variant, b);
    }

    /// Transposition moves the sounding pitch by exactly the interval.
    #[test]
    fn transpose_moves_by_interval(
        n in root_notename(),
        hundredths in -2400i32..=2400,
        allow_unusual in any::<bool>(),
    ) {
        let interval = hundredths as f64 / 100.0;
        let out = transpose(&n, interval, allow_unusual).unwrap();
        let expected = n2m(&n).unwrap() + interval;
        let actual = n2m(&out).unwrap();
        prop_assert!(
            (actual - expected).abs() < 1e-6,
            "{} + {} -> {} ({} != {})", n, interval, out, actual, expected
        );
    }

    /// Every variation row is made of the notes or their enharmonics, and no
    /// slot is spelled both sharp and flat.
    #[test]
    fn variations_are_sound(notes in prop::collection::vec(notename(), 1..6)) {
        let rows = enharmonic_variations(&notes, &FixedSlots::new(), false).unwrap();
        for row in &rows {
            prop_assert_eq!(row.len(), notes.len());
            let mut directions: BTreeMap<u32, Vec<AlterationDirection>> = BTreeMap::new();
            for (note, spelled) in notes.iter().zip(row) {
                prop_assert!(spelled == note || *spelled == enharmonic(note).unwrap());
                let notated = notated_pitch(spelled.as_str(), 4).unwrap();
                let slot = notated.microtone_index(2);
                if !NON_ENHARMONIC_SLOTS.contains(&slot) {
                    directions
                        .entry(slot)
                        .or_default()
                        .push(notated.alteration_direction(0.5));
                }
            }
            for (slot, dirs) in directions {
                let sharp = dirs.contains(&AlterationDirection::Sharp);
                let flat = dirs.contains(&AlterationDirection::Flat);
                prop_assert!(!(sharp && flat), "slot {} spelled both ways in {:?}", slot, row);
            }
        }
    }
}

// ============================================================================
// 3. Exhaustive transposition sweep
// ============================================================================

#[test]
fn transpose_sweep_all_roots() {
    for (root, _) in CHROMATIC_TRANSPOSITIONS {
        for octave in [1, 4, 7] {
            let notename = format!("{}{}", octave, root);
            let origin = n2m(&notename).unwrap();
            for interval in -24..=24 {
                for allow_unusual in [true, false] {
                    let out = transpose(&notename, interval as f64, allow_unusual).unwrap();
                    let actual = n2m(&out).unwrap();
                    assert!(
                        (actual - origin - interval as f64).abs() < 1e-9,
                        "{} + {} -> {}",
                        notename,
                        interval,
                        out
                    );
                    if !allow_unusual {
                        for unusual in ["E#", "Fb", "B#", "Cb"] {
                            assert!(
                                !out.ends_with(unusual),
                                "{} + {} -> {}",
                                notename,
                                interval,
                                out
                            );
                        }
                    }
                }
            }
        }
    }
}
