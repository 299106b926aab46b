//! Musical intervals and pitch transposition
//!
//! Two flavors, matching how ornaments are notated: a generic interval is a
//! step count only ("a second, up") whose exact quality is settled later by
//! the key signature; a specific interval fixes both the letter distance and
//! the exact semitone span ("a minor second").

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pitch::{Accidental, Pitch, Step};

/// Failure to spell the result of a transposition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The target pitch would need more than a double sharp or double flat
    #[error("no valid spelling for {pitch} transposed by {steps} steps and {semitones} semitones")]
    Unspellable {
        pitch: String,
        steps: i8,
        semitones: i8,
    },
}

/// A directed musical distance
///
/// Step counts use the conventional one-based magnitude: 2 is a second,
/// -2 a second downwards, 1 (or 0) a unison.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    /// Step-count-only distance; spelling resolved by the ambient key
    Generic(i8),

    /// Fully qualified distance: letter steps plus exact semitone span
    Specific { steps: i8, semitones: i8 },
}

impl Interval {
    /// Minor second: one letter up, one semitone
    pub const MINOR_SECOND: Interval = Interval::Specific {
        steps: 2,
        semitones: 1,
    };

    /// Major second: one letter up, two semitones
    pub const MAJOR_SECOND: Interval = Interval::Specific {
        steps: 2,
        semitones: 2,
    };

    /// The same distance in the opposite direction
    pub fn reverse(self) -> Interval {
        match self {
            Interval::Generic(steps) => Interval::Generic(-steps),
            Interval::Specific { steps, semitones } => Interval::Specific {
                steps: -steps,
                semitones: -semitones,
            },
        }
    }

    /// Letters moved, signed: a second up moves one letter up
    fn letter_delta(steps: i8) -> i32 {
        let magnitude = (steps.unsigned_abs() as i32).max(1) - 1;
        if steps < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Transpose a pitch by this interval, producing a new pitch.
    ///
    /// Generic transposition moves the letter and keeps the source
    /// accidental; the caller is expected to respell from the key signature.
    /// Specific transposition computes the exact alteration the semitone
    /// span demands.
    pub fn transpose(&self, pitch: &Pitch) -> Result<Pitch, IntervalError> {
        match *self {
            Interval::Generic(steps) => {
                let position = pitch.diatonic_position() + Self::letter_delta(steps);
                Ok(Pitch::new(
                    Step::from_index(position.rem_euclid(7)),
                    pitch.accidental,
                    position.div_euclid(7) as i8,
                ))
            }
            Interval::Specific { steps, semitones } => {
                let position = pitch.diatonic_position() + Self::letter_delta(steps);
                let step = Step::from_index(position.rem_euclid(7));
                let octave = position.div_euclid(7) as i8;
                let natural_midi = (octave as i32 + 1) * 12 + step.natural_semitones();
                let alteration = pitch.midi_number() + semitones as i32 - natural_midi;
                let accidental = Accidental::from_alteration(alteration).ok_or_else(|| {
                    IntervalError::Unspellable {
                        pitch: pitch.name_with_octave(),
                        steps,
                        semitones,
                    }
                })?;
                Ok(Pitch::new(step, accidental, octave))
            }
        }
    }
}
