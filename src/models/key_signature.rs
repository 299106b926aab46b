//! Key signatures
//!
//! A key signature is a count of sharps (positive) or flats (negative) on
//! the circle of fifths. Its one job here is answering which accidental a
//! diatonic step carries under the key, which the realization rules use to
//! respell generated ornamental pitches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pitch::{Accidental, Step};

/// Order in which sharps accumulate on the staff
const SHARP_ORDER: [Step; 7] = [
    Step::F,
    Step::C,
    Step::G,
    Step::D,
    Step::A,
    Step::E,
    Step::B,
];

/// Order in which flats accumulate on the staff
const FLAT_ORDER: [Step; 7] = [
    Step::B,
    Step::E,
    Step::A,
    Step::D,
    Step::G,
    Step::C,
    Step::F,
];

/// Invalid key signature construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySignatureError {
    /// More accidentals than the staff can carry
    #[error("invalid key signature: {0} (sharps must be -7 to 7)")]
    OutOfRange(i8),
}

/// Key signature as a signed sharp count
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySignature {
    sharps: i8,
}

impl KeySignature {
    /// Create a key signature with the given number of sharps
    /// (negative for flats)
    pub fn new(sharps: i8) -> Result<Self, KeySignatureError> {
        if !(-7..=7).contains(&sharps) {
            return Err(KeySignatureError::OutOfRange(sharps));
        }
        Ok(Self { sharps })
    }

    /// Number of sharps, negative for flats
    pub fn sharps(&self) -> i8 {
        self.sharps
    }

    /// Accidental the key mandates for a diatonic step, or `None` when the
    /// step is unaltered
    pub fn accidental_by_step(&self, step: Step) -> Option<Accidental> {
        if self.sharps > 0 {
            let altered = &SHARP_ORDER[..self.sharps as usize];
            altered.contains(&step).then_some(Accidental::Sharp)
        } else if self.sharps < 0 {
            let altered = &FLAT_ORDER[..(-self.sharps) as usize];
            altered.contains(&step).then_some(Accidental::Flat)
        } else {
            None
        }
    }
}

impl Default for KeySignature {
    /// No sharps or flats
    fn default() -> Self {
        Self { sharps: 0 }
    }
}
