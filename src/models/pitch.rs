//! Pitch representation
//!
//! A pitch is a diatonic letter, an optional accidental and an octave.
//! A `None` accidental is an unspelled natural: it sounds the same as an
//! explicit natural but prints nothing, and key-signature lookups return
//! `None` for steps the key leaves unaltered.

use serde::{Deserialize, Serialize};

/// The seven diatonic letters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Diatonic index within the octave (C=0 .. B=6)
    pub fn index(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }

    /// Step for a diatonic index; the index is taken modulo 7
    pub fn from_index(index: i32) -> Step {
        match index.rem_euclid(7) {
            0 => Step::C,
            1 => Step::D,
            2 => Step::E,
            3 => Step::F,
            4 => Step::G,
            5 => Step::A,
            _ => Step::B,
        }
    }

    /// Semitone offset of the natural form above C (C=0, D=2, E=4, F=5, ...)
    pub fn natural_semitones(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Letter name as printed
    pub fn letter(self) -> &'static str {
        match self {
            Step::C => "C",
            Step::D => "D",
            Step::E => "E",
            Step::F => "F",
            Step::G => "G",
            Step::A => "A",
            Step::B => "B",
        }
    }
}

/// Accidental attached to a pitch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// Explicit natural sign
    Natural,

    /// Sharp (#)
    Sharp,

    /// Double sharp (##)
    DoubleSharp,

    /// Flat (b)
    Flat,

    /// Double flat (bb)
    DoubleFlat,
}

impl Accidental {
    /// Get the symbol for this accidental
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }

    /// Accidental for a chromatic alteration, if it is spellable
    /// (within double-flat..double-sharp). Zero maps to an unspelled natural.
    pub fn from_alteration(alteration: i32) -> Option<Option<Accidental>> {
        match alteration {
            -2 => Some(Some(Accidental::DoubleFlat)),
            -1 => Some(Some(Accidental::Flat)),
            0 => Some(None),
            1 => Some(Some(Accidental::Sharp)),
            2 => Some(Some(Accidental::DoubleSharp)),
            _ => None,
        }
    }
}

/// Pitch with octave information
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    /// Diatonic letter
    pub step: Step,

    /// Accidental; `None` is an unspelled natural
    pub accidental: Option<Accidental>,

    /// Octave number (C4 = middle C)
    pub octave: i8,
}

impl Pitch {
    /// Create a new pitch
    pub fn new(step: Step, accidental: Option<Accidental>, octave: i8) -> Self {
        Self {
            step,
            accidental,
            octave,
        }
    }

    /// Natural pitch with no accidental
    pub fn natural(step: Step, octave: i8) -> Self {
        Self::new(step, None, octave)
    }

    /// MIDI note number (C4 = 60)
    pub fn midi_number(&self) -> i32 {
        let alteration = self.accidental.map_or(0, |a| a.semitone_offset());
        (self.octave as i32 + 1) * 12 + self.step.natural_semitones() + alteration
    }

    /// Full pitch notation, e.g. "C4", "Bb3", "F#5"
    pub fn name_with_octave(&self) -> String {
        format!(
            "{}{}{}",
            self.step.letter(),
            self.accidental.map_or("", |a| a.symbol()),
            self.octave
        )
    }

    /// Diatonic position on an absolute staff line count: seven positions
    /// per octave, used for letter arithmetic with octave carry.
    pub fn diatonic_position(&self) -> i32 {
        self.octave as i32 * 7 + self.step.index()
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::natural(Step::C, 4)
    }
}
