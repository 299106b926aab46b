//! Timed note values
//!
//! A note couples an optional pitch (unpitched events model percussion
//! hits), an exact duration and an ordered list of attached expressions.
//! Notes are plain values: realization clones them and edits the clones, so
//! the source of a realization is never mutated.

use serde::{Deserialize, Serialize};

use crate::expressions::Expression;

use super::duration::{Duration, Rational};
use super::pitch::Pitch;

/// A timed note with attached expressions
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    /// Sounding pitch; `None` for unpitched events
    pub pitch: Option<Pitch>,

    /// Duration in quarter lengths
    pub duration: Duration,

    /// Attached expressions, in notation order
    pub expressions: Vec<Expression>,
}

impl Note {
    /// Create a pitched note
    pub fn pitched(pitch: Pitch, duration: Duration) -> Self {
        Self {
            pitch: Some(pitch),
            duration,
            expressions: Vec::new(),
        }
    }

    /// Create an unpitched note
    pub fn unpitched(duration: Duration) -> Self {
        Self {
            pitch: None,
            duration,
            expressions: Vec::new(),
        }
    }

    /// Duration in quarter lengths
    pub fn quarter_length(&self) -> Rational {
        self.duration.quarter_length
    }

    /// Copy of this note with a different duration and no expressions,
    /// the shape every generated ornamental note starts from
    pub(crate) fn ornamental_copy(&self, quarter_length: Rational) -> Note {
        Note {
            pitch: self.pitch,
            duration: Duration::from_quarter_length(quarter_length),
            expressions: Vec::new(),
        }
    }
}
