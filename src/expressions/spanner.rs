//! Range annotations spanning multiple notes
//!
//! A spanner references its start and end notes by position in the host
//! stream rather than owning them. The realization engine never expands
//! spanners; they exist so hosts can carry the notation through import,
//! editing and export.

use serde::{Deserialize, Serialize};

use super::errors::RealizeError;
use super::Placement;

/// Wavy-line continuation of a trill between two notes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrillExtension {
    /// Index of the first spanned note in the host stream
    pub start: usize,

    /// Index of the last spanned note
    pub end: usize,

    /// Engraved placement; `None` leaves it to the notation software
    pub placement: Option<Placement>,
}

impl TrillExtension {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            placement: None,
        }
    }
}

/// Tremolo beamed across a span of notes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TremoloSpanner {
    /// Index of the first spanned note in the host stream
    pub start: usize,

    /// Index of the last spanned note
    pub end: usize,

    pub placement: Option<Placement>,

    pub measured: bool,

    number_of_marks: u8,
}

impl TremoloSpanner {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            placement: None,
            measured: true,
            number_of_marks: 3,
        }
    }

    /// Number of beams/marks across the span
    pub fn number_of_marks(&self) -> u8 {
        self.number_of_marks
    }

    /// Set the mark count; same 0..=8 range as the single-note tremolo
    pub fn set_number_of_marks(&mut self, marks: i64) -> Result<(), RealizeError> {
        if !(0..=8).contains(&marks) {
            return Err(RealizeError::InvalidMarkCount(marks));
        }
        self.number_of_marks = marks as u8;
        Ok(())
    }
}
