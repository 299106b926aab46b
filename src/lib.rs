//! Ornament realization engine for music notation
//!
//! Models the notational ornaments (trills, mordents, turns, appoggiaturas,
//! tremolos) that a performer expands into literal sounding notes, and
//! performs that expansion: each ornament attached to a timed note is
//! realized into a sequence of note copies with correct pitches, exact
//! rational durations, and key-signature-aware accidentals.

pub mod expressions;
pub mod models;

// Re-export commonly used types
pub use expressions::{
    realize_ornaments, Direction, Expression, Ornament, Placement, Realization, RealizeError,
};
pub use models::{Accidental, Duration, Interval, KeySignature, Note, Pitch, Rational, Step};
