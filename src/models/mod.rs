//! Value types the realization engine operates on
//!
//! Pitches, intervals, durations, key signatures and timed notes are plain
//! cloneable values: the engine copies them and mutates the copies, never
//! the originals.

pub mod duration;
pub mod interval;
pub mod key_signature;
pub mod note;
pub mod pitch;

pub use duration::{Duration, Rational};
pub use interval::{Interval, IntervalError};
pub use key_signature::{KeySignature, KeySignatureError};
pub use note::Note;
pub use pitch::{Accidental, Pitch, Step};
