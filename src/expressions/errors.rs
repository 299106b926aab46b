//! Realization error taxonomy
//!
//! Every variant is a precondition failure surfaced synchronously to the
//! caller; nothing here is retried or swallowed. Returning `Result` keeps a
//! whole-score realization loop able to skip a bad note without aborting
//! the batch.

use thiserror::Error;

use crate::models::IntervalError;

/// Why an ornament could not be realized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RealizeError {
    /// Mordent or appoggiatura realized without an up/down direction
    #[error("cannot realize the {0} if its direction is not known")]
    MissingDirection(&'static str),

    /// Realization attempted with no interval size set
    #[error("cannot realize the {0} if there is no size given")]
    MissingSize(&'static str),

    /// Source note has no duration to steal time from
    #[error("cannot steal time from an object with no duration")]
    ZeroDuration,

    /// Source duration is below the ornament's minimum
    #[error("the note is not long enough to realize the {0}")]
    InsufficientDuration(&'static str),

    /// Trill with nachschlag needs room for the trailing grace notes
    #[error("the note is not long enough for a nachschlag")]
    NachschlagTooShort,

    /// Tremolo mark count outside the notatable range
    #[error("number of marks must be a number from 0 to 8, got {0}")]
    InvalidMarkCount(i64),

    /// Transposing ornament applied to an unpitched note
    #[error("cannot realize a transposing ornament on an unpitched note")]
    UnsupportedTarget,

    /// Transposition produced a pitch with no valid spelling
    #[error(transparent)]
    Interval(#[from] IntervalError),
}
