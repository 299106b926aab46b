//! Per-kind ornament realization rules
//!
//! Each rule decomposes a source note into grace notes before the note, an
//! optional remainder of the note itself, and grace notes after it. Rules
//! are pure functions of the source snapshot and the ambient key signature;
//! they build fresh note values and never touch the source.

use crate::models::{Duration, Interval, KeySignature, Note, Pitch, Rational};

use super::errors::RealizeError;
use super::{
    AppoggiaturaParams, Direction, Expression, MordentParams, Ornament, SchleiferParams, Tremolo,
    TrillParams, TurnParams,
};

/// Decomposition of one ornament on one note
#[derive(Debug, Clone, PartialEq)]
pub struct Realization {
    /// Notes replacing the beginning of the source
    pub before: Vec<Note>,

    /// Unconsumed tail of the source, `None` when the ornament eats the
    /// whole note
    pub remainder: Option<Note>,

    /// Notes replacing the end of the source
    pub after: Vec<Note>,
}

impl Realization {
    /// Flatten into performance order
    pub fn into_notes(self) -> Vec<Note> {
        let mut notes = self.before;
        notes.extend(self.remainder);
        notes.extend(self.after);
        notes
    }

    /// Sum of all quarter lengths in the decomposition
    pub fn total_quarter_length(&self) -> Rational {
        let mut total = Rational::from_integer(0);
        for note in self.before.iter().chain(&self.remainder).chain(&self.after) {
            total += note.quarter_length();
        }
        total
    }
}

impl Ornament {
    /// Realize this ornament against a source note under a key signature.
    ///
    /// The source is read-only; every returned note is an independent copy.
    pub fn realize(&self, src: &Note, key: &KeySignature) -> Result<Realization, RealizeError> {
        match self {
            Ornament::Mordent(params) => realize_mordent(params, src, key),
            Ornament::Trill(params) => realize_trill(params, src, key),
            Ornament::Schleifer(params) => realize_schleifer(params, src),
            Ornament::Turn(params) => realize_turn(params, src, key),
            Ornament::Appoggiatura(params) => realize_appoggiatura(params, src),
            Ornament::Tremolo(tremolo) => realize_tremolo(tremolo, src),
        }
    }
}

/// Pitch of the source, or the unsupported-target error for unpitched notes
fn pitched(src: &Note) -> Result<Pitch, RealizeError> {
    src.pitch.ok_or(RealizeError::UnsupportedTarget)
}

/// Respell a generated note's accidental from the key signature
fn apply_key_accidental(note: &mut Note, key: &KeySignature) {
    if let Some(pitch) = &mut note.pitch {
        pitch.accidental = key.accidental_by_step(pitch.step);
    }
}

/// Copy of the source with its duration shortened to the given tail
fn remainder_of(src: &Note, quarter_length: Rational) -> Note {
    let mut remainder = src.clone();
    remainder.duration = Duration::from_quarter_length(quarter_length);
    remainder
}

/// Append one original-pitch copy and one transposed copy, both at the
/// ornament's note length. Shared by mordents and trills.
fn push_realized_pair(
    src: &Note,
    out: &mut Vec<Note>,
    interval: Interval,
    quarter_length: Rational,
) -> Result<(), RealizeError> {
    let pitch = pitched(src)?;
    out.push(src.ornamental_copy(quarter_length));
    let mut transposed = src.ornamental_copy(quarter_length);
    transposed.pitch = Some(interval.transpose(&pitch)?);
    out.push(transposed);
    Ok(())
}

/// Two grace notes stealing time from the front of the note, alternating
/// with the neighbor below (down) or above (up), then the shortened note.
fn realize_mordent(
    params: &MordentParams,
    src: &Note,
    key: &KeySignature,
) -> Result<Realization, RealizeError> {
    let direction = params
        .direction
        .ok_or(RealizeError::MissingDirection("mordent"))?;
    let size = params.size.ok_or(RealizeError::MissingSize("mordent"))?;
    if src.duration.is_zero() {
        return Err(RealizeError::ZeroDuration);
    }
    if src.quarter_length() < params.quarter_length * 2 {
        return Err(RealizeError::InsufficientDuration("mordent"));
    }

    let remainder_length = src.quarter_length() - params.quarter_length * 2;
    let interval = match direction {
        Direction::Down => size.reverse(),
        Direction::Up => size,
    };

    let mut grace_notes = Vec::with_capacity(2);
    push_realized_pair(src, &mut grace_notes, interval, params.quarter_length)?;
    for note in &mut grace_notes {
        apply_key_accidental(note, key);
    }

    Ok(Realization {
        before: grace_notes,
        remainder: Some(remainder_of(src, remainder_length)),
        after: Vec::new(),
    })
}

/// Alternating original/auxiliary notes consuming the entire source, with
/// an optional two-note nachschlag at the end.
fn realize_trill(
    params: &TrillParams,
    src: &Note,
    key: &KeySignature,
) -> Result<Realization, RealizeError> {
    let size = params.size.ok_or(RealizeError::MissingSize("trill"))?;
    if src.duration.is_zero() {
        return Err(RealizeError::ZeroDuration);
    }
    if src.quarter_length() < params.quarter_length * 2 {
        return Err(RealizeError::InsufficientDuration("trill"));
    }
    if params.nachschlag && src.quarter_length() < params.quarter_length * 4 {
        return Err(RealizeError::NachschlagTooShort);
    }

    let mut trill_note_count = (src.quarter_length() / params.quarter_length).to_integer();
    if params.nachschlag {
        trill_note_count -= 2;
    }

    let mut trill_notes = Vec::with_capacity(trill_note_count.max(0) as usize);
    for _ in 0..trill_note_count / 2 {
        push_realized_pair(src, &mut trill_notes, size, params.quarter_length)?;
    }

    let source_name = pitched(src)?.name_with_octave();
    if params.set_accidental_from_key_sig {
        for note in &mut trill_notes {
            // never correct the original pitch, no matter the key
            let differs = note
                .pitch
                .is_some_and(|p| p.name_with_octave() != source_name);
            if differs {
                apply_key_accidental(note, key);
            }
        }
    }

    let mut nachschlag_notes = Vec::new();
    if params.nachschlag {
        let pitch = pitched(src)?;
        let mut first = src.ornamental_copy(params.quarter_length);
        let mut second = src.ornamental_copy(params.quarter_length);
        second.pitch = Some(size.reverse().transpose(&pitch)?);
        if params.set_accidental_from_key_sig {
            apply_key_accidental(&mut first, key);
            apply_key_accidental(&mut second, key);
        }
        nachschlag_notes.push(first);
        nachschlag_notes.push(second);
    }

    Ok(Realization {
        before: trill_notes,
        remainder: None,
        after: nachschlag_notes,
    })
}

/// The schleifer is kept on the note through notation but expands to
/// nothing at realization time.
fn realize_schleifer(_params: &SchleiferParams, src: &Note) -> Result<Realization, RealizeError> {
    Ok(Realization {
        before: Vec::new(),
        remainder: Some(src.clone()),
        after: Vec::new(),
    })
}

/// Four-note gruppetto at the end of the note: auxiliary, principal,
/// opposite auxiliary, principal.
fn realize_turn(
    params: &TurnParams,
    src: &Note,
    key: &KeySignature,
) -> Result<Realization, RealizeError> {
    let size = params.size.ok_or(RealizeError::MissingSize("turn"))?;
    if src.duration.is_zero() {
        return Err(RealizeError::ZeroDuration);
    }
    if src.quarter_length() < params.quarter_length * 4 {
        return Err(RealizeError::InsufficientDuration("turn"));
    }

    let remainder_length = src.quarter_length() - params.quarter_length * 4;
    let pitch = pitched(src)?;
    let toward = size;
    let away = size.reverse();

    let mut first = src.ornamental_copy(params.quarter_length);
    first.pitch = Some(toward.transpose(&pitch)?);
    let second = src.ornamental_copy(params.quarter_length);
    let mut third = src.ornamental_copy(params.quarter_length);
    third.pitch = Some(away.transpose(&pitch)?);
    let fourth = src.ornamental_copy(params.quarter_length);

    let mut turn_notes = vec![first, second, third, fourth];
    for note in &mut turn_notes {
        apply_key_accidental(note, key);
    }

    Ok(Realization {
        before: Vec::new(),
        remainder: Some(remainder_of(src, remainder_length)),
        after: turn_notes,
    })
}

/// Grace note leaning on the beat for half the note's length, resolving to
/// the remaining half. The grace note keeps its transposed spelling: the key
/// signature is deliberately not consulted here.
fn realize_appoggiatura(
    params: &AppoggiaturaParams,
    src: &Note,
) -> Result<Realization, RealizeError> {
    let direction = params
        .direction
        .ok_or(RealizeError::MissingDirection("appoggiatura"))?;
    let size = params
        .size
        .ok_or(RealizeError::MissingSize("appoggiatura"))?;
    if src.duration.is_zero() {
        return Err(RealizeError::ZeroDuration);
    }

    let half_length = src.quarter_length() / 2;
    let interval = match direction {
        Direction::Down => size,
        Direction::Up => size.reverse(),
    };

    let pitch = pitched(src)?;
    let mut grace = src.ornamental_copy(half_length);
    grace.pitch = Some(interval.transpose(&pitch)?);

    Ok(Realization {
        before: vec![grace],
        remainder: Some(remainder_of(src, half_length)),
        after: Vec::new(),
    })
}

/// Repeated-note subdivision: fixed-length slices at the source pitch until
/// the tail fits in one slice. No transposition, so unpitched notes work.
fn realize_tremolo(tremolo: &Tremolo, src: &Note) -> Result<Realization, RealizeError> {
    let slice_length = tremolo.note_duration();

    let mut tail = src.clone();
    // strip this tremolo from the working copy so re-realizing the slices
    // cannot recurse
    let position = tail.expressions.iter().position(
        |e| matches!(e, Expression::Ornament(Ornament::Tremolo(t)) if t == tremolo),
    );
    if let Some(position) = position {
        tail.expressions.remove(position);
    }

    let mut slices = Vec::new();
    while tail.quarter_length() > slice_length {
        slices.push(tail.ornamental_copy(slice_length));
        tail.duration = Duration::from_quarter_length(tail.quarter_length() - slice_length);
    }
    slices.push(tail);

    Ok(Realization {
        before: slices,
        remainder: None,
        after: Vec::new(),
    })
}
