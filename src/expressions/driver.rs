//! Realization driver
//!
//! Walks a note's expression list, realizing the first ornament each pass
//! and threading the unconsumed remainder through the expressions that are
//! left, then flattens the accumulated pieces into performance order.

use crate::models::{KeySignature, Note};

use super::errors::RealizeError;
use super::Expression;

/// Upper bound on driver passes over one note. A rule that keeps returning
/// a remainder carrying unconsumed ornaments would otherwise loop forever;
/// when the bound expires the driver stops and logs rather than failing the
/// whole score.
pub const REALIZE_LOOP_LIMIT: u32 = 100;

/// Expand every ornament on a note into the sequence of notes a performer
/// would play.
///
/// A note without expressions is returned as-is, moved into a one-element
/// vector. Errors from any realization rule propagate to the caller.
pub fn realize_ornaments(note: Note, key: &KeySignature) -> Result<Vec<Note>, RealizeError> {
    if note.expressions.is_empty() {
        return Ok(vec![note]);
    }

    let mut pre_expand: Vec<Note> = Vec::new();
    let mut post_expand: Vec<Note> = Vec::new();
    let mut current = Some(note);

    let mut finished = false;
    let mut remaining_passes = REALIZE_LOOP_LIMIT;
    while !finished && remaining_passes > 0 {
        remaining_passes -= 1;

        let Some(working) = current.take() else {
            break;
        };

        match working.expressions.first().cloned() {
            Some(Expression::Ornament(ornament)) => {
                let realization = ornament.realize(&working, key)?;
                pre_expand.extend(realization.before);
                post_expand.extend(realization.after);

                match realization.remainder {
                    // the ornament ate the entire note; trills do this
                    None => finished = true,
                    Some(mut remainder) => {
                        remainder.expressions = working.expressions[1..].to_vec();
                        finished = remainder.expressions.is_empty();
                        current = Some(remainder);
                    }
                }
            }
            Some(_) => {
                // not realizable; drop it and keep going
                let mut working = working;
                working.expressions.remove(0);
                finished = working.expressions.is_empty();
                current = Some(working);
            }
            None => finished = true,
        }
    }

    if !finished && remaining_passes == 0 {
        log::warn!(
            "ornament realization stopped after {} passes without consuming every expression",
            REALIZE_LOOP_LIMIT
        );
    }

    let mut realized = pre_expand;
    realized.extend(current);
    realized.extend(post_expand);
    Ok(realized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::{Ornament, TextExpression};
    use crate::models::{Duration, Pitch, Rational, Step};

    #[test]
    fn test_opaque_expressions_are_dropped() {
        let mut note = Note::pitched(Pitch::natural(Step::A, 4), Duration::quarter());
        note.expressions
            .push(Expression::Text(TextExpression::new("dolce")));

        let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
        assert_eq!(realized.len(), 1);
        assert!(realized[0].expressions.is_empty());
        assert_eq!(realized[0].quarter_length(), Rational::from_integer(1));
    }

    #[test]
    fn test_error_propagates_from_rule() {
        let mut note = Note::pitched(Pitch::natural(Step::A, 4), Duration::quarter());
        note.expressions
            .push(Expression::Ornament(Ornament::general_mordent()));

        let result = realize_ornaments(note, &KeySignature::default());
        assert_eq!(result, Err(RealizeError::MissingDirection("mordent")));
    }
}
