use ornament_engine::expressions::{Fermata, TextExpression};
use ornament_engine::{
    realize_ornaments, Duration, Expression, KeySignature, Note, Ornament, Pitch, Rational, Step,
};

fn ornamented(step: Step, octave: i8, quarter_length: Rational, ornament: Ornament) -> Note {
    let mut note = Note::pitched(
        Pitch::natural(step, octave),
        Duration::from_quarter_length(quarter_length),
    );
    note.expressions.push(Expression::Ornament(ornament));
    note
}

#[test]
fn test_ornament_free_note_passes_through() {
    let note = Note::pitched(Pitch::natural(Step::C, 4), Duration::quarter());
    let expected = note.clone();

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    assert_eq!(realized, vec![expected]);
}

#[test]
fn test_single_mordent_through_driver() {
    let note = ornamented(Step::C, 4, Rational::new(1, 2), Ornament::mordent());

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();

    let pitches: Vec<String> = realized
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(pitches, ["C4", "B3", "C4"]);

    let lengths: Vec<Rational> = realized.iter().map(|n| n.quarter_length()).collect();
    assert_eq!(
        lengths,
        [
            Rational::new(1, 8),
            Rational::new(1, 8),
            Rational::new(1, 4)
        ]
    );

    // the remainder has had its processed ornament stripped
    assert!(realized[2].expressions.is_empty());
}

#[test]
fn test_trill_consumes_the_note() {
    let note = ornamented(Step::C, 4, Rational::new(1, 2), Ornament::trill());

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    let pitches: Vec<String> = realized
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(pitches, ["C4", "D4", "C4", "D4"]);
}

#[test]
fn test_turn_notes_land_after_the_remainder() {
    let note = ornamented(Step::C, 5, Rational::from_integer(2), Ornament::turn());

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();

    let pitches: Vec<String> = realized
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(pitches, ["C5", "D5", "C5", "B4", "C5"]);
    assert_eq!(realized[0].quarter_length(), Rational::from_integer(1));
}

#[test]
fn test_opaque_expressions_dropped_without_output() {
    let mut note = Note::pitched(Pitch::natural(Step::A, 4), Duration::quarter());
    note.expressions
        .push(Expression::Text(TextExpression::new("dolce")));
    note.expressions.push(Expression::Fermata(Fermata::default()));

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    assert_eq!(realized.len(), 1);
    assert!(realized[0].expressions.is_empty());
    assert_eq!(realized[0].pitch, Some(Pitch::natural(Step::A, 4)));
}

#[test]
fn test_opaque_expression_before_ornament() {
    let mut note = Note::pitched(
        Pitch::natural(Step::C, 4),
        Duration::from_quarter_length(Rational::new(1, 2)),
    );
    note.expressions
        .push(Expression::Text(TextExpression::new("espressivo")));
    note.expressions
        .push(Expression::Ornament(Ornament::mordent()));

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    let pitches: Vec<String> = realized
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(pitches, ["C4", "B3", "C4"]);
}

#[test]
fn test_chained_ornaments_thread_the_remainder() {
    // a mordent steals the front of the note, then a trill consumes what
    // is left
    let mut note = Note::pitched(Pitch::natural(Step::C, 4), Duration::quarter());
    note.expressions
        .push(Expression::Ornament(Ornament::mordent()));
    note.expressions.push(Expression::Ornament(Ornament::trill()));

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();

    let pitches: Vec<String> = realized
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(pitches, ["C4", "B3", "C4", "D4", "C4", "D4", "C4", "D4"]);

    let total: Rational = realized.iter().map(|n| n.quarter_length()).sum();
    assert_eq!(total, Rational::from_integer(1));
}

#[test]
fn test_nachschlag_lands_at_the_very_end() {
    let trill = match Ornament::trill() {
        Ornament::Trill(mut params) => {
            params.nachschlag = true;
            Ornament::Trill(params)
        }
        _ => unreachable!(),
    };
    let note = ornamented(Step::C, 4, Rational::from_integer(1), trill);

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    assert_eq!(realized.len(), 8, "six trill notes plus two nachschlag notes");

    let tail: Vec<String> = realized[6..]
        .iter()
        .map(|n| n.pitch.unwrap().name_with_octave())
        .collect();
    assert_eq!(tail, ["C4", "B3"]);

    let total: Rational = realized.iter().map(|n| n.quarter_length()).sum();
    assert_eq!(total, Rational::from_integer(1));
}

#[test]
fn test_schleifer_passes_the_note_through() {
    let note = ornamented(Step::D, 4, Rational::new(1, 2), Ornament::schleifer());

    let realized = realize_ornaments(note, &KeySignature::default()).unwrap();
    assert_eq!(realized.len(), 1);
    assert_eq!(realized[0].pitch, Some(Pitch::natural(Step::D, 4)));
    assert_eq!(realized[0].quarter_length(), Rational::new(1, 2));
    assert!(realized[0].expressions.is_empty());
}

#[test]
fn test_driver_propagates_rule_errors() {
    let note = ornamented(
        Step::C,
        4,
        Rational::from_integer(1),
        Ornament::general_appoggiatura(),
    );
    let result = realize_ornaments(note, &KeySignature::default());
    assert!(result.is_err());
}

#[test]
fn test_ornamented_note_serde_round_trip() {
    let note = ornamented(Step::F, 3, Rational::new(3, 4), Ornament::inverted_turn());

    let json = serde_json::to_string(&note).unwrap();
    let decoded: Note = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, note);
}
