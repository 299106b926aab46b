//! Expressions attached to notes
//!
//! The realizable ones are the ornaments: compact notational symbols that
//! stand for a prescribed elaboration of the note they decorate. Each
//! ornament kind carries its own parameter record; defaults follow common
//! engraving practice (a mordent steals two 32nd notes, a turn four 16ths,
//! and so on). Non-ornament expressions (text, fermatas) are opaque to the
//! realization pass and are dropped by the driver.

pub mod driver;
pub mod errors;
pub mod realize;
pub mod spanner;

pub use driver::{realize_ornaments, REALIZE_LOOP_LIMIT};
pub use errors::RealizeError;
pub use realize::Realization;
pub use spanner::{TremoloSpanner, TrillExtension};

use serde::{Deserialize, Serialize};

use crate::models::{Interval, Rational};

/// Direction an ornament moves away from its note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Where a symbol is engraved relative to the note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

/// Anything that can sit in a note's expression list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Expression {
    /// Realizable ornament
    Ornament(Ornament),

    /// Free text above or below the staff
    Text(TextExpression),

    /// Hold mark; affects interpretation, not realization
    Fermata(Fermata),
}

/// Text attached to a note (tempo words, character indications)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextExpression {
    pub content: String,
    pub placement: Option<Placement>,
}

impl TextExpression {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            placement: None,
        }
    }
}

/// Fermata shape as engraved
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FermataShape {
    #[default]
    Normal,
    Angled,
    Square,
}

/// A hold over or under a note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Fermata {
    pub shape: FermataShape,
}

/// Parameters shared by all mordent flavors
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MordentParams {
    /// Down for a normal mordent, up for an inverted one; must be set
    /// before realization
    pub direction: Option<Direction>,

    /// Interval to the auxiliary note
    pub size: Option<Interval>,

    /// Length of each of the two grace notes
    pub quarter_length: Rational,
}

/// Parameters for trills and shakes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrillParams {
    /// Interval to the upper auxiliary
    pub size: Option<Interval>,

    /// Length of each trill note
    pub quarter_length: Rational,

    pub placement: Placement,

    /// Append two trailing grace notes at the end of the trill
    pub nachschlag: bool,

    /// Respell generated notes from the ambient key signature; fixed-step
    /// trills turn this off
    pub set_accidental_from_key_sig: bool,
}

/// Parameters for the schleifer (slide)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchleiferParams {
    pub size: Option<Interval>,
    pub quarter_length: Rational,
}

/// Parameters for turns
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TurnParams {
    /// Interval to the first auxiliary; an inverted turn carries the
    /// reversed interval
    pub size: Option<Interval>,

    /// Length of each of the four turn notes
    pub quarter_length: Rational,

    pub placement: Placement,
}

/// Parameters shared by all appoggiatura flavors
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppoggiaturaParams {
    /// Up means the grace note approaches from below; must be set before
    /// realization
    pub direction: Option<Direction>,

    /// Interval between the grace note and the main note
    pub size: Option<Interval>,
}

/// A single-note tremolo, measured or unmeasured
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tremolo {
    pub measured: bool,
    number_of_marks: u8,
}

impl Tremolo {
    /// Measured tremolo with the default three marks
    pub fn new() -> Self {
        Self {
            measured: true,
            number_of_marks: 3,
        }
    }

    /// Number of beams/marks through the stem
    pub fn number_of_marks(&self) -> u8 {
        self.number_of_marks
    }

    /// Set the mark count; anything outside 0..=8 is rejected
    pub fn set_number_of_marks(&mut self, marks: i64) -> Result<(), RealizeError> {
        if !(0..=8).contains(&marks) {
            return Err(RealizeError::InvalidMarkCount(marks));
        }
        self.number_of_marks = marks as u8;
        Ok(())
    }

    /// Length of each repeated note: 2^(-marks) quarter lengths
    pub fn note_duration(&self) -> Rational {
        Rational::new(1, 1 << self.number_of_marks)
    }
}

impl Default for Tremolo {
    fn default() -> Self {
        Self::new()
    }
}

/// The realizable ornament kinds
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Ornament {
    Mordent(MordentParams),
    Trill(TrillParams),
    Schleifer(SchleiferParams),
    Turn(TurnParams),
    Appoggiatura(AppoggiaturaParams),
    Tremolo(Tremolo),
}

impl Ornament {
    /// Mordent with no direction set; realization will reject it until a
    /// direction is chosen
    pub fn general_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: None,
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 8),
        })
    }

    /// Normal mordent: alternates with the note below
    pub fn mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Down),
            ..Self::mordent_defaults()
        })
    }

    /// Inverted mordent: alternates with the note above
    pub fn inverted_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Up),
            ..Self::mordent_defaults()
        })
    }

    /// Normal mordent confined to a half step
    pub fn half_step_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Down),
            size: Some(Interval::MINOR_SECOND),
            quarter_length: Rational::new(1, 8),
        })
    }

    /// Normal mordent confined to a whole step
    pub fn whole_step_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Down),
            size: Some(Interval::MAJOR_SECOND),
            quarter_length: Rational::new(1, 8),
        })
    }

    /// Inverted mordent confined to a half step
    pub fn half_step_inverted_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Up),
            size: Some(Interval::MINOR_SECOND),
            quarter_length: Rational::new(1, 8),
        })
    }

    /// Inverted mordent confined to a whole step
    pub fn whole_step_inverted_mordent() -> Self {
        Ornament::Mordent(MordentParams {
            direction: Some(Direction::Up),
            size: Some(Interval::MAJOR_SECOND),
            quarter_length: Rational::new(1, 8),
        })
    }

    fn mordent_defaults() -> MordentParams {
        MordentParams {
            direction: None,
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 8),
        }
    }

    /// Trill over a generic second, respelled from the key
    pub fn trill() -> Self {
        Ornament::Trill(TrillParams {
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 8),
            placement: Placement::Above,
            nachschlag: false,
            set_accidental_from_key_sig: true,
        })
    }

    /// Trill confined to half steps, ignoring the key
    pub fn half_step_trill() -> Self {
        Ornament::Trill(TrillParams {
            size: Some(Interval::MINOR_SECOND),
            set_accidental_from_key_sig: false,
            ..Self::trill_defaults()
        })
    }

    /// Trill confined to whole steps, ignoring the key
    pub fn whole_step_trill() -> Self {
        Ornament::Trill(TrillParams {
            size: Some(Interval::MAJOR_SECOND),
            set_accidental_from_key_sig: false,
            ..Self::trill_defaults()
        })
    }

    /// A slower trill
    pub fn shake() -> Self {
        Ornament::Trill(TrillParams {
            quarter_length: Rational::new(1, 4),
            ..Self::trill_defaults()
        })
    }

    fn trill_defaults() -> TrillParams {
        TrillParams {
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 8),
            placement: Placement::Above,
            nachschlag: false,
            set_accidental_from_key_sig: true,
        }
    }

    /// Schleifer (slide); kept on the note but realized as the identity
    pub fn schleifer() -> Self {
        Ornament::Schleifer(SchleiferParams {
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 4),
        })
    }

    /// Turn (gruppetto) starting on the upper auxiliary
    pub fn turn() -> Self {
        Ornament::Turn(TurnParams {
            size: Some(Interval::Generic(2)),
            quarter_length: Rational::new(1, 4),
            placement: Placement::Above,
        })
    }

    /// Turn starting on the lower auxiliary
    pub fn inverted_turn() -> Self {
        Ornament::Turn(TurnParams {
            size: Some(Interval::Generic(-2)),
            quarter_length: Rational::new(1, 4),
            placement: Placement::Above,
        })
    }

    /// Appoggiatura with no direction set
    pub fn general_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: None,
            size: Some(Interval::MAJOR_SECOND),
        })
    }

    /// Appoggiatura approaching from above
    pub fn appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Down),
            size: Some(Interval::MAJOR_SECOND),
        })
    }

    /// Appoggiatura approaching from below
    pub fn inverted_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Up),
            size: Some(Interval::MAJOR_SECOND),
        })
    }

    /// Half-step appoggiatura from above
    pub fn half_step_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Down),
            size: Some(Interval::MINOR_SECOND),
        })
    }

    /// Whole-step appoggiatura from above
    pub fn whole_step_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Down),
            size: Some(Interval::MAJOR_SECOND),
        })
    }

    /// Half-step appoggiatura from below
    pub fn half_step_inverted_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Up),
            size: Some(Interval::MINOR_SECOND),
        })
    }

    /// Whole-step appoggiatura from below
    pub fn whole_step_inverted_appoggiatura() -> Self {
        Ornament::Appoggiatura(AppoggiaturaParams {
            direction: Some(Direction::Up),
            size: Some(Interval::MAJOR_SECOND),
        })
    }

    /// Measured tremolo with three marks
    pub fn tremolo() -> Self {
        Ornament::Tremolo(Tremolo::new())
    }

    /// Kind name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Ornament::Mordent(_) => "mordent",
            Ornament::Trill(_) => "trill",
            Ornament::Schleifer(_) => "schleifer",
            Ornament::Turn(_) => "turn",
            Ornament::Appoggiatura(_) => "appoggiatura",
            Ornament::Tremolo(_) => "tremolo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directions() {
        match Ornament::mordent() {
            Ornament::Mordent(p) => assert_eq!(p.direction, Some(Direction::Down)),
            _ => unreachable!(),
        }
        match Ornament::inverted_mordent() {
            Ornament::Mordent(p) => assert_eq!(p.direction, Some(Direction::Up)),
            _ => unreachable!(),
        }
        match Ornament::general_mordent() {
            Ornament::Mordent(p) => assert_eq!(p.direction, None),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fixed_step_trills_ignore_key() {
        match Ornament::half_step_trill() {
            Ornament::Trill(p) => {
                assert_eq!(p.size, Some(Interval::MINOR_SECOND));
                assert!(!p.set_accidental_from_key_sig);
            }
            _ => unreachable!(),
        }
        match Ornament::trill() {
            Ornament::Trill(p) => assert!(p.set_accidental_from_key_sig),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_shake_is_a_slower_trill() {
        match Ornament::shake() {
            Ornament::Trill(p) => assert_eq!(p.quarter_length, Rational::new(1, 4)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_inverted_turn_reverses_size() {
        match Ornament::inverted_turn() {
            Ornament::Turn(p) => assert_eq!(p.size, Some(Interval::Generic(-2))),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_tremolo_mark_validation() {
        let mut trem = Tremolo::new();
        assert_eq!(trem.number_of_marks(), 3);
        trem.set_number_of_marks(0).unwrap();
        assert_eq!(trem.note_duration(), Rational::from_integer(1));
        trem.set_number_of_marks(8).unwrap();
        assert_eq!(trem.note_duration(), Rational::new(1, 256));
        assert_eq!(
            trem.set_number_of_marks(9),
            Err(RealizeError::InvalidMarkCount(9))
        );
        assert_eq!(
            trem.set_number_of_marks(-1),
            Err(RealizeError::InvalidMarkCount(-1))
        );
        // failed sets leave the previous value in place
        assert_eq!(trem.number_of_marks(), 8);
    }

    #[test]
    fn test_tremolo_note_duration_default() {
        assert_eq!(Tremolo::new().note_duration(), Rational::new(1, 8));
    }
}
