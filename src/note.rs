//! Octave-qualified notes and semitone arithmetic.
//!
//! A [`Note`] pairs a [`PitchClass`] with an octave number. Notes are plain
//! `Copy` values: stepping, transposing, and parsing all produce new notes.
//!
//! ## Octave System
//! The octave always rolls over at C: `B0.up_semitone()` is `C1`, and
//! `C1.down_semitone()` is `B0`. No range is imposed on the octave number;
//! negative octaves are valid.
//!
//! ## Diatonic Transposition
//! [`Note::transpose`] walks up the major scale by interval number, where
//! interval 1 is the root itself. The walk repeats the major-scale step
//! pattern `2 2 1 2 2 2 1` (semitones between successive degrees), so
//! interval 8 lands exactly one octave up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Semitone steps between successive degrees of the major scale.
const MAJOR_SCALE_STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// A pitch class in a specific octave.
///
/// Notes order by absolute chromatic position (`octave * 12 + pitch index`),
/// so `B0 < C1` even though `B > C` as pitch classes.
///
/// # Examples
/// ```
/// use chordal::{Note, PitchClass};
///
/// let c0 = Note::new(PitchClass::C, 0);
/// assert_eq!(c0.transpose(5).unwrap(), Note::new(PitchClass::G, 0));
/// assert_eq!(c0.to_string(), "C0");
/// assert_eq!("D#0".parse::<Note>().unwrap(), Note::new(PitchClass::Ds, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: i32,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i32) -> Note {
        Note { pitch, octave }
    }

    /// Absolute chromatic position: `octave * 12 + pitch index`.
    ///
    /// `C0` is position 0; positions are negative below octave 0.
    pub fn chromatic(self) -> i32 {
        self.octave * 12 + self.pitch.index() as i32
    }

    /// The note one semitone higher. Crossing B raises the octave.
    pub fn up_semitone(self) -> Note {
        if self.pitch == PitchClass::B {
            Note::new(PitchClass::C, self.octave + 1)
        } else {
            Note::new(self.pitch.succ(), self.octave)
        }
    }

    /// The note one semitone lower. Crossing C lowers the octave.
    pub fn down_semitone(self) -> Note {
        if self.pitch == PitchClass::C {
            Note::new(PitchClass::B, self.octave - 1)
        } else {
            Note::new(self.pitch.pred(), self.octave)
        }
    }

    /// Move up the major scale rooted at this note by interval number.
    ///
    /// Interval 1 is the root itself, so `transpose(1)` returns the note
    /// unchanged; interval 5 from C is G; interval 8 is the octave.
    /// Intervals below 1 are rejected with
    /// [`TheoryError::InvalidInterval`].
    ///
    /// # Examples
    /// ```
    /// use chordal::{Note, PitchClass};
    ///
    /// let c0 = Note::new(PitchClass::C, 0);
    /// assert_eq!(c0.transpose(1).unwrap(), c0);
    /// assert_eq!(c0.transpose(8).unwrap(), Note::new(PitchClass::C, 1));
    /// assert!(c0.transpose(0).is_err());
    /// ```
    pub fn transpose(self, interval: i32) -> Result<Note, TheoryError> {
        if interval < 1 {
            return Err(TheoryError::InvalidInterval { interval });
        }
        let mut note = self;
        let mut scale_index = 0;
        for _ in 0..(interval - 1) {
            for _ in 0..MAJOR_SCALE_STEPS[scale_index] {
                note = note.up_semitone();
            }
            scale_index = (scale_index + 1) % MAJOR_SCALE_STEPS.len();
        }
        Ok(note)
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.chromatic().cmp(&other.chromatic())
    }
}

impl fmt::Display for Note {
    /// Formats as `"<name><octave>"`; sharps keep their `#` spelling, so
    /// `Note::new(PitchClass::Ds, 0)` renders as `"D#0"`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parses a single note token: `[A-G](#|<modifier>)?<digit>`.
    ///
    /// Two characters mean a natural (`"C0"`). Three characters insert a
    /// modifier: `#` shifts the pitch up one chromatic step, any other
    /// single character shifts it down one (so `"Db0"` and `"D-0"` both
    /// mean C#0's enharmonic D-flat). The octave is a single decimal
    /// digit; multi-digit octaves are not supported by the notation.
    fn from_str(s: &str) -> Result<Note, TheoryError> {
        let invalid = || TheoryError::InvalidFormat {
            token: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        let (pitch, octave_char) = match chars.len() {
            2 => {
                let pitch = PitchClass::from_letter(chars[0]).ok_or_else(invalid)?;
                (pitch, chars[1])
            }
            3 => {
                let letter = PitchClass::from_letter(chars[0]).ok_or_else(invalid)?;
                let pitch = if chars[1] == '#' {
                    letter.succ()
                } else {
                    letter.pred()
                };
                (pitch, chars[2])
            }
            _ => return Err(invalid()),
        };
        let octave = octave_char.to_digit(10).ok_or_else(invalid)? as i32;
        Ok(Note::new(pitch, octave))
    }
}

/// Semitone distance from `from` to `to` as defined by the chord notation:
/// `(to.octave - from.octave) * 12 + to.pitch index`.
///
/// The formula deliberately ignores `from`'s pitch class, so it is only a
/// true semitone distance when `from` is a C. This quirk is part of the
/// library's compatibility contract; use [`chromatic_distance`] for the
/// corrected measure.
///
/// # Examples
/// ```
/// use chordal::{semitone_distance, Note, PitchClass};
///
/// let c0 = Note::new(PitchClass::C, 0);
/// assert_eq!(semitone_distance(c0, Note::new(PitchClass::B, 0)), 11);
/// assert_eq!(semitone_distance(Note::new(PitchClass::C, 1), c0), -12);
/// ```
pub fn semitone_distance(from: Note, to: Note) -> i32 {
    (to.octave - from.octave) * 12 + to.pitch.index() as i32
}

/// Signed semitone distance between two arbitrary notes.
///
/// Unlike [`semitone_distance`] this subtracts `from`'s full chromatic
/// position, so it is symmetric: `chromatic_distance(a, b) ==
/// -chromatic_distance(b, a)`.
pub fn chromatic_distance(from: Note, to: Note) -> i32 {
    to.chromatic() - from.chromatic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: PitchClass, octave: i32) -> Note {
        Note::new(pitch, octave)
    }

    #[test]
    fn test_up_semitone() {
        let mut n = note(PitchClass::C, 0);
        n = n.up_semitone();
        assert_eq!(n, note(PitchClass::Cs, 0));
        n = n.up_semitone();
        assert_eq!(n, note(PitchClass::D, 0));
        n = n.up_semitone();
        assert_eq!(n, note(PitchClass::Ds, 0));

        // E to F has no sharp in between
        assert_eq!(note(PitchClass::E, 0).up_semitone(), note(PitchClass::F, 0));

        // Octave rolls over at B
        assert_eq!(note(PitchClass::B, 0).up_semitone(), note(PitchClass::C, 1));
    }

    #[test]
    fn test_down_semitone() {
        let mut n = note(PitchClass::F, 0);
        n = n.down_semitone();
        assert_eq!(n, note(PitchClass::E, 0));
        n = n.down_semitone();
        assert_eq!(n, note(PitchClass::Ds, 0));
        n = n.down_semitone();
        assert_eq!(n, note(PitchClass::D, 0));

        // Octave rolls back at C
        assert_eq!(
            note(PitchClass::C, 1).down_semitone(),
            note(PitchClass::B, 0)
        );
    }

    #[test]
    fn test_semitone_round_trip() {
        for pc in PitchClass::ALL {
            for octave in [-1, 0, 4] {
                let n = note(pc, octave);
                assert_eq!(n.up_semitone().down_semitone(), n);
                assert_eq!(n.down_semitone().up_semitone(), n);
            }
        }
    }

    #[test]
    fn test_transpose_identity() {
        for pc in PitchClass::ALL {
            let n = note(pc, 3);
            assert_eq!(n.transpose(1).unwrap(), n);
        }
    }

    #[test]
    fn test_transpose_major_scale_from_c() {
        // The C major scale, degree by degree, through the octave break
        let c0 = note(PitchClass::C, 0);
        let expected = [
            (1, PitchClass::C, 0),
            (2, PitchClass::D, 0),
            (3, PitchClass::E, 0),
            (4, PitchClass::F, 0),
            (5, PitchClass::G, 0),
            (6, PitchClass::A, 0),
            (7, PitchClass::B, 0),
            (8, PitchClass::C, 1),
            (9, PitchClass::D, 1),
            (10, PitchClass::E, 1),
            (11, PitchClass::F, 1),
            (12, PitchClass::G, 1),
            (13, PitchClass::A, 1),
        ];
        for (interval, pitch, octave) in expected {
            assert_eq!(
                c0.transpose(interval).unwrap(),
                note(pitch, octave),
                "interval {}",
                interval
            );
        }
    }

    #[test]
    fn test_transpose_rejects_intervals_below_one() {
        let c0 = note(PitchClass::C, 0);
        assert_eq!(
            c0.transpose(0),
            Err(TheoryError::InvalidInterval { interval: 0 })
        );
        assert_eq!(
            c0.transpose(-3),
            Err(TheoryError::InvalidInterval { interval: -3 })
        );
    }

    #[test]
    fn test_ordering_by_chromatic_position() {
        // Within an octave, pitch decides
        assert!(note(PitchClass::C, 0) < note(PitchClass::Ds, 0));
        assert!(note(PitchClass::G, 0) > note(PitchClass::Ds, 0));
        // Across octaves, the higher octave wins even for a lower pitch
        assert!(note(PitchClass::B, 0) < note(PitchClass::C, 1));
        assert!(note(PitchClass::C, 2) > note(PitchClass::B, 0));
        // Same pitch, different octave
        assert!(note(PitchClass::C, 0) < note(PitchClass::C, 1));
        // Equality needs both fields
        assert_eq!(note(PitchClass::A, 4), note(PitchClass::A, 4));
        assert_ne!(note(PitchClass::A, 4), note(PitchClass::A, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(note(PitchClass::C, 0).to_string(), "C0");
        assert_eq!(note(PitchClass::Ds, 0).to_string(), "D#0");
        assert_eq!(note(PitchClass::As, 7).to_string(), "A#7");
        assert_eq!(note(PitchClass::B, -1).to_string(), "B-1");
    }

    #[test]
    fn test_parse_naturals_and_sharps() {
        assert_eq!("C0".parse::<Note>().unwrap(), note(PitchClass::C, 0));
        assert_eq!("G7".parse::<Note>().unwrap(), note(PitchClass::G, 7));
        assert_eq!("C#0".parse::<Note>().unwrap(), note(PitchClass::Cs, 0));
        assert_eq!("F#3".parse::<Note>().unwrap(), note(PitchClass::Fs, 3));
        // B# wraps to C without touching the written octave
        assert_eq!("B#0".parse::<Note>().unwrap(), note(PitchClass::C, 0));
    }

    #[test]
    fn test_parse_flat_modifier() {
        // Any non-'#' modifier character shifts the pitch down one step
        assert_eq!("Db0".parse::<Note>().unwrap(), note(PitchClass::Cs, 0));
        assert_eq!("A-2".parse::<Note>().unwrap(), note(PitchClass::Gs, 2));
        // C-flat wraps to B without touching the written octave
        assert_eq!("Cb0".parse::<Note>().unwrap(), note(PitchClass::B, 0));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for bad in ["", "C", "Xyz0", "C#10", "H0", "CX", "C##", "c0"] {
            assert_eq!(
                bad.parse::<Note>(),
                Err(TheoryError::InvalidFormat {
                    token: bad.to_string()
                }),
                "token {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_semitone_distance_table() {
        let c0 = note(PitchClass::C, 0);
        assert_eq!(semitone_distance(c0, c0), 0);
        assert_eq!(semitone_distance(c0, note(PitchClass::B, 0)), 11);
        assert_eq!(semitone_distance(c0, note(PitchClass::C, 1)), 12);
        assert_eq!(semitone_distance(c0, note(PitchClass::Cs, 1)), 13);
        assert_eq!(semitone_distance(c0, note(PitchClass::C, 2)), 24);
        assert_eq!(semitone_distance(note(PitchClass::C, 1), c0), -12);
        assert_eq!(
            semitone_distance(note(PitchClass::C, 1), note(PitchClass::B, 0)),
            -1
        );
    }

    #[test]
    fn test_semitone_distance_ignores_from_pitch() {
        // The notation formula only looks at from's octave
        let to = note(PitchClass::E, 0);
        assert_eq!(
            semitone_distance(note(PitchClass::C, 0), to),
            semitone_distance(note(PitchClass::G, 0), to)
        );
    }

    #[test]
    fn test_chromatic_distance_is_signed_and_symmetric() {
        let g0 = note(PitchClass::G, 0);
        let e0 = note(PitchClass::E, 0);
        assert_eq!(chromatic_distance(g0, e0), -3);
        assert_eq!(chromatic_distance(e0, g0), 3);
        assert_eq!(
            chromatic_distance(note(PitchClass::B, 0), note(PitchClass::C, 1)),
            1
        );
    }
}
