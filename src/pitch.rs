//! The twelve chromatic pitch classes.
//!
//! `PitchClass` is a cyclic enumeration in chromatic order starting at C.
//! The declaration order is the chromatic index (C=0 ... B=11), and both
//! neighbours wrap: `B.succ() == C` and `C.pred() == B`. Octave rollover is
//! not tracked here; that is the job of [`Note`](crate::note::Note).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the twelve chromatic pitch classes, octave-independent.
///
/// Ordering follows chromatic position: `C < Cs < D < ... < B`.
///
/// # Examples
/// ```
/// use chordal::PitchClass;
///
/// assert_eq!(PitchClass::B.succ(), PitchClass::C);
/// assert_eq!(PitchClass::C.pred(), PitchClass::B);
/// assert!(PitchClass::E.is_natural());
/// assert!(!PitchClass::Gs.is_natural());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    /// All twelve pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Chromatic index, C=0 through B=11.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at the given chromatic index, modulo 12.
    pub fn from_index(index: u8) -> PitchClass {
        Self::ALL[(index % 12) as usize]
    }

    /// Display name, sharps spelled with `#` (e.g. `"C#"`).
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Whether this is one of the seven white-key pitches.
    pub fn is_natural(self) -> bool {
        !matches!(
            self,
            PitchClass::Cs | PitchClass::Ds | PitchClass::Fs | PitchClass::Gs | PitchClass::As
        )
    }

    /// Next pitch class in chromatic order, wrapping `B -> C`.
    pub fn succ(self) -> PitchClass {
        Self::from_index(self.index() + 1)
    }

    /// Previous pitch class in chromatic order, wrapping `C -> B`.
    pub fn pred(self) -> PitchClass {
        Self::from_index(self.index() + 11)
    }

    /// Look up a natural pitch class by its letter name (A-G).
    /// Returns `None` for anything else, including sharp names.
    pub fn from_letter(letter: char) -> Option<PitchClass> {
        match letter {
            'C' => Some(PitchClass::C),
            'D' => Some(PitchClass::D),
            'E' => Some(PitchClass::E),
            'F' => Some(PitchClass::F),
            'G' => Some(PitchClass::G),
            'A' => Some(PitchClass::A),
            'B' => Some(PitchClass::B),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
