//! Chords: duplicate-free sets of notes, and the compact chord notation.
//!
//! The notation is a space-separated list of note tokens, e.g. `"C0 E0 G0"`.
//! Parsing collapses duplicate notes, so `"C0 C0"` is a one-note chord.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::Note;

/// An unordered set of distinct notes.
///
/// Backed by an ordered set so iteration runs from the lowest note to the
/// highest, but no ordering is part of the chord's meaning.
///
/// # Examples
/// ```
/// use chordal::{Chord, Note, PitchClass};
///
/// let chord: Chord = "C0 D#0 G0".parse().unwrap();
/// assert_eq!(chord.len(), 3);
/// assert_eq!(chord.lower().unwrap(), Note::new(PitchClass::C, 0));
/// assert_eq!(chord.upper().unwrap(), Note::new(PitchClass::G, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Chord {
    notes: BTreeSet<Note>,
}

impl Chord {
    pub fn new() -> Chord {
        Chord::default()
    }

    /// Adds a note; duplicates collapse. Returns whether the chord grew.
    pub fn insert(&mut self, note: Note) -> bool {
        self.notes.insert(note)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Iterates the notes from lowest to highest.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// The lowest note of the chord.
    ///
    /// Fails with [`TheoryError::EmptyChord`] if the chord has no notes.
    pub fn lower(&self) -> Result<Note, TheoryError> {
        self.notes
            .iter()
            .next()
            .copied()
            .ok_or(TheoryError::EmptyChord)
    }

    /// The highest note of the chord.
    ///
    /// Fails with [`TheoryError::EmptyChord`] if the chord has no notes.
    pub fn upper(&self) -> Result<Note, TheoryError> {
        self.notes
            .iter()
            .next_back()
            .copied()
            .ok_or(TheoryError::EmptyChord)
    }
}

impl FromIterator<Note> for Chord {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Chord {
        Chord {
            notes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Chord {
    type Item = Note;
    type IntoIter = std::collections::btree_set::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    /// Parses a space-separated sequence of note tokens into a chord.
    ///
    /// Tokens are split on single spaces, so a run of spaces yields an
    /// empty token and fails as an invalid format.
    fn from_str(s: &str) -> Result<Chord, TheoryError> {
        s.split(' ').map(|token| token.parse::<Note>()).collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for note in &self.notes {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
            first = false;
        }
        Ok(())
    }
}
