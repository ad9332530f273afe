//! # chordal
//!
//! A small music theory library: pitch classes, octave-qualified notes,
//! chords, diatonic transposition along the major scale, and a compact
//! text notation for chords.
//!
//! ```
//! use chordal::{parse_chord, Note, PitchClass};
//!
//! let chord = parse_chord("C0 D#0 G0").unwrap();
//! assert_eq!(chord.lower().unwrap(), Note::new(PitchClass::C, 0));
//!
//! // A fifth above C is G
//! let root = Note::new(PitchClass::C, 0);
//! assert_eq!(root.transpose(5).unwrap(), Note::new(PitchClass::G, 0));
//! ```
//!
//! All types are plain immutable values; every operation is a pure function
//! and the library does no I/O.

pub mod chord;
pub mod error;
pub mod note;
pub mod pitch;

pub use chord::Chord;
pub use error::TheoryError;
pub use note::{chromatic_distance, semitone_distance, Note};
pub use pitch::PitchClass;

/// Parse chord notation like `"C0 D#0 G0"` into a [`Chord`].
/// This is the main entry point for the text notation.
pub fn parse_chord(source: &str) -> Result<Chord, TheoryError> {
    source.parse()
}
