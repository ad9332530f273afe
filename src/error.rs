//! # Error Types
//!
//! This module defines all error types for the chordal library.
//!
//! ## Error Types
//! - `InvalidFormat` - a chord-notation token does not match the expected shape
//! - `EmptyChord` - `lower`/`upper` requested on a chord with no notes
//! - `InvalidInterval` - `transpose` called with a scale interval below 1
//!
//! ## Usage
//! ```rust
//! use chordal::{parse_chord, TheoryError};
//!
//! match parse_chord("C0 Xyz0") {
//!     Ok(chord) => println!("{} notes", chord.len()),
//!     Err(TheoryError::InvalidFormat { token }) => {
//!         eprintln!("bad token: {}", token);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A chord-notation token could not be parsed.
    ///
    /// Valid tokens are two characters (`"C0"`) or three characters
    /// (`"C#0"`, `"Db0"`): a natural letter A-G, an optional modifier, and a
    /// single octave digit.
    ///
    /// # Example
    /// ```
    /// # use chordal::TheoryError;
    /// let err = TheoryError::InvalidFormat { token: "Xyz0".to_string() };
    /// assert_eq!(err.to_string(), "Invalid format in Xyz0");
    /// ```
    #[error("Invalid format in {token}")]
    InvalidFormat { token: String },

    /// An extremum was requested on an empty chord.
    #[error("Chord has no notes to take an extremum of")]
    EmptyChord,

    /// `transpose` was called with a scale interval below 1.
    ///
    /// Interval 1 is the root itself; smaller values have no meaning on the
    /// major-scale walk.
    ///
    /// # Example
    /// ```
    /// # use chordal::TheoryError;
    /// let err = TheoryError::InvalidInterval { interval: 0 };
    /// assert_eq!(err.to_string(), "Scale interval must be at least 1, got 0");
    /// ```
    #[error("Scale interval must be at least 1, got {interval}")]
    InvalidInterval { interval: i32 },
}
