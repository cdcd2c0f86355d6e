//! Defines the error type used while generating, emitting and checking tables
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::io;
use chess::{Slider, Square};
use chess::bitboard::Bitboard;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used throughout the crate
///
/// Search and verification failures are fatal: the tables are a pure function of the board
/// geometry, so there is nothing to retry. They are reported wrapped in an
/// [`Error::Entry`](#variant.Entry) naming the square and slider being generated.
#[derive(Debug)]
pub enum Error {
    /// Covering a mask needs more layers than a table record has room for
    SearchExhaustion {
        /// The relevant-occupancy mask being decomposed
        mask: Bitboard,
        /// The number of layers that were found before giving up
        layers: usize,
    },
    /// A multiplier does not send a mask square to the target bit it should
    VerificationFailure {
        /// The mask square that was misplaced
        square: Square,
        /// The multiplier being checked
        multiplier: u64,
        /// The target bit the square should produce
        expected: u64,
        /// The masked product actually produced
        actual: u64,
    },
    /// A table record is not a valid decomposition of its square's mask
    InvalidRecord(&'static str),
    /// Two occupancies with different attacks share a lookup index
    IndexCollision {
        /// The shared index
        index: usize,
    },
    /// An error found while generating or checking the record of one square
    Entry {
        /// The slider whose table is affected
        slider: Slider,
        /// The square whose record is affected
        square: Square,
        /// What went wrong
        error: Box<Error>,
    },
    /// Invalid input on the command line or in a settings file
    Usage(String),
    /// A square or slider name could not be parsed
    Chess(chess::Error),
    /// Reading or writing a file failed
    Io(io::Error),
    /// A YAML document could not be read or written
    Yaml(serde_yaml::Error),
}

impl Error {
    /// Wraps the error with the slider and square it was found at
    pub fn at(self, slider: Slider, square: Square) -> Error {
        Error::Entry { slider, square, error: Box::new(self) }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            SearchExhaustion { mask, layers } => write!(
                f, "mask {:016x} is not covered after {} layers", mask, layers),
            VerificationFailure { square, multiplier, expected, actual } => write!(
                f, "multiplier {:016x} sends {} to {:016x} instead of {:016x}",
                multiplier, square, actual, expected),
            InvalidRecord(reason) => write!(f, "invalid table record: {}", reason),
            IndexCollision { index } => write!(f, "lookup index {} is shared by different attacks", index),
            Entry { slider, square, error } => write!(f, "{} on {}: {}", slider, square, error),
            Usage(msg) => f.write_str(msg),
            Chess(err) => fmt::Display::fmt(err, f),
            Io(err) => fmt::Display::fmt(err, f),
            Yaml(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Entry { error, .. } => Some(error.as_ref()),
            Error::Chess(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<chess::Error> for Error {
    fn from(err: chess::Error) -> Self {
        Error::Chess(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_the_square_and_slider() {
        let err = Error::SearchExhaustion { mask: Bitboard::from(0xaa), layers: 4 }
            .at(Slider::Rook, Square::D4);
        assert_eq!(err.to_string(), "rook on d4: mask 00000000000000aa is not covered after 4 layers");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn verification_failure_shows_both_bits() {
        let err = Error::VerificationFailure {
            square: Square::B2,
            multiplier: 0x10,
            expected: 0x8000_0000_0000_0000,
            actual: 0x2000,
        };
        assert_eq!(
            err.to_string(),
            "multiplier 0000000000000010 sends b2 to 0000000000002000 instead of 8000000000000000"
        );
    }
}
