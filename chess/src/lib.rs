//! Board geometry shared by the slider table generator.
//!
//! The crate provides the coordinates of the board ([`File`], [`Rank`] and [`Square`]), the two
//! kinds of sliding movement ([`Slider`]), and a set-of-squares type, [`Bitboard`](bitboard/struct.Bitboard.html),
//! along with the relevant-occupancy and attack geometry built on top of it.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]

use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;
use serde::{Serialize, Deserialize};

pub mod bitboard;
pub mod error;

pub use error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The way a sliding piece moves: along diagonals or along ranks and files.
///
/// Queens move both ways, so their attacks are the union of the two and they need no tables of
/// their own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Slider {
    /// Moves along diagonals
    Bishop = 0,
    /// Moves along ranks and files
    Rook = 1,
}

impl Slider {
    /// The number of slider kinds
    pub const COUNT: usize = Slider::Rook as usize + 1;

    /// All slider kinds, in table order
    pub const ALL: [Slider; Slider::COUNT] = [Slider::Bishop, Slider::Rook];

    /// The `(file, rank)` steps of the four rays this slider moves along
    pub fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (-1, 1), (-1, -1), (1, -1)],
            Slider::Rook => [(1, 0), (0, 1), (-1, 0), (0, -1)],
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Slider::Bishop => "bishop",
            Slider::Rook => "rook",
        })
    }
}

impl FromStr for Slider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b"|"bishop" => Ok(Slider::Bishop),
            "r"|"rook"   => Ok(Slider::Rook),
            _            => Err(Error::ParseError),
        }
    }
}

impl TryFrom<usize> for Slider {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Slider::ALL.get(value).copied().ok_or(Error::TryFromIntError)
    }
}

impl From<Slider> for usize {
    fn from(value: Slider) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled from left to right from White's perspective as
/// `A` through `H`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum File {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7,
}

impl File {
    /// The number of files
    pub const COUNT: usize = File::H as usize + 1;

    /// Returns the file `offset` files away, or `None` if that is off the board
    pub fn offset(self, offset: i8) -> Option<File> {
        let idx = self as i8 + offset;
        if idx < 0 { None } else { File::try_from(idx as usize).ok() }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            File::A => "a",
            File::B => "b",
            File::C => "c",
            File::D => "d",
            File::E => "e",
            File::F => "f",
            File::G => "g",
            File::H => "h",
        })
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a"|"A" => Ok(File::A),
            "b"|"B" => Ok(File::B),
            "c"|"C" => Ok(File::C),
            "d"|"D" => Ok(File::D),
            "e"|"E" => Ok(File::E),
            "f"|"F" => Ok(File::F),
            "g"|"G" => Ok(File::G),
            "h"|"H" => Ok(File::H),
            _       => Err(Error::ParseError),
        }
    }
}

impl Default for File {
    fn default() -> Self {
        File::A
    }
}

impl TryFrom<usize> for File {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, labeled from nearest to farthest from White's perspective
/// as `R1` through `R8`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Rank {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    R1 = 0, R2 = 1, R3 = 2, R4 = 3, R5 = 4, R6 = 5, R7 = 6, R8 = 7,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = Rank::R8 as usize + 1;

    /// Returns the rank `offset` ranks away, or `None` if that is off the board
    pub fn offset(self, offset: i8) -> Option<Rank> {
        let idx = self as i8 + offset;
        if idx < 0 { None } else { Rank::try_from(idx as usize).ok() }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Rank::R1 => "1",
            Rank::R2 => "2",
            Rank::R3 => "3",
            Rank::R4 => "4",
            Rank::R5 => "5",
            Rank::R6 => "6",
            Rank::R7 => "7",
            Rank::R8 => "8",
        })
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Rank::R1),
            "2" => Ok(Rank::R2),
            "3" => Ok(Rank::R3),
            "4" => Ok(Rank::R4),
            "5" => Ok(Rank::R5),
            "6" => Ok(Rank::R6),
            "7" => Ok(Rank::R7),
            "8" => Ok(Rank::R8),
            _   => Err(Error::ParseError),
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::R1
    }
}

impl TryFrom<usize> for Rank {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, labeled using the `File` and `Rank` as coordinates.
///
/// Squares are numbered rank by rank, so `A1` is bit 0, `H1` is bit 7, `A2` is bit 8 and `H8` is
/// bit 63 of a [`Bitboard`](bitboard/struct.Bitboard.html).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Square {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A1 = 0o00, B1 = 0o01, C1 = 0o02, D1 = 0o03, E1 = 0o04, F1 = 0o05, G1 = 0o06, H1 = 0o07,
    A2 = 0o10, B2 = 0o11, C2 = 0o12, D2 = 0o13, E2 = 0o14, F2 = 0o15, G2 = 0o16, H2 = 0o17,
    A3 = 0o20, B3 = 0o21, C3 = 0o22, D3 = 0o23, E3 = 0o24, F3 = 0o25, G3 = 0o26, H3 = 0o27,
    A4 = 0o30, B4 = 0o31, C4 = 0o32, D4 = 0o33, E4 = 0o34, F4 = 0o35, G4 = 0o36, H4 = 0o37,
    A5 = 0o40, B5 = 0o41, C5 = 0o42, D5 = 0o43, E5 = 0o44, F5 = 0o45, G5 = 0o46, H5 = 0o47,
    A6 = 0o50, B6 = 0o51, C6 = 0o52, D6 = 0o53, E6 = 0o54, F6 = 0o55, G6 = 0o56, H6 = 0o57,
    A7 = 0o60, B7 = 0o61, C7 = 0o62, D7 = 0o63, E7 = 0o64, F7 = 0o65, G7 = 0o66, H7 = 0o67,
    A8 = 0o70, B8 = 0o71, C8 = 0o72, D8 = 0o73, E8 = 0o74, F8 = 0o75, G8 = 0o76, H8 = 0o77,
}

impl Square {
    /// The number of squares
    pub const COUNT: usize = Square::H8 as usize + 1;

    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(((rank as usize) << 3) + file as usize).expect("INFALLIBLE")
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        File::try_from((self as usize) & 7).expect("INFALLIBLE")
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        Rank::try_from((self as usize) >> 3).expect("INFALLIBLE")
    }

    /// Returns the square `file` files and `rank` ranks away, or `None` if that is off the board
    pub fn offset(self, file: i8, rank: i8) -> Option<Square> {
        Some(Square::from_coord(self.file().offset(file)?, self.rank().offset(rank)?))
    }

    /// Returns an iterator over all squares, from `A1` to `H8`
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..Square::COUNT).map(|idx| Square::try_from(idx).expect("INFALLIBLE"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&(self.file().to_string() + &self.rank().to_string()))
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let c: Vec<_> = s.chars().collect();
        if c.len() == 2 {
            Ok(Square::from_coord(c[0].to_string().parse()?, c[1].to_string().parse()?))
        } else {
            Err(Error::ParseError)
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::A1
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(Error::TryFromIntError)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

#[cfg(test)]
mod slider_tests {
    use std::convert::TryFrom;
    use super::Slider;

    #[test]
    fn display_and_fromstr_traits_agree() {
        for &slider in Slider::ALL.iter() {
            assert_eq!(slider.to_string().parse::<Slider>().unwrap(), slider);
        }
        assert_eq!("B".parse::<Slider>().unwrap(), Slider::Bishop);
        assert_eq!("Rook".parse::<Slider>().unwrap(), Slider::Rook);
        assert!("queen".parse::<Slider>().is_err());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        assert_eq!(Slider::try_from(0).unwrap(), Slider::Bishop);
        assert_eq!(Slider::try_from(1).unwrap(), Slider::Rook);
        assert!(Slider::try_from(2).is_err());
        assert_eq!(usize::from(Slider::Rook), 1);
    }
}
