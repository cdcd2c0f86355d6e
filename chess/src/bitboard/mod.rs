//! Provides a representation of a set of squares on the board
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Bit primitives
//! Everything the table generator does to a set of squares comes down to three operations on a
//! 64-bit word: isolating the lowest set bit, counting the set bits, and multiplying with
//! wrap-around before masking the product. `Bitboard` provides these as methods, and
//! [`lowest_bit`](fn.lowest_bit.html) provides the first one for words that aren't squares (such
//! as the high bits of a lookup index).
//!
//! ```rust
//! use chess::Square;
//! use chess::bitboard::Bitboard;
//!
//! let bb = Bitboard::from(Square::C1) | Square::A2.into();
//! assert_eq!(bb.len(), 2);
//! assert_eq!(bb.lowest(), Bitboard::from(Square::C1));
//! assert_eq!(bb.masked_product(1 << 60, 0xf000_0000_0000_0000), 0x4000_0000_0000_0000);
//! ```
//!
//! ## Occupancy subsets
//! A slider's attacks only depend on which of its relevant squares are occupied, so tables are
//! built by enumerating every subset of a mask:
//!
//! ```rust
//! use chess::Square;
//! use chess::bitboard::Bitboard;
//!
//! let mask = Bitboard::from(Square::B2) | Square::G7.into();
//! let subsets: Vec<_> = mask.subsets().collect();
//! assert_eq!(subsets, vec![
//!     Bitboard::new(),
//!     Bitboard::from(Square::B2),
//!     Bitboard::from(Square::G7),
//!     mask,
//! ]);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryInto;
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use serde::{Serialize, Deserialize};
use super::*;

mod geometry;
pub use geometry::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Returns the lowest set bit of `word` on its own, or 0 if `word` is 0
#[inline]
pub fn lowest_bit(word: u64) -> u64 {
    word & word.wrapping_neg()
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// A `Bitboard` is, essentially, a set of [`Square`](../enum.Square.html)s stored in a 64-bit
/// integer. Each bit corresponds to one `Square`. If the bit is set, that `Square` is present. If
/// it is clear, the `Square` is not present. The diagram below shows the layout of the bits.
///
/// ```text
///      a    b    c    d    e    f    g    h
///    ---------------------------------------
/// 8 | 56 | 57 | 58 | 59 | 60 | 61 | 62 | 63 | 8
///    ---------------------------------------
/// 7 | 48 | 49 | 50 | 51 | 52 | 53 | 54 | 55 | 7
///    ---------------------------------------
///                      . . .
///    ---------------------------------------
/// 2 | 08 | 09 | 10 | 11 | 12 | 13 | 14 | 15 | 2
///    ---------------------------------------
/// 1 | 00 | 01 | 02 | 03 | 04 | 05 | 06 | 07 | 1
///    ---------------------------------------
///      a    b    c    d    e    f    g    h
/// ```
///
/// `Bitboard` implements all the bit-wise logic operators: `|`, `&`, `^`, `!`, `|=`, `&=`, and
/// `^=`. It also has methods that are typical for sets and collections, such as `insert`, `pop`,
/// `len`, and `contains`. It implements IntoIterator. However, since it's only a 64-bit value, it
/// implement's `Copy`, and there's no need for the borrowing iterator methods `iter` and
/// `iter_mut`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new, empty bitboard
    pub fn new() -> Bitboard {
        Default::default()
    }

    /// Returns the underlying 64-bit word
    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of squares in the bitboard
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the bitboard is empty
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        !(self & sq.into()).is_empty()
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Returns `true` if `self` does not intersect `other`
    pub fn is_disjoint(self, other: Bitboard) -> bool {
        (self & other).is_empty()
    }

    /// Returns `true` if every square of `self` is also in `other`
    pub fn is_subset(self, other: Bitboard) -> bool {
        (self & !other).is_empty()
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Removes a square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        if self.0 > 0 {
            // get the least significant bit
            let sq: Square = (self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE");
            // clear the least significant bit
            self.0 &= self.0 - 1;

            Some(sq)
        } else {
            None
        }
    }

    /// Returns the square that would be removed by a pop command
    pub fn peek(self) -> Option<Square> {
        if self.0 > 0 {
            // get the least significant bit
            Some((self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE"))
        } else {
            None
        }
    }

    /// Returns a bitboard holding only the lowest square of `self`
    #[inline]
    pub fn lowest(self) -> Bitboard {
        Bitboard(lowest_bit(self.0))
    }

    /// Multiplies the bitboard by `multiplier`, wrapping on overflow, and keeps only the bits of
    /// the product that are in `target`
    #[inline]
    pub fn masked_product(self, multiplier: u64, target: u64) -> u64 {
        self.0.wrapping_mul(multiplier) & target
    }

    /// Returns an iterator over every subset of the bitboard, starting with the empty set and
    /// ending with the bitboard itself
    pub fn subsets(self) -> Subsets {
        Subsets { mask: self.0, next: Some(0) }
    }

    /// Returns a value that displays the bitboard as a board diagram
    ///
    /// Rank 8 is printed first and file `a` is on the left. Occupied squares are shown as `1`.
    ///
    /// ```rust
    /// # use chess::Square;
    /// # use chess::bitboard::Bitboard;
    /// #
    /// let diagram = Bitboard::from(Square::A1).diagram().to_string();
    /// assert_eq!(diagram.lines().next(), Some("+--------+ 0000000000000001"));
    /// assert_eq!(diagram.lines().nth(8), Some("|1.......|"));
    /// ```
    pub fn diagram(self) -> Diagram {
        Diagram(self)
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u64> for Bitboard {
    fn from(val: u64) -> Bitboard {
        Bitboard(val)
    }
}

impl From<Bitboard> for u64 {
    fn from(bb: Bitboard) -> u64 {
        bb.0
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u64)
    }
}

impl From<File> for Bitboard {
    fn from(f: File) -> Bitboard {
        Bitboard(0x0101_0101_0101_0101 << f as u64)
    }
}

impl From<Rank> for Bitboard {
    fn from(r: Rank) -> Bitboard {
        Bitboard(0x0000_0000_0000_00ff << (8 * r as u64))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    /// If converting from `bitboard::IntoIter`, use `Bitboard::from()` instead as that is faster
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = Bitboard::new();

        for sq in iter {
            bd.insert(sq);
        }

        bd
    }
}

impl Extend<Square> for Bitboard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `Bitboard`
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Iterator over the subsets of a `Bitboard`, in increasing numeric order
///
/// Each step uses the carry-rippler trick: `next = (current - mask) & mask`.
#[derive(Debug, Copy, Clone)]
pub struct Subsets {
    mask: u64,
    next: Option<u64>,
}

impl Iterator for Subsets {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let next = current.wrapping_sub(self.mask) & self.mask;
        self.next = if next == 0 { None } else { Some(next) };

        Some(Bitboard(current))
    }
}

impl FusedIterator for Subsets { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Displays a `Bitboard` as an 8x8 board, created by [`Bitboard::diagram`](struct.Bitboard.html#method.diagram)
#[derive(Debug, Copy, Clone)]
pub struct Diagram(Bitboard);

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+--------+ {:016x}", self.0)?;
        for rank in (0..Rank::COUNT).rev() {
            let row: String = (0..File::COUNT)
                .map(|file| if (self.0).0 & (1 << (8 * rank + file)) != 0 { '1' } else { '.' })
                .collect();
            writeln!(f, "|{}|", row)?;
        }
        write!(f, "+--------+")
    }
}
