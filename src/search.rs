//! Greedy search for a single (sub-mask, multiplier) layer
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! A lookup index is built in the high bits of a 64-bit word, the
//! [`TargetSpace`](struct.TargetSpace.html). The `n`th lowest square of a mask belongs at the `n`th
//! lowest bit of that space. Since a square and its target bit are both powers of two, a single
//! square can always be sent to its target bit by multiplying with their quotient. Several squares
//! can share a multiplier only if the cross terms of the product stay out of each other's target
//! bits, and finding such sets is what
//! [`find_multiplier_for_mask`](fn.find_multiplier_for_mask.html) does.
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::trace;
use serde::{Serialize, Deserialize};
use chess::bitboard::{Bitboard, lowest_bit};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The high bits of a 64-bit word that the lookup index of a mask is built in
///
/// For a mask of `n` squares, this is the top `n` bits, and shifting right by `64 - n` turns them
/// into an index in `0..2^n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetSpace {
    shift: u32,
    mask: u64,
}

impl TargetSpace {
    /// Returns the target space for `mask`
    pub fn for_mask(mask: Bitboard) -> TargetSpace {
        let shift = 64 - mask.len() as u32;
        TargetSpace { shift, mask: u64::MAX.checked_shl(shift).unwrap_or(0) }
    }

    /// The right shift that moves the target space down to the low bits
    pub fn shift(self) -> u32 {
        self.shift
    }

    /// The bits of the target space
    pub fn mask(self) -> u64 {
        self.mask
    }

    /// The number of bits in the target space
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns `true` if the target space has no bits
    pub fn is_empty(self) -> bool {
        self.mask == 0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A sub-mask and the multiplier that sends its squares to their target bits
///
/// An unused layer has an empty mask and a zero multiplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// The squares this layer is responsible for
    pub mask: Bitboard,
    /// The multiplier for those squares
    pub multiplier: u64,
}

impl Layer {
    /// Returns `true` if the layer is an unused slot
    pub fn is_unused(self) -> bool {
        self.mask.is_empty() && self.multiplier == 0
    }

    /// Returns the target bits the layer's squares are sent to
    pub fn claimed(self, target: u64) -> u64 {
        self.mask.masked_product(self.multiplier, target)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Finds a multiplier for as many squares of `mask` as possible
///
/// The squares of `mask` are paired, lowest first, with the bits of `available`, which must be the
/// bits of `target` not yet claimed by other layers. Each pair extends the multiplier by the
/// distance between the square and its target bit. The extension is kept only if multiplying all
/// squares accepted so far, plus the new one, still produces exactly their target bits within
/// `target`. Otherwise the square is left for another layer, and its target bit with it.
///
/// The first square is accepted whenever its target bit lies above it, which always holds for a
/// full relevant mask and its whole target space.
///
/// ```rust
/// use chess::bitboard::Bitboard;
/// use elementary_tables::search::{find_multiplier_for_mask, TargetSpace};
///
/// // b2, c3, d4, e5, f6 and g7: the bishop mask of a1
/// let mask = Bitboard::from(0x0040_2010_0804_0200);
/// let target = TargetSpace::for_mask(mask).mask();
/// let layer = find_multiplier_for_mask(mask, target, target);
/// assert_eq!(layer.mask, mask);
/// assert_eq!(layer.claimed(target), 0xfc00_0000_0000_0000);
/// ```
pub fn find_multiplier_for_mask(mask: Bitboard, target: u64, available: u64) -> Layer {
    let mut remaining = mask.bits();
    let mut available = available;
    let mut layer = Layer::default();
    let mut claimed = 0;

    while remaining != 0 {
        let mask_bit = lowest_bit(remaining);
        let target_bit = lowest_bit(available);
        remaining ^= mask_bit;
        available ^= target_bit;

        // multiplication only moves bits up
        if target_bit < mask_bit {
            trace!("{:016x} has no target bit above it", mask_bit);
            continue;
        }

        let multiplier = layer.multiplier | (target_bit / mask_bit);
        let consumed = layer.mask | Bitboard::from(mask_bit);

        if consumed.masked_product(multiplier, target) == claimed | target_bit {
            trace!("{:016x} -> {:016x} with {:016x}", mask_bit, target_bit, multiplier);
            layer = Layer { mask: consumed, multiplier };
            claimed |= target_bit;
        } else {
            trace!("{:016x} -> {:016x} deferred", mask_bit, target_bit);
        }
    }

    layer
}
