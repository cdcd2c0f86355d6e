//! Brute-force checks of multipliers and table records
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use chess::bitboard::{Bitboard, lowest_bit};
use crate::error::{Error, Result};
use crate::search::TargetSpace;
use crate::table::SquareTable;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Checks that `multiplier` sends every square of `full_mask` that is in `consumed` to its own
/// target bit
///
/// The target bit of a square is the bit of `target` at the same position, counting from the
/// bottom, as the square has among the squares of `full_mask`. Squares outside `consumed` are
/// skipped but still take up their target bit.
pub fn verify(full_mask: Bitboard, target: u64, consumed: Bitboard, multiplier: u64) -> Result<()> {
    let mut target_bit = lowest_bit(target);

    for square in full_mask {
        if consumed.contains(square) {
            let actual = Bitboard::from(square).masked_product(multiplier, target);
            if actual != target_bit {
                return Err(Error::VerificationFailure {
                    square,
                    multiplier,
                    expected: target_bit,
                    actual,
                });
            }
        }
        target_bit <<= 1;
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Checks that `record` is a valid lookup record for `full_mask`
///
/// The layers must be disjoint, cover `full_mask` exactly, pass [`verify`](fn.verify.html) and
/// claim disjoint target bits. Unused layers must have a zero multiplier, the shift must match the
/// size of the mask and the padding must be zero. Finally every subset of `full_mask` is looked up
/// to make sure no two of them share an index.
pub fn verify_record(full_mask: Bitboard, record: &SquareTable) -> Result<()> {
    let space = TargetSpace::for_mask(full_mask);
    let target = space.mask();

    if record.shift != space.shift() {
        return Err(Error::InvalidRecord("shift does not match the mask size"));
    }
    if record.padding != 0 {
        return Err(Error::InvalidRecord("padding is not zero"));
    }

    let mut covered = Bitboard::new();
    let mut claimed = 0;
    for layer in record.layers() {
        if layer.mask.is_empty() {
            if layer.multiplier != 0 {
                return Err(Error::InvalidRecord("unused layer has a multiplier"));
            }
            continue;
        }
        if layer.mask.intersects(covered) {
            return Err(Error::InvalidRecord("layers overlap"));
        }
        verify(full_mask, target, layer.mask, layer.multiplier)?;
        if layer.claimed(target) & claimed != 0 {
            return Err(Error::InvalidRecord("layers claim the same target bit"));
        }
        covered |= layer.mask;
        claimed |= layer.claimed(target);
    }
    if covered != full_mask {
        return Err(Error::InvalidRecord("layers do not cover the mask"));
    }

    let mut seen = vec![false; 1 << full_mask.len()];
    for occ in full_mask.subsets() {
        let index = record.index(occ);
        if std::mem::replace(&mut seen[index], true) {
            return Err(Error::IndexCollision { index });
        }
    }

    Ok(())
}
