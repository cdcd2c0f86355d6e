//! Covers a full relevant-occupancy mask with up to four layers
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::debug;
use chess::bitboard::Bitboard;
use crate::error::{Error, Result};
use crate::search::{find_multiplier_for_mask, Layer, TargetSpace};
use crate::verify::verify;

/// The number of layers in a table record
pub const LAYERS: usize = 4;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Splits `mask` into disjoint layers, each with its own multiplier
///
/// Layers are searched for one after another, each over the squares and target bits that the
/// earlier layers left over, and each is verified before it is accepted. Slots that aren't needed
/// are left as unused layers.
///
/// # Errors
///
/// Returns [`Error::SearchExhaustion`](../error/enum.Error.html#variant.SearchExhaustion) if the
/// mask isn't covered after [`LAYERS`](constant.LAYERS.html) layers, and
/// [`Error::VerificationFailure`](../error/enum.Error.html#variant.VerificationFailure) if a layer
/// fails verification.
pub fn decompose(mask: Bitboard, space: TargetSpace) -> Result<[Layer; LAYERS]> {
    let target = space.mask();
    let mut layers = [Layer::default(); LAYERS];
    let mut consumed = Bitboard::new();
    let mut available = target;
    let mut count = 0;

    while consumed != mask {
        if count == LAYERS {
            return Err(Error::SearchExhaustion { mask, layers: count });
        }

        let layer = find_multiplier_for_mask(mask ^ consumed, target, available);
        if layer.mask.is_empty() {
            return Err(Error::SearchExhaustion { mask, layers: count });
        }
        verify(mask, target, layer.mask, layer.multiplier)?;

        debug!("layer {}: {:016x} * {:016x} -> {:016x}",
            count, layer.mask, layer.multiplier, layer.claimed(target));

        available ^= layer.claimed(target);
        consumed |= layer.mask;
        layers[count] = layer;
        count += 1;
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use chess::{Slider, Square};
    use chess::bitboard::relevant_mask;
    use super::*;

    fn layers_of(mask: Bitboard) -> Result<[Layer; LAYERS]> {
        decompose(mask, TargetSpace::for_mask(mask))
    }

    #[test]
    fn corner_bishop_is_a_single_layer() {
        let layers = layers_of(relevant_mask(Square::A1, Slider::Bishop)).unwrap();
        assert_eq!(layers[0].multiplier, 0x0002_0202_0202_0200);
        assert!(layers[1..].iter().all(|layer| layer.is_unused()));
    }

    #[test]
    fn central_rook_is_two_layers() {
        let layers = layers_of(relevant_mask(Square::D4, Slider::Rook)).unwrap();
        assert_eq!(layers[0], Layer { mask: 0x0008_0008_0600_0800.into(), multiplier: 0x0000_0800_8400_1000 });
        assert_eq!(layers[1], Layer { mask: 0x0000_0800_7008_0000.into(), multiplier: 0x0000_0010_4008_0000 });
        assert!(layers[2].is_unused());
        assert!(layers[3].is_unused());
    }

    #[test]
    fn central_bishop_is_three_layers() {
        let layers = layers_of(relevant_mask(Square::D4, Slider::Bishop)).unwrap();
        assert_eq!(layers[0], Layer { mask: 0x0040_0204_0004_0200.into(), multiplier: 0x0000_4080_0210_0200 });
        assert_eq!(layers[1], Layer { mask: 0x0000_2010_0000_2000.into(), multiplier: 0x0000_0800_0102_0000 });
        assert_eq!(layers[2], Layer { mask: 0x0000_0000_0010_0000.into(), multiplier: 0x0000_0040_0000_0000 });
        assert!(layers[3].is_unused());
    }

    #[test]
    fn all_four_layers_can_be_used() {
        let layers = layers_of(Bitboard::from(0x0200_9200_0a00_9480)).unwrap();
        assert!(layers.iter().all(|layer| !layer.is_unused()));
        assert_eq!(layers[3], Layer { mask: 0x0000_0000_0000_8000.into(), multiplier: 0x0000_0400_0000_0000 });
    }

    #[test]
    fn layers_partition_the_mask_and_the_target() {
        for sq in Square::all() {
            for &slider in Slider::ALL.iter() {
                let mask = relevant_mask(sq, slider);
                let target = TargetSpace::for_mask(mask).mask();
                let layers = layers_of(mask).unwrap();

                let mut covered = Bitboard::new();
                let mut claimed = 0;
                for layer in layers.iter().filter(|layer| !layer.is_unused()) {
                    assert!(layer.mask.is_disjoint(covered), "{} {}", slider, sq);
                    assert_eq!(layer.claimed(target) & claimed, 0, "{} {}", slider, sq);
                    covered |= layer.mask;
                    claimed |= layer.claimed(target);
                }
                assert_eq!(covered, mask, "{} {}", slider, sq);
                assert_eq!(claimed, target, "{} {}", slider, sq);
            }
        }
    }

    #[test]
    fn a_fifth_layer_is_an_error() {
        match layers_of(Bitboard::from(0x8121_1800_0061_20d5)) {
            Err(Error::SearchExhaustion { layers, .. }) => assert_eq!(layers, LAYERS),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(layers_of(Bitboard::from(0xaaaa_aaaa_aaaa_aaaa)).is_err());
    }

    #[test]
    fn empty_mask_needs_no_layers() {
        let layers = layers_of(Bitboard::new()).unwrap();
        assert!(layers.iter().all(|layer| layer.is_unused()));
    }
}
