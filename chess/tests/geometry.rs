//! Tests the relevant-occupancy masks (chess crate)
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod masks {
    use chess::{Slider, Square};
    use chess::bitboard::{Bitboard, relevant_mask, slider_attacks};

    #[test]
    fn masks_are_the_squares_that_matter() {
        // a square is relevant when blocking it changes the attacks on the empty board
        for sq in Square::all() {
            for &slider in Slider::ALL.iter() {
                let empty = slider_attacks(sq, slider, Bitboard::new());
                let relevant = empty.into_iter()
                    .filter(|&other| slider_attacks(sq, slider, Bitboard::from(other)) != empty)
                    .collect::<Bitboard>();
                assert_eq!(relevant_mask(sq, slider), relevant, "{} on {}", slider, sq);
            }
        }
    }

    #[test]
    fn mask_sizes_add_up() {
        let size = |slider: Slider| Square::all().map(|sq| 1usize << relevant_mask(sq, slider).len()).sum::<usize>();
        assert_eq!(size(Slider::Bishop), 5248);
        assert_eq!(size(Slider::Rook), 102_400);
    }
}
