//! Relevant-occupancy masks and reference attacks for sliding pieces
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Returns the squares whose occupancy can change the attacks of a `slider` on `sq`
///
/// This is every square on the slider's rays except the origin and the last square of each ray.
/// The last square is always on the edge of the board, and whether or not it is occupied, the
/// slide stops there. So for a bishop, the mask lies within the inner 6x6 squares of the board,
/// and for a rook it leaves out files `a` and `h` along its rank and ranks 1 and 8 along its file.
///
/// ```rust
/// use chess::{Slider, Square};
/// use chess::bitboard::relevant_mask;
///
/// assert_eq!(relevant_mask(Square::A1, Slider::Rook).bits(), 0x0001_0101_0101_017e);
/// assert_eq!(relevant_mask(Square::A1, Slider::Bishop).bits(), 0x0040_2010_0804_0200);
/// ```
pub fn relevant_mask(sq: Square, slider: Slider) -> Bitboard {
    let mut mask = Bitboard::new();

    for &(file, rank) in slider.directions().iter() {
        let mut current = sq;
        while let Some(next) = current.offset(file, rank) {
            if next.offset(file, rank).is_none() {
                break;
            }
            mask.insert(next);
            current = next;
        }
    }

    mask
}

/// Computes the attacks of a `slider` on `sq`, given the occupied squares `occ`, by walking each
/// ray until it reaches the first occupied square or the edge of the board
///
/// This is the slow reference that lookup tables are checked against. The first occupied square
/// on each ray is included, as it can be captured.
///
/// ```rust
/// use chess::{Slider, Square};
/// use chess::bitboard::{Bitboard, slider_attacks};
///
/// let occ = Bitboard::from(Square::A2) | Square::C1.into();
/// let mut attacks = slider_attacks(Square::A1, Slider::Rook, occ);
/// assert_eq!(attacks.pop(), Some(Square::B1));
/// assert_eq!(attacks.pop(), Some(Square::C1));
/// assert_eq!(attacks.pop(), Some(Square::A2));
/// assert_eq!(attacks.pop(), None);
/// ```
pub fn slider_attacks(sq: Square, slider: Slider, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::new();

    for &(file, rank) in slider.directions().iter() {
        let mut current = sq;
        while let Some(next) = current.offset(file, rank) {
            attacks.insert(next);
            if occ.contains(next) {
                break;
            }
            current = next;
        }
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> Bitboard {
        Bitboard::from(File::A) | File::H.into() | Rank::R1.into() | Rank::R8.into()
    }

    #[test]
    fn masks_never_contain_the_origin() {
        for sq in Square::all() {
            for &slider in Slider::ALL.iter() {
                assert!(!relevant_mask(sq, slider).contains(sq), "{} {}", slider, sq);
            }
        }
    }

    #[test]
    fn bishop_masks_stay_inside_the_inner_squares() {
        for sq in Square::all() {
            assert!(relevant_mask(sq, Slider::Bishop).is_disjoint(edges()), "{}", sq);
        }
    }

    #[test]
    fn rook_masks_leave_out_the_end_of_each_ray() {
        for sq in Square::all() {
            let mask = relevant_mask(sq, Slider::Rook);
            let along_rank = mask & sq.rank().into();
            let along_file = mask & sq.file().into();

            assert_eq!(along_rank | along_file, mask);
            assert!(along_rank.is_disjoint(Bitboard::from(File::A) | File::H.into()), "{}", sq);
            assert!(along_file.is_disjoint(Bitboard::from(Rank::R1) | Rank::R8.into()), "{}", sq);
        }
    }

    #[test]
    fn mask_sizes() {
        let bishop: Vec<_> = Square::all().map(|sq| relevant_mask(sq, Slider::Bishop).len()).collect();
        assert_eq!(bishop, vec![
            6, 5, 5, 5, 5, 5, 5, 6,
            5, 5, 5, 5, 5, 5, 5, 5,
            5, 5, 7, 7, 7, 7, 5, 5,
            5, 5, 7, 9, 9, 7, 5, 5,
            5, 5, 7, 9, 9, 7, 5, 5,
            5, 5, 7, 7, 7, 7, 5, 5,
            5, 5, 5, 5, 5, 5, 5, 5,
            6, 5, 5, 5, 5, 5, 5, 6,
        ]);

        for sq in Square::all() {
            let corner = [Square::A1, Square::H1, Square::A8, Square::H8].contains(&sq);
            let edge = Bitboard::from(sq).intersects(edges());
            let expected = if corner { 12 } else if edge { 11 } else { 10 };
            assert_eq!(relevant_mask(sq, Slider::Rook).len(), expected, "{}", sq);
        }
    }

    #[test]
    fn known_masks() {
        assert_eq!(relevant_mask(Square::D4, Slider::Rook).bits(), 0x0008_0808_7608_0800);
        assert_eq!(relevant_mask(Square::H8, Slider::Rook).bits(), 0x7e80_8080_8080_8000);
        assert_eq!(relevant_mask(Square::D4, Slider::Bishop).bits(), 0x0040_2214_0014_2200);
        assert_eq!(relevant_mask(Square::H1, Slider::Bishop).bits(), 0x0002_0408_1020_4000);
    }

    #[test]
    fn empty_board_attacks_reach_the_edges() {
        assert_eq!(slider_attacks(Square::D4, Slider::Rook, Bitboard::new()).len(), 14);
        assert_eq!(slider_attacks(Square::D4, Slider::Bishop, Bitboard::new()).len(), 13);
        assert_eq!(slider_attacks(Square::A1, Slider::Bishop, Bitboard::new()).len(), 7);
    }

    #[test]
    fn attacks_stop_at_the_first_blocker() {
        let occ = Bitboard::from(Square::F6) | Square::G7.into() | Square::B2.into();
        let attacks = slider_attacks(Square::D4, Slider::Bishop, occ);
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::F6));
        assert!(!attacks.contains(Square::G7));
        assert!(attacks.contains(Square::B2));
        assert!(!attacks.contains(Square::A1));
    }

    #[test]
    fn edge_occupancy_does_not_change_attacks() {
        for sq in Square::all() {
            for &slider in Slider::ALL.iter() {
                let mask = relevant_mask(sq, slider);
                let outside = !mask & !Bitboard::from(sq);
                assert_eq!(
                    slider_attacks(sq, slider, mask),
                    slider_attacks(sq, slider, mask | outside),
                    "{} {}", slider, sq
                );
            }
        }
    }
}
