//! Attack tables filled through the generated lookup records
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::debug;
use chess::{Slider, Square};
use chess::bitboard::{Bitboard, relevant_mask, slider_attacks};
use crate::error::{Error, Result};
use crate::table::SliderTables;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The attacks of one slider from every square, for every occupancy
///
/// ```rust
/// use chess::{Slider, Square};
/// use chess::bitboard::Bitboard;
/// use elementary_tables::attacks::AttackTable;
/// use elementary_tables::table::SliderTables;
///
/// let tables = SliderTables::generate(Slider::Rook).unwrap();
/// let rooks = AttackTable::new(&tables).unwrap();
///
/// let occ = Bitboard::from(Square::D6) | Bitboard::from(Square::B4);
/// let attacks = rooks.attacks(Square::D4, occ);
/// assert!(attacks.contains(Square::D6));
/// assert!(!attacks.contains(Square::D7));
/// assert!(attacks.contains(Square::H4));
/// ```
#[derive(Debug, Clone)]
pub struct AttackTable {
    slider: Slider,
    tables: SliderTables,
    data: Vec<Bitboard>,
}

impl AttackTable {
    /// Builds the attack table for `tables`
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexCollision`](../error/enum.Error.html#variant.IndexCollision),
    /// wrapped with the square, if two occupancies with different attacks share an entry.
    pub fn new(tables: &SliderTables) -> Result<AttackTable> {
        let slider = tables.slider();
        let mut data = vec![Bitboard::new(); tables.size()];
        let mut filled = vec![false; tables.size()];

        for sq in Square::all() {
            let record = tables.record(sq);
            let offset = tables.offset(sq);

            for occ in relevant_mask(sq, slider).subsets() {
                let attacks = slider_attacks(sq, slider, occ);
                let index = offset + record.index(occ);

                if index >= data.len() || (filled[index] && data[index] != attacks) {
                    return Err(Error::IndexCollision { index }.at(slider, sq));
                }
                data[index] = attacks;
                filled[index] = true;
            }
        }

        debug!("{} attack table: {} entries", slider, data.len());
        Ok(AttackTable { slider, tables: tables.clone(), data })
    }

    /// The slider this table is for
    pub fn slider(&self) -> Slider {
        self.slider
    }

    /// Returns the attacks from `square` with the squares of `occ` occupied
    pub fn attacks(&self, square: Square, occ: Bitboard) -> Bitboard {
        let index = self.tables.offset(square) + self.tables.record(square).index(occ);
        self.data[index]
    }

    /// The number of entries in the table
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
