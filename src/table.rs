//! Per-square lookup records and the tables built from them
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::{debug, info};
use serde::{Serialize, Deserialize};
use chess::{Slider, Square};
use chess::bitboard::{Bitboard, relevant_mask};
use crate::decompose::{decompose, LAYERS};
use crate::error::{Error, Result};
use crate::search::{Layer, TargetSpace};
use crate::verify::verify_record;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The lookup record of one square for one slider
///
/// The layout matches the records the move generator reads: four sub-masks, the shift, the four
/// multipliers and a padding word. Unused layers have a zero mask and a zero multiplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SquareTable {
    /// The sub-masks of the layers
    pub masks: [Bitboard; LAYERS],
    /// `64 - n` where `n` is the number of squares in the full mask
    pub shift: u32,
    /// The multipliers of the layers
    pub multipliers: [u64; LAYERS],
    /// Always zero
    pub padding: u64,
}

impl SquareTable {
    /// Creates a record from decomposed layers
    pub fn new(layers: [Layer; LAYERS], space: TargetSpace) -> SquareTable {
        let mut record = SquareTable { shift: space.shift(), ..SquareTable::default() };
        for (i, layer) in layers.iter().enumerate() {
            record.masks[i] = layer.mask;
            record.multipliers[i] = layer.multiplier;
        }
        record
    }

    /// Returns the layers of the record, including unused ones
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.masks.iter().zip(self.multipliers.iter())
            .map(|(&mask, &multiplier)| Layer { mask, multiplier })
    }

    /// The number of layers in use
    pub fn used_layers(&self) -> usize {
        self.masks.iter().filter(|mask| !mask.is_empty()).count()
    }

    /// The union of the layer masks
    pub fn full_mask(&self) -> Bitboard {
        self.masks.iter().fold(Bitboard::new(), |acc, &mask| acc | mask)
    }

    /// Returns the XOR of the layers' products for `occ`, before shifting
    pub fn product(&self, occ: Bitboard) -> u64 {
        self.layers().fold(0, |acc, layer| acc ^ (occ & layer.mask).bits().wrapping_mul(layer.multiplier))
    }

    /// Returns the lookup index of `occ`
    pub fn index(&self, occ: Bitboard) -> usize {
        self.product(occ).checked_shr(self.shift).unwrap_or(0) as usize
    }

    /// The number of entries needed for this square in an attack table
    pub fn size(&self) -> usize {
        1 << (64 - self.shift)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Generates and verifies the record of `square` for `slider`
///
/// Errors are returned wrapped in an [`Error::Entry`](../error/enum.Error.html#variant.Entry)
/// naming the square and slider.
pub fn generate_record(square: Square, slider: Slider) -> Result<SquareTable> {
    let mask = relevant_mask(square, slider);
    let space = TargetSpace::for_mask(mask);

    let layers = decompose(mask, space).map_err(|err| err.at(slider, square))?;
    let record = SquareTable::new(layers, space);
    verify_record(mask, &record).map_err(|err| err.at(slider, square))?;

    debug!("{} on {}: {} squares in {} layers", slider, square, mask.len(), record.used_layers());
    Ok(record)
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The records of all 64 squares for one slider
///
/// Each square also has an offset into an attack table shared by all squares. The offsets are
/// the running totals of the square sizes, in square order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderTables {
    slider: Slider,
    records: Vec<SquareTable>,
    offsets: Vec<u32>,
    size: usize,
}

impl SliderTables {
    /// Generates the tables for `slider`
    pub fn generate(slider: Slider) -> Result<SliderTables> {
        let records = Square::all()
            .map(|sq| generate_record(sq, slider))
            .collect::<Result<Vec<_>>>()?;
        let (offsets, size) = offsets_of(&records);

        info!("{} tables: {} entries", slider, size);
        Ok(SliderTables { slider, records, offsets, size })
    }

    /// The slider the tables are for
    pub fn slider(&self) -> Slider {
        self.slider
    }

    /// The record of `square`
    pub fn record(&self, square: Square) -> &SquareTable {
        &self.records[usize::from(square)]
    }

    /// The records, in square order
    pub fn records(&self) -> &[SquareTable] {
        &self.records
    }

    /// The first attack table entry of `square`
    pub fn offset(&self, square: Square) -> usize {
        self.offsets[usize::from(square)] as usize
    }

    /// The attack table offsets, in square order
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// The number of attack table entries needed by all squares
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks every record exhaustively, along with the offsets and the size
    ///
    /// This is meant for tables that were read back in rather than generated.
    pub fn check(&self) -> Result<()> {
        if self.records.len() != Square::COUNT {
            return Err(Error::Usage(format!(
                "{} tables have {} records instead of {}", self.slider, self.records.len(), Square::COUNT
            )));
        }

        // records first: the offsets can only be computed from valid shifts
        for (sq, record) in Square::all().zip(&self.records) {
            verify_record(relevant_mask(sq, self.slider), record)
                .map_err(|err| err.at(self.slider, sq))?;
        }

        let (offsets, size) = offsets_of(&self.records);
        for (sq, &offset) in Square::all().zip(&offsets) {
            if self.offsets.get(usize::from(sq)) != Some(&offset) {
                return Err(Error::InvalidRecord("offset does not match").at(self.slider, sq));
            }
        }
        if self.offsets.len() != offsets.len() || self.size != size {
            return Err(Error::Usage(format!("{} table size should be {}", self.slider, size)));
        }

        info!("{} tables checked: {} entries", self.slider, size);
        Ok(())
    }
}

fn offsets_of(records: &[SquareTable]) -> (Vec<u32>, usize) {
    let mut offsets = Vec::with_capacity(records.len());
    let mut size = 0;
    for record in records {
        offsets.push(size as u32);
        size += record.size();
    }
    (offsets, size)
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The tables of one or more sliders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSet {
    /// The tables, one per slider
    pub tables: Vec<SliderTables>,
}

impl TableSet {
    /// Generates the tables of each slider in `sliders`
    ///
    /// Generation stops at the first square that fails.
    pub fn generate(sliders: &[Slider]) -> Result<TableSet> {
        let tables = sliders.iter()
            .map(|&slider| SliderTables::generate(slider))
            .collect::<Result<Vec<_>>>()?;
        let set = TableSet { tables };

        info!("total table size: {}", set.total_size());
        Ok(set)
    }

    /// Returns the tables of `slider`, if the set has them
    pub fn get(&self, slider: Slider) -> Option<&SliderTables> {
        self.tables.iter().find(|tables| tables.slider() == slider)
    }

    /// The number of attack table entries needed by all tables together
    pub fn total_size(&self) -> usize {
        self.tables.iter().map(SliderTables::size).sum()
    }

    /// Checks every table in the set
    pub fn check(&self) -> Result<()> {
        self.tables.iter().try_for_each(SliderTables::check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_rook_record() {
        let record = generate_record(Square::D4, Slider::Rook).unwrap();
        assert_eq!(record.shift, 54);
        assert_eq!(record.used_layers(), 2);
        assert_eq!(record.full_mask(), relevant_mask(Square::D4, Slider::Rook));
        assert_eq!(record.padding, 0);
        assert_eq!(record.masks[2], Bitboard::new());
        assert_eq!(record.multipliers[2..], [0, 0]);

        let target = TargetSpace::for_mask(record.full_mask()).mask();
        assert_eq!(record.product(record.full_mask()) & target, target);
        assert_eq!(record.index(record.full_mask()), 1023);
        assert_eq!(record.index(Bitboard::new()), 0);
        assert_eq!(record.size(), 1024);
    }

    #[test]
    fn index_ignores_squares_outside_the_mask() {
        let record = generate_record(Square::E5, Slider::Bishop).unwrap();
        let inside = Bitboard::from(Square::D4) | Bitboard::from(Square::F6);
        let outside = Bitboard::from(Square::A1) | Bitboard::from(Square::H8) | Bitboard::from(Square::E6);
        assert_eq!(record.index(inside), record.index(inside | outside));
    }

    #[test]
    fn bishop_offsets_are_running_totals() {
        let tables = SliderTables::generate(Slider::Bishop).unwrap();
        assert_eq!(tables.slider(), Slider::Bishop);
        assert_eq!(tables.records().len(), 64);
        assert_eq!(tables.offset(Square::A1), 0);
        assert_eq!(tables.offset(Square::B1), 64);
        assert_eq!(tables.offset(Square::C1), 96);
        assert_eq!(tables.size(), 5248);
        tables.check().unwrap();
    }

    #[test]
    fn tampered_tables_fail_the_check() {
        let mut tables = SliderTables::generate(Slider::Bishop).unwrap();
        tables.offsets[5] += 1;
        match tables.check() {
            Err(Error::Entry { square, slider, .. }) => {
                assert_eq!(square, Square::F1);
                assert_eq!(slider, Slider::Bishop);
            },
            other => panic!("unexpected result: {:?}", other),
        }

        for &shift in [0, 70].iter() {
            let mut tables = SliderTables::generate(Slider::Bishop).unwrap();
            tables.records[0].shift = shift;
            match tables.check() {
                Err(Error::Entry { square, error, .. }) => {
                    assert_eq!(square, Square::A1);
                    assert!(matches!(*error, Error::InvalidRecord(_)));
                },
                other => panic!("unexpected result: {:?}", other),
            }
        }

        let mut tables = SliderTables::generate(Slider::Bishop).unwrap();
        tables.records.pop();
        assert!(tables.check().is_err());

        let mut tables = SliderTables::generate(Slider::Bishop).unwrap();
        tables.size += 1;
        assert!(tables.check().is_err());
    }

    #[test]
    fn set_holds_the_requested_sliders() {
        let set = TableSet::generate(&[Slider::Rook]).unwrap();
        assert!(set.get(Slider::Bishop).is_none());
        assert_eq!(set.get(Slider::Rook).map(SliderTables::size), Some(102_400));
        assert_eq!(set.total_size(), 102_400);
    }
}
