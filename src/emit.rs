//! Writes table sets out as C++, Rust or YAML
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use chrono::Local;
use serde::{Serialize, Deserialize};
use chess::Square;
use crate::error::{Error, Result};
use crate::table::{SliderTables, SquareTable, TableSet};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An output format for generated tables
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// C++ aggregate initializers, one per square
    Cpp,
    /// Rust constant arrays
    Rust,
    /// The whole table set as a YAML document, which can be read back in and checked
    Yaml,
}

impl Default for Format {
    fn default() -> Self {
        Format::Cpp
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Format::Cpp => "cpp",
            Format::Rust => "rust",
            Format::Yaml => "yaml",
        })
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cpp"|"c++"  => Ok(Format::Cpp),
            "rust"|"rs"  => Ok(Format::Rust),
            "yaml"|"yml" => Ok(Format::Yaml),
            _            => Err(Error::Usage(format!("unknown output format '{}'", s))),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Writes table sets in a chosen format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    format: Format,
    name_prefix: String,
    header: bool,
}

impl Emitter {
    /// Creates an emitter for `format`, with the default name prefix and no header
    pub fn new(format: Format) -> Emitter {
        Emitter { format, name_prefix: "ELEMENTARY".to_owned(), header: false }
    }

    /// Sets the prefix of the constant names in Rust output
    pub fn name_prefix(mut self, prefix: &str) -> Emitter {
        self.name_prefix = prefix.to_ascii_uppercase();
        self
    }

    /// Turns the header line with the generation date on or off
    pub fn header(mut self, header: bool) -> Emitter {
        self.header = header;
        self
    }

    /// Writes `set` to `out`
    pub fn emit<W: Write>(&self, set: &TableSet, mut out: W) -> Result<()> {
        if self.header {
            let comment = if self.format == Format::Yaml { "#" } else { "//" };
            writeln!(out, "{} elementary slider tables, generated {}",
                comment, Local::now().format("%Y-%m-%d"))?;
        }

        match self.format {
            Format::Cpp => {
                for tables in &set.tables {
                    emit_cpp(&mut out, tables)?;
                }
                writeln!(out, "// table size: {}", set.total_size())?;
            },
            Format::Rust => {
                for tables in &set.tables {
                    self.emit_rust(&mut out, tables)?;
                }
                writeln!(out, "// table size: {}", set.total_size())?;
            },
            Format::Yaml => serde_yaml::to_writer(&mut out, set)?,
        }

        out.flush()?;
        Ok(())
    }

    fn emit_rust<W: Write>(&self, out: &mut W, tables: &SliderTables) -> Result<()> {
        let name = format!("{}_{}", self.name_prefix, tables.slider().to_string().to_ascii_uppercase());

        writeln!(out, "pub const {}_TABLES: [SquareTable; {}] = [", name, tables.records().len())?;
        for (sq, record) in Square::all().zip(tables.records()) {
            writeln!(out, "    SquareTable {{ // {}", sq)?;
            writeln!(out, "        masks: [{}],", hex_list(record.masks.iter().map(|mask| mask.bits())))?;
            writeln!(out, "        shift: {},", record.shift)?;
            writeln!(out, "        multipliers: [{}],", hex_list(record.multipliers.iter().copied()))?;
            writeln!(out, "        padding: {},", record.padding)?;
            writeln!(out, "    }},")?;
        }
        writeln!(out, "];")?;

        writeln!(out, "pub const {}_OFFSETS: [u32; {}] = [", name, tables.offsets().len())?;
        for row in tables.offsets().chunks(8) {
            let row: Vec<_> = row.iter().map(u32::to_string).collect();
            writeln!(out, "    {},", row.join(", "))?;
        }
        writeln!(out, "];")?;
        Ok(())
    }
}

fn hex_list<I: Iterator<Item = u64>>(words: I) -> String {
    words.map(|word| format!("0x{:016x}", word)).collect::<Vec<_>>().join(", ")
}

fn emit_cpp<W: Write>(out: &mut W, tables: &SliderTables) -> Result<()> {
    writeln!(out, "// {} masks and multipliers", tables.slider())?;
    for (sq, record) in Square::all().zip(tables.records()) {
        emit_cpp_record(out, sq, record)?;
    }

    writeln!(out, "// {} offsets", tables.slider())?;
    for row in tables.offsets().chunks(8) {
        let row: Vec<_> = row.iter().map(|offset| format!("{}U", offset)).collect();
        writeln!(out, "{},", row.join(", "))?;
    }
    writeln!(out, "// {} table size: {}", tables.slider(), tables.size())?;
    Ok(())
}

fn emit_cpp_record<W: Write>(out: &mut W, sq: Square, record: &SquareTable) -> Result<()> {
    let product = record.product(record.full_mask());
    let target = u64::MAX.checked_shl(record.shift).unwrap_or(0);

    writeln!(out, "MasksAndMultipliers {{ // {}", sq)?;
    writeln!(out, "    {{")?;
    for mask in record.masks.iter() {
        writeln!(out, "        UINT64_C(0x{:016x}),", mask)?;
    }
    writeln!(out, "    }},")?;
    writeln!(out, "    {}U, // target shift", record.shift)?;
    writeln!(out, "    {{")?;
    for multiplier in record.multipliers.iter() {
        writeln!(out, "        UINT64_C(0x{:016x}),", multiplier)?;
    }
    writeln!(out, "    }},")?;
    writeln!(out, "    {}U  // zero padding", record.padding)?;
    writeln!(out, "    // masked product: {:016x} masks={} / raw product: {:016x}",
        product & target, record.used_layers(), product)?;
    writeln!(out, "}},")?;
    Ok(())
}
