//! Settings read from a YAML file and overridden on the command line
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use chess::Slider;
use crate::emit::{Emitter, Format};
use crate::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Settings for a generation run
///
/// Every field may be left out of a settings file, in which case its default is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The sliders to generate tables for, bishop and rook by default
    pub sliders: Vec<Slider>,
    /// The output format
    pub format: Format,
    /// The output file, or `None` for standard output
    pub output: Option<PathBuf>,
    /// The prefix of constant names in Rust output
    pub name_prefix: String,
    /// Whether to write a header line with the generation date
    pub header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sliders: Slider::ALL.to_vec(),
            format: Format::default(),
            output: None,
            name_prefix: "ELEMENTARY".to_owned(),
            header: true,
        }
    }
}

impl Settings {
    /// Reads settings from the YAML file at `path`
    pub fn load(path: &Path) -> Result<Settings> {
        let s = read_to_string(path)?;
        Settings::parse(&s)
    }

    /// Reads settings from a YAML document
    pub fn parse(s: &str) -> Result<Settings> {
        let mut settings: Settings = serde_yaml::from_str(s)?;
        settings.sliders = settings.sliders()?;
        Ok(settings)
    }

    /// Returns the sliders in table order, without repeats
    ///
    /// # Errors
    ///
    /// Fails if no slider is selected.
    pub fn sliders(&self) -> Result<Vec<Slider>> {
        let mut sliders = self.sliders.clone();
        sliders.sort();
        sliders.dedup();
        if sliders.is_empty() {
            return Err(Error::Usage("no sliders selected".to_owned()));
        }
        Ok(sliders)
    }

    /// Returns an emitter for these settings
    pub fn emitter(&self) -> Emitter {
        Emitter::new(self.format)
            .name_prefix(&self.name_prefix)
            .header(self.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Settings::parse("{}").unwrap(), Settings::default());
    }

    #[test]
    fn fields_are_read() {
        let settings = Settings::parse(
            "sliders: [rook, bishop, rook]\nformat: rust\noutput: tables.rs\nname_prefix: magic\nheader: false\n"
        ).unwrap();
        assert_eq!(settings.sliders, [Slider::Bishop, Slider::Rook]);
        assert_eq!(settings.format, Format::Rust);
        assert_eq!(settings.output, Some(PathBuf::from("tables.rs")));
        assert!(!settings.header);

        let emitter = settings.emitter();
        assert_eq!(emitter, Emitter::new(Format::Rust).name_prefix("MAGIC"));
    }

    #[test]
    fn bad_documents_are_rejected() {
        assert!(matches!(Settings::parse("sliders: []"), Err(Error::Usage(_))));
        assert!(matches!(Settings::parse("format: json"), Err(Error::Yaml(_))));
        assert!(matches!(Settings::parse("colour: blue"), Err(Error::Yaml(_))));
    }
}
