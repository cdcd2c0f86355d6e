//! Parses selections of a single table record, such as `rook:d4` or `b@e5`
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use chess::{Slider, Square};
use crate::error::{Error, Result};

lazy_static! {
    static ref SELECTOR: Regex = Regex::new(
        r"^\s*(?P<slider>[[:alpha:]]+)\s*(?:[:@/]|\s)\s*(?P<square>[a-hA-H][1-8])\s*$"
    ).expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A slider and a square
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// The slider
    pub slider: Slider,
    /// The square
    pub square: Square,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slider, self.square)
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = SELECTOR.captures(s)
            .ok_or_else(|| Error::Usage(format!("'{}' does not name a slider and a square", s)))?;

        Ok(Selector {
            slider: caps["slider"].parse()?,
            square: caps["square"].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        let d4 = Selector { slider: Slider::Rook, square: Square::D4 };
        assert_eq!("rook:d4".parse::<Selector>().unwrap(), d4);
        assert_eq!("r@d4".parse::<Selector>().unwrap(), d4);
        assert_eq!(" Rook / D4 ".parse::<Selector>().unwrap(), d4);
        assert_eq!("R d4".parse::<Selector>().unwrap(), d4);
        assert_eq!("b@e5".parse::<Selector>().unwrap(), Selector { slider: Slider::Bishop, square: Square::E5 });
    }

    #[test]
    fn display_parses_back() {
        let sel = Selector { slider: Slider::Bishop, square: Square::H1 };
        assert_eq!(sel.to_string(), "bishop:h1");
        assert_eq!(sel.to_string().parse::<Selector>().unwrap(), sel);
    }

    #[test]
    fn bad_selectors() {
        assert!(matches!("rook".parse::<Selector>(), Err(Error::Usage(_))));
        assert!(matches!("rook:i4".parse::<Selector>(), Err(Error::Usage(_))));
        assert!(matches!("queen:d4".parse::<Selector>(), Err(Error::Chess(_))));
    }
}
