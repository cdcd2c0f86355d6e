//! Generates the lookup tables for elementary-bitboard slider attacks.
//!
//! A slider's attacks from a square depend only on the occupancy of its relevant squares, the
//! squares along its rays short of the board edge. Looking the attacks up needs a dense index for
//! each of the `2^n` occupancies of those `n` squares. This crate builds, for every square, up to
//! four (sub-mask, multiplier) layers whose products combine into exactly that index:
//!
//! ```text
//! index = XOR over layers of ((occ & mask[i]) * multiplier[i]) >> shift
//! ```
//!
//! The layers are found by a greedy search ([`search`]), combined per square ([`decompose`]),
//! checked by brute force ([`verify`]) and collected into tables ([`table`]) that can be written
//! out ([`emit`]) or used to fill attack tables directly ([`attacks`]).
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::option_unwrap_used, clippy::result_unwrap_used)]

pub mod attacks;
pub mod config;
pub mod decompose;
pub mod emit;
pub mod error;
pub mod search;
pub mod selector;
pub mod table;
pub mod verify;

pub use error::{Error, Result};
