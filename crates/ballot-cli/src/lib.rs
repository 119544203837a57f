//! ballot-cli
//! ==========
//!
//! Command-line interface for the `ballot-core` lookup engine.
//!
//! The binary (`ballot-cli`) is the primary deliverable. The library target
//! holds the terminal view and the `interactive` line protocol so they can be
//! tested on their own.
//!
//! Basic usage:
//!
//! ```text
//! ballot-cli --help
//! ballot-cli stats
//! ballot-cli search "Cook, Illinois (60629)"
//! ballot-cli suggest coo
//! ballot-cli --lookup zips.csv --ballots ballots.csv.gz search 02108
//! ballot-cli build --out ballots.bin
//! ballot-cli --store ballots.bin interactive
//! ```
//!
//! For programmatic access use the [`ballot-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod script;
pub mod view;
