//! Workspace facade: re-exports `ballot-core` so the demos can use
//! `ballotdb_rs::prelude::*`.
pub use ballot_core::*;
