// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (MEMO tier).
//!
//! Everything in this module is built once per base, strictly sequentially,
//! before any search starts, and is then read concurrently by the search
//! tasks without mutation:
//!
//! - [`PowerTables`] - positional weights and digit self-powers
//! - [`ResidueSet`] - adaptive set of reachable balance residues
//! - [`PruneLevel`] - per-digit-count pruning data, built bottom-up

pub mod levels;
pub mod powers;
pub mod residue_set;

pub use levels::PruneLevel;
pub use powers::PowerTables;
pub use residue_set::ResidueSet;
