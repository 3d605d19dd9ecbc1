// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for deck generation and card layout.
//!
//! Every fallible operation in the crate reports one of these variants
//! synchronously; no partial deck or layout is ever returned on failure,
//! and the crate performs no internal retries.

use crate::packing::PackingFamily;
use thiserror::Error;

/// Errors that can occur while generating a deck or laying out a card.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DobbleError {
    /// No projective plane or fallback design can be constructed for the
    /// requested number of symbols per card (requires at least 2).
    #[error("no deck design exists for {symbols_per_card} symbols per card")]
    UnsupportedOrder { symbols_per_card: u32 },

    /// No circle-packing table entry exists for the given symbol count.
    #[error("no '{family}' packing is available for {count} circles")]
    UnsupportedSymbolCount { family: PackingFamily, count: usize },

    /// A computed layout contains two intersecting circles after scaling.
    /// This indicates an internal invariant violation and is not
    /// recoverable for the affected card.
    #[error("layout slots {slot_a} and {slot_b} overlap by {overlap}")]
    LayoutOverlap {
        slot_a: usize,
        slot_b: usize,
        overlap: f64,
    },

    /// A malformed layout configuration or conversion parameter.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A symbol name appears more than once in a symbol set.
    #[error("duplicate symbol '{name}' in symbol set")]
    DuplicateSymbol { name: String },

    /// A symbol set is too small to bind the symbols of a deck.
    #[error("deck requires {required} symbols but the set holds {available}")]
    InsufficientSymbols { required: usize, available: usize },
}
