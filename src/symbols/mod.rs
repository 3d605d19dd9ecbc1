// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbol sets: the named symbols a deck is built from.
//!
//! A [`SymbolSet`] is an ordered collection of unique symbol names (for
//! example OpenMoji identifiers). Decks are generated over abstract
//! [`crate::design::SymbolId`]s and bound to a set afterwards, so the same
//! combinatorial design can be reused with any roster of at least the
//! deck's symbol count. The set is immutable once constructed and can be
//! shared freely across threads.

pub mod classic;

use crate::design::SymbolId;
use crate::error::DobbleError;
pub use classic::{ClassicSymbol, CLASSIC_SYMBOLS};

/// An ordered, finite collection of unique symbol names.
#[derive(Debug, Clone)]
pub struct SymbolSet {
    names: Vec<String>,
}

impl SymbolSet {
    /// Build a symbol set from names, preserving order.
    ///
    /// Fails with [`DobbleError::DuplicateSymbol`] on a repeated name.
    pub fn new<I, S>(names: I) -> Result<Self, DobbleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(DobbleError::DuplicateSymbol { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// The built-in roster resembling the classic game (57 symbols,
    /// matching the order-7 deck).
    pub fn classic() -> Self {
        Self {
            names: CLASSIC_SYMBOLS.iter().map(|s| s.name.to_string()).collect(),
        }
    }

    /// Number of symbols in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for a symbol id, or `None` when the id is out of range.
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
