// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deck generation: the combinatorial design behind a Dobble deck.
//!
//! A deck with `k` symbols per card is the line set of a finite projective
//! plane of order `n = k - 1`: cards are lines, symbols are points, and the
//! plane axioms give the defining property that any two cards share exactly
//! one symbol. When `n` is a constructible prime power the deck is maximal
//! (`n^2 + n + 1` cards). Otherwise no plane of order `n` is known, and
//! [`generate_deck`] falls back to the plane of the largest constructible
//! order `q < n`, padding every card up to `k` symbols with filler symbols
//! that are unique to their card. Intersections are untouched, so the
//! Dobble property still holds, at the cost of a smaller deck
//! (`q^2 + q + 1` cards, reported as non-maximal).
//!
//! Generation is fully deterministic: the same `k` always produces the same
//! deck, card for card and symbol for symbol.

pub mod plane;

use crate::error::DobbleError;
use crate::symbols::SymbolSet;
use plane::ProjectivePlane;

/// Index of a symbol within a deck.
///
/// Symbols are dense: a deck with `s` symbols uses ids `0..s`. Plane point
/// symbols come first; fallback filler symbols (if any) follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create a symbol id.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the id as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A single playing card: a fixed-size set of symbols, stored sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    symbols: Vec<SymbolId>,
}

impl Card {
    fn new(mut symbols: Vec<SymbolId>) -> Self {
        symbols.sort();
        debug_assert!(symbols.windows(2).all(|w| w[0] < w[1]), "duplicate symbol");
        Self { symbols }
    }

    /// Number of symbols on the card.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the card is empty (never true for generated decks).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The card's symbols in ascending order.
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Whether the card carries the given symbol.
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Symbols shared with another card.
    ///
    /// For two distinct cards of a valid deck this yields exactly one
    /// symbol; the method returns all matches so that tests can verify it.
    pub fn shared_symbols(&self, other: &Card) -> Vec<SymbolId> {
        // Both sides are sorted; a merge walk finds the intersection.
        let mut shared = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.symbols.len() && j < other.symbols.len() {
            match self.symbols[i].cmp(&other.symbols[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared.push(self.symbols[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }
}

/// An ordered sequence of cards satisfying the Dobble property.
#[derive(Debug, Clone)]
pub struct Deck {
    order: u32,
    symbols_per_card: u32,
    symbol_count: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards (never true for generated decks).
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, in canonical generation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Order of the underlying projective plane.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of symbols on every card.
    pub fn symbols_per_card(&self) -> u32 {
        self.symbols_per_card
    }

    /// Total number of distinct symbols used across the deck.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Whether this is the maximum deck for its card size, i.e. whether a
    /// plane of order `symbols_per_card - 1` was constructible directly.
    pub fn is_maximal(&self) -> bool {
        self.order == self.symbols_per_card - 1
    }

    /// Resolve every card's symbols against a symbol set.
    ///
    /// Fails with [`DobbleError::InsufficientSymbols`] when the set holds
    /// fewer names than the deck uses.
    pub fn bind<'a>(&self, symbols: &'a SymbolSet) -> Result<Vec<Vec<&'a str>>, DobbleError> {
        if symbols.len() < self.symbol_count {
            return Err(DobbleError::InsufficientSymbols {
                required: self.symbol_count,
                available: symbols.len(),
            });
        }
        Ok(self
            .cards
            .iter()
            .map(|card| {
                card.symbols()
                    .iter()
                    .map(|&id| {
                        symbols
                            .name(id)
                            .unwrap_or_else(|| panic!("symbol {} out of range", id.value()))
                    })
                    .collect()
            })
            .collect())
    }
}

/// Generate the deck for the requested number of symbols per card.
///
/// Fails with [`DobbleError::UnsupportedOrder`] when `symbols_per_card < 2`
/// (no deck of at least two cards exists). For all other inputs a deck is
/// returned; see the module docs for the fallback applied when
/// `symbols_per_card - 1` is not a constructible prime power.
pub fn generate_deck(symbols_per_card: u32) -> Result<Deck, DobbleError> {
    if symbols_per_card < 2 {
        return Err(DobbleError::UnsupportedOrder { symbols_per_card });
    }
    let wanted = symbols_per_card - 1;

    // Largest constructible order not above the requested one. Order 1
    // (the triangle) always constructs, so the search cannot fail.
    let order = (1..=wanted)
        .rev()
        .find(|&n| ProjectivePlane::is_constructible(n))
        .unwrap_or(1);
    let plane = ProjectivePlane::new(order);
    let padding = wanted - order;

    if padding > 0 {
        log::info!(
            "[Deck] no plane of order {}; falling back to order {} with {} filler symbols per card",
            wanted,
            order,
            padding
        );
    }

    let mut next_filler = plane.num_points();
    let mut cards = Vec::with_capacity(plane.lines().len());
    for line in plane.lines() {
        let mut symbols: Vec<SymbolId> = line.iter().map(|&p| SymbolId::new(p)).collect();
        for _ in 0..padding {
            symbols.push(SymbolId::new(next_filler));
            next_filler += 1;
        }
        cards.push(Card::new(symbols));
    }

    log::debug!(
        "[Deck] {} cards of {} symbols each, {} distinct symbols",
        cards.len(),
        symbols_per_card,
        next_filler
    );

    Ok(Deck {
        order,
        symbols_per_card,
        symbol_count: next_filler as usize,
        cards,
    })
}
