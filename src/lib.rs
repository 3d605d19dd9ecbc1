// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation of Dobble-style card decks.
//!
//! A Dobble deck is a set of cards, each carrying the same number of
//! symbols, such that any two cards share *exactly one* symbol. This crate
//! builds such decks and lays their cards out for rendering.
//!
//! # Architecture
//!
//! The implementation separates immutable reference data from per-run
//! state:
//!
//! ## Reference data (immutable)
//!
//! Embedded once, never mutated, safe to share across threads:
//! - Irreducible polynomial table backing `GF(p^m)` arithmetic
//! - Circle-packing coordinate tables (per family and circle count)
//! - Symbol rosters (e.g. the classic 57-symbol set)
//!
//! ## Per-run state
//!
//! Constructed per generation run and owned by the caller:
//! - [`Deck`] / [`Card`]: the combinatorial design
//! - [`CardLayout`]: per-card placements, computed on demand and
//!   discarded after rendering
//!
//! # Pipeline
//!
//! Deck generation proceeds in two independent stages:
//!
//! 1. **Design**: [`generate_deck`] builds the incidence structure of a
//!    finite projective plane of order `k - 1` over `GF(q)` (cards are
//!    lines, symbols are points), giving the Dobble property by
//!    construction. Orders without a plane fall back to the largest
//!    constructible order with card-unique padding.
//! 2. **Layout**: [`layout_card`] places a card's symbols on the slots of
//!    a precomputed circle packing, randomizing sizes, drift and rotation
//!    within bounds that cannot break the packing's non-overlap
//!    guarantee, and re-validates the result.
//!
//! Rendering the placements (loading symbol images, compositing, file
//! output) is deliberately outside this crate: a renderer consumes
//! [`CardLayout`] (or its pixel-space form) together with an asset source
//! of its choice.
//!
//! # Parallelization
//!
//! Layout is a pure function of `(card, config, seed)`: cards of a deck
//! can be laid out concurrently with no synchronization, sharing the
//! embedded tables read-only.
//!
//! # Example
//!
//! ```
//! use dobble::{generate_deck, layout_card, LayoutConfig, SymbolSet};
//!
//! let deck = generate_deck(8)?;
//! assert_eq!(deck.len(), 57);
//!
//! let symbols = SymbolSet::classic();
//! let names = deck.bind(&symbols)?;
//! assert_eq!(names[0].len(), 8);
//!
//! let config = LayoutConfig::default().with_seed(7);
//! for card in deck.cards() {
//!     let layout = layout_card(card, &config)?;
//!     assert_eq!(layout.placements().len(), 8);
//! }
//! # Ok::<(), dobble::DobbleError>(())
//! ```

pub mod design;
pub mod error;
pub mod layout;
pub mod math;
pub mod packing;
pub mod symbols;

// Re-export commonly used types
pub use design::{generate_deck, Card, Deck, SymbolId};
pub use error::DobbleError;
pub use layout::{layout_card, CardLayout, LayoutConfig, PixelPlacement, Placement};
pub use packing::{CirclePacking, PackingFamily};
pub use symbols::SymbolSet;
