// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

/* Whole-deck properties of the design generator: the Dobble property for
  every constructible order, the documented fallback for orders with no
  projective plane, and symbol binding. The k = 8 case is the classic
  game and doubles as the largest deck checked pair-by-pair here.
*/
use dobble::{generate_deck, DobbleError, SymbolSet};

/// Every pair of distinct cards must share exactly one symbol.
fn assert_dobble_property(deck: &dobble::Deck) {
    let cards = deck.cards();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            assert_eq!(
                cards[i].shared_symbols(&cards[j]).len(),
                1,
                "cards {} and {} do not share exactly one symbol",
                i,
                j
            );
        }
    }
}

#[test]
fn test_deck_sizes_for_prime_power_orders() {
    // (symbols per card, expected cards) with k - 1 a prime power;
    // the deck size is (k-1)^2 + (k-1) + 1.
    for (k, cards) in [(2, 3), (3, 7), (4, 13), (5, 21), (6, 31), (8, 57), (9, 73), (10, 91)] {
        let deck = generate_deck(k).unwrap();
        assert_eq!(deck.len(), cards, "k = {}", k);
        assert_eq!(deck.symbol_count(), cards, "k = {}", k);
        assert!(deck.is_maximal(), "k = {}", k);
        for card in deck.cards() {
            assert_eq!(card.len(), k as usize);
        }
        assert_dobble_property(&deck);
    }
}

#[test]
fn test_every_symbol_appears_k_times_in_maximal_decks() {
    // Duality of the plane: each point lies on k lines.
    for k in [3, 4, 8] {
        let deck = generate_deck(k).unwrap();
        for symbol in 0..deck.symbol_count() as u32 {
            let id = dobble::SymbolId::new(symbol);
            let appearances = deck.cards().iter().filter(|c| c.contains(id)).count();
            assert_eq!(appearances, k as usize, "symbol {} in k = {}", symbol, k);
        }
    }
}

#[test]
fn test_fallback_decks_keep_the_dobble_property() {
    // Orders 6 and 10 have no projective plane (Bruck-Ryser / Lam);
    // the generator drops to orders 5 and 9 and pads the cards.
    for (k, fallback_order) in [(7, 5), (11, 9)] {
        let deck = generate_deck(k).unwrap();
        assert_eq!(deck.order(), fallback_order);
        assert!(!deck.is_maximal());
        assert_eq!(
            deck.len() as u32,
            fallback_order * fallback_order + fallback_order + 1
        );
        for card in deck.cards() {
            assert_eq!(card.len(), k as usize);
        }
        assert_dobble_property(&deck);
    }
}

#[test]
fn test_generation_is_deterministic() {
    for k in [2, 5, 7, 8] {
        let a = generate_deck(k).unwrap();
        let b = generate_deck(k).unwrap();
        assert_eq!(a.cards(), b.cards());
        assert_eq!(a.order(), b.order());
    }
}

#[test]
fn test_unsupported_orders_fail() {
    for k in [0, 1] {
        match generate_deck(k) {
            Err(DobbleError::UnsupportedOrder { symbols_per_card }) => {
                assert_eq!(symbols_per_card, k)
            }
            other => panic!("k = {}: expected UnsupportedOrder, got {:?}", k, other),
        }
    }
}

#[test]
fn test_classic_binding() {
    // The classic roster is sized exactly for the 8-symbols-per-card deck.
    let deck = generate_deck(8).unwrap();
    let symbols = SymbolSet::classic();
    let names = deck.bind(&symbols).unwrap();
    assert_eq!(names.len(), 57);
    for card_names in &names {
        assert_eq!(card_names.len(), 8);
    }
    // All 57 names are used somewhere.
    let mut seen: Vec<&str> = names.iter().flatten().copied().collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 57);
}

#[test]
fn test_binding_rejects_small_sets() {
    let deck = generate_deck(4).unwrap(); // 13 symbols
    let set = SymbolSet::new(["a", "b", "c"]).unwrap();
    match deck.bind(&set) {
        Err(DobbleError::InsufficientSymbols {
            required,
            available,
        }) => {
            assert_eq!(required, 13);
            assert_eq!(available, 3);
        }
        other => panic!("expected InsufficientSymbols, got {:?}", other),
    }
}
