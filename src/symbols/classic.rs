// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The classic 57-symbol roster.
//!
//! OpenMoji identifiers chosen to resemble the symbols of the original
//! Dobble game: one entry per symbol with its OpenMoji group and hex code,
//! so an asset provider can resolve the image file. 57 symbols is exactly
//! the size of the order-7 deck (8 symbols per card).

/// One classic symbol: display name, OpenMoji group, OpenMoji hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicSymbol {
    pub name: &'static str,
    pub group: &'static str,
    pub hex: &'static str,
}

/// Symbols resembling the classic Dobble game, in alphabetical order.
pub const CLASSIC_SYMBOLS: &[ClassicSymbol] = &[
    ClassicSymbol { name: "anchor", group: "travel-places", hex: "2693" },
    ClassicSymbol { name: "baby bottle", group: "food-drink", hex: "1F37C" },
    ClassicSymbol { name: "bomb", group: "smileys-emotion", hex: "1F4A3" },
    ClassicSymbol { name: "cactus", group: "animals-nature", hex: "1F335" },
    ClassicSymbol { name: "candle", group: "objects", hex: "1F56F" },
    ClassicSymbol { name: "carrot", group: "food-drink", hex: "1F955" },
    ClassicSymbol { name: "cheese wedge", group: "food-drink", hex: "1F9C0" },
    ClassicSymbol { name: "chess pawn", group: "activities", hex: "265F" },
    ClassicSymbol { name: "classical building", group: "travel-places", hex: "1F3DB" },
    ClassicSymbol { name: "clown face", group: "smileys-emotion", hex: "1F921" },
    ClassicSymbol { name: "deciduous tree", group: "animals-nature", hex: "1F333" },
    ClassicSymbol { name: "dog face", group: "animals-nature", hex: "1F436" },
    ClassicSymbol { name: "dolphin", group: "animals-nature", hex: "1F42C" },
    ClassicSymbol { name: "dragon", group: "animals-nature", hex: "1F409" },
    ClassicSymbol { name: "droplet", group: "travel-places", hex: "1F4A7" },
    ClassicSymbol { name: "eye", group: "people-body", hex: "1F441" },
    ClassicSymbol { name: "fire", group: "travel-places", hex: "1F525" },
    ClassicSymbol { name: "four leaf clover", group: "animals-nature", hex: "1F340" },
    ClassicSymbol { name: "front-facing baby chick", group: "animals-nature", hex: "1F425" },
    ClassicSymbol { name: "ghost", group: "smileys-emotion", hex: "1F47B" },
    ClassicSymbol { name: "gps", group: "extras-openmoji", hex: "E1CD" },
    ClassicSymbol { name: "green apple", group: "food-drink", hex: "1F34F" },
    ClassicSymbol { name: "grinning cat with smiling eyes", group: "smileys-emotion", hex: "1F638" },
    ClassicSymbol { name: "hammer", group: "objects", hex: "1F528" },
    ClassicSymbol { name: "hand with fingers splayed", group: "people-body", hex: "1F590" },
    ClassicSymbol { name: "high voltage", group: "travel-places", hex: "26A1" },
    ClassicSymbol { name: "ice", group: "food-drink", hex: "1F9CA" },
    ClassicSymbol { name: "intricate", group: "extras-openmoji", hex: "E24B" },
    ClassicSymbol { name: "lady beetle", group: "animals-nature", hex: "1F41E" },
    ClassicSymbol { name: "last quarter moon face", group: "travel-places", hex: "1F31C" },
    ClassicSymbol { name: "light bulb", group: "objects", hex: "1F4A1" },
    ClassicSymbol { name: "locked", group: "objects", hex: "1F512" },
    ClassicSymbol { name: "maple leaf", group: "animals-nature", hex: "1F341" },
    ClassicSymbol { name: "mouth", group: "people-body", hex: "1F444" },
    ClassicSymbol { name: "musical score", group: "objects", hex: "1F3BC" },
    ClassicSymbol { name: "no entry", group: "symbols", hex: "26D4" },
    ClassicSymbol { name: "old key", group: "objects", hex: "1F5DD" },
    ClassicSymbol { name: "oncoming taxi", group: "travel-places", hex: "1F696" },
    ClassicSymbol { name: "pencil", group: "objects", hex: "270F" },
    ClassicSymbol { name: "person standing", group: "people-body", hex: "1F9CD" },
    ClassicSymbol { name: "red exclamation mark", group: "symbols", hex: "2757" },
    ClassicSymbol { name: "red heart", group: "smileys-emotion", hex: "2764" },
    ClassicSymbol { name: "red question mark", group: "symbols", hex: "2753" },
    ClassicSymbol { name: "rosette", group: "animals-nature", hex: "1F3F5" },
    ClassicSymbol { name: "scissors", group: "objects", hex: "2702" },
    ClassicSymbol { name: "skull and crossbones", group: "smileys-emotion", hex: "2620" },
    ClassicSymbol { name: "snowflake", group: "travel-places", hex: "2744" },
    ClassicSymbol { name: "snowman without snow", group: "travel-places", hex: "26C4" },
    ClassicSymbol { name: "spider web", group: "animals-nature", hex: "1F578" },
    ClassicSymbol { name: "spider", group: "animals-nature", hex: "1F577" },
    ClassicSymbol { name: "sun", group: "travel-places", hex: "2600" },
    ClassicSymbol { name: "sunglasses", group: "objects", hex: "1F576" },
    ClassicSymbol { name: "t-rex", group: "animals-nature", hex: "1F996" },
    ClassicSymbol { name: "timer", group: "extras-openmoji", hex: "E0AB" },
    ClassicSymbol { name: "turtle", group: "animals-nature", hex: "1F422" },
    ClassicSymbol { name: "yin yang", group: "symbols", hex: "262F" },
    ClassicSymbol { name: "zebra", group: "animals-nature", hex: "1F993" },
];
