// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Card layout: placing a card's symbols inside the card disk.
//!
//! [`layout_card`] turns a [`Card`] into a [`CardLayout`]: one placement
//! (center, radius, rotation) per symbol, in unit-disk coordinates with the
//! origin at the card center. The placements derive from a precomputed
//! circle packing for the card's symbol count; randomization only ever
//! *shrinks* a circle within its packed slot or applies rigid motions, so
//! the non-overlap invariant of the packing carries over to every layout.
//!
//! # Randomization
//!
//! All randomness flows through a single [`rand::rngs::StdRng`] stream
//! with a fixed draw order:
//!
//! 1. packing family (only when the config leaves it unset)
//! 2. slot shuffle (only when a seed is set; unseeded layouts keep the
//!    stable symbol-order assignment)
//! 3. rigid layout rotation angle
//! 4. per symbol: radius factor, jitter angle, jitter distance, sprite
//!    rotation
//!
//! With `LayoutConfig::seed` set, repeated calls are therefore
//! bit-identical; without it the stream is seeded from entropy and layouts
//! differ between runs.
//!
//! Layout computation is a pure function of `(card, config, rng stream)`
//! and touches no shared mutable state, so cards of a deck may be laid out
//! in parallel.

use crate::design::{Card, SymbolId};
use crate::error::DobbleError;
use crate::packing::{CirclePacking, PackingFamily};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

/// Configuration for [`layout_card`].
///
/// The defaults give gently varied symbol sizes, a random packing family
/// per card and full-circle sprite rotation, close to the look of the
/// original game.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Packing family; a seeded-random pick per layout when `None`.
    pub family: Option<PackingFamily>,
    /// Lower bound of the per-symbol radius factor, in `(0, 1]`.
    pub min_radius_scale: f64,
    /// Upper bound of the per-symbol radius factor, in `(0, 1]`.
    pub max_radius_scale: f64,
    /// Fraction of a slot's slack a symbol may drift, in `[0, 1]`.
    pub jitter: f64,
    /// Rotation bound in degrees, in `[0, 360]`; applied rigidly to the
    /// whole layout and independently to each symbol sprite.
    pub rotation_range: f64,
    /// RNG seed for reproducible layouts; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            family: None,
            min_radius_scale: 0.9,
            max_radius_scale: 1.0,
            jitter: 0.5,
            rotation_range: 360.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Fix the packing family instead of picking one at random.
    pub fn with_family(mut self, family: PackingFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the per-symbol radius factor bounds.
    pub fn with_radius_scale(mut self, min: f64, max: f64) -> Self {
        self.min_radius_scale = min;
        self.max_radius_scale = max;
        self
    }

    /// Set the jitter fraction.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the rotation bound in degrees.
    pub fn with_rotation_range(mut self, degrees: f64) -> Self {
        self.rotation_range = degrees;
        self
    }

    /// Seed the RNG for reproducible layouts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration bounds.
    pub fn validate(&self) -> Result<(), DobbleError> {
        let fail = |reason: &str| {
            Err(DobbleError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if !(self.min_radius_scale > 0.0) {
            return fail("min_radius_scale must be positive");
        }
        if self.min_radius_scale > self.max_radius_scale {
            return fail("min_radius_scale must not exceed max_radius_scale");
        }
        if self.max_radius_scale > 1.0 {
            return fail("max_radius_scale must not exceed 1 (a symbol cannot outgrow its slot)");
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return fail("jitter must lie in [0, 1]");
        }
        if !(0.0..=360.0).contains(&self.rotation_range) {
            return fail("rotation_range must lie in [0, 360] degrees");
        }
        Ok(())
    }
}

/// Placement of one symbol: unit-disk center, radius, sprite rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub symbol: SymbolId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Counterclockwise sprite rotation in degrees.
    pub rotation: f64,
}

/// Pixel-space placement for a square card image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPlacement {
    pub symbol: SymbolId,
    /// Center in pixels, origin at the image's lower-left corner.
    pub center: (u32, u32),
    /// Side of the symbol's square sprite box in pixels.
    pub size: u32,
    /// Counterclockwise sprite rotation in degrees, unchanged from the
    /// unit-disk placement.
    pub rotation: f64,
}

/// A computed card layout, consumed by a renderer and then discarded.
#[derive(Debug, Clone)]
pub struct CardLayout {
    family: PackingFamily,
    placements: Vec<Placement>,
}

impl CardLayout {
    /// The packing family the layout was built on.
    pub fn family(&self) -> PackingFamily {
        self.family
    }

    /// One placement per card symbol, in card symbol order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Convert to pixel placements for a square image of the given size.
    ///
    /// Centers map from `[-1, 1]` to `[0, image_size]` and each sprite box
    /// side is `radius * image_size`, both floored, matching a renderer
    /// that pastes a sprite of that size centered on the pixel. Sprite
    /// rotation stays available on the unit-disk placements.
    pub fn to_pixels(&self, image_size: u32) -> Result<Vec<PixelPlacement>, DobbleError> {
        if image_size == 0 {
            return Err(DobbleError::InvalidConfig {
                reason: "image size must be a positive number of pixels".to_string(),
            });
        }
        let size = f64::from(image_size);
        Ok(self
            .placements
            .iter()
            .map(|p| PixelPlacement {
                symbol: p.symbol,
                center: (
                    ((p.x / 2.0 + 0.5) * size).floor() as u32,
                    ((p.y / 2.0 + 0.5) * size).floor() as u32,
                ),
                size: (p.radius * size).floor() as u32,
                rotation: p.rotation,
            })
            .collect())
    }
}

/// Compute a layout for one card.
///
/// See the module docs for the randomization scheme. Errors:
/// [`DobbleError::InvalidConfig`] for bad bounds,
/// [`DobbleError::UnsupportedSymbolCount`] when no packing covers the
/// card's symbol count, and [`DobbleError::LayoutOverlap`] if the computed
/// placements violate the non-overlap invariant (which indicates a bug,
/// not a property of the inputs).
pub fn layout_card(card: &Card, config: &LayoutConfig) -> Result<CardLayout, DobbleError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let family = config.family.unwrap_or_else(|| {
        let families: Vec<PackingFamily> = PackingFamily::iter().collect();
        families[rng.gen_range(0..families.len())]
    });
    let packing = CirclePacking::lookup(family, card.len())?;

    // Slot assignment: stable by symbol order, shuffled when seeded.
    let mut slot_order: Vec<usize> = (0..card.len()).collect();
    if config.seed.is_some() {
        slot_order.shuffle(&mut rng);
    }

    let layout_angle = sample_angle(&mut rng, config.rotation_range).to_radians();
    let (sin, cos) = layout_angle.sin_cos();

    let mut placements = Vec::with_capacity(card.len());
    for (index, &symbol) in card.symbols().iter().enumerate() {
        let slot = slot_order[index];
        let (slot_x, slot_y) = packing.centers()[slot];
        let slot_radius = packing.radii()[slot];

        let factor = rng.gen_range(config.min_radius_scale..=config.max_radius_scale);
        let radius = factor * slot_radius;

        // Drift within the slack the shrunken circle leaves in its slot,
        // so the circle stays inside the slot's allocation.
        let drift_angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let drift = config.jitter * (slot_radius - radius) * rng.gen_range(0.0..=1.0);
        let x = slot_x + drift * drift_angle.cos();
        let y = slot_y + drift * drift_angle.sin();

        let rotation = sample_angle(&mut rng, config.rotation_range);

        placements.push(Placement {
            symbol,
            x: cos * x - sin * y,
            y: sin * x + cos * y,
            radius,
            rotation,
        });
    }

    validate_no_overlap(&placements)?;
    Ok(CardLayout { family, placements })
}

fn sample_angle(rng: &mut StdRng, range_degrees: f64) -> f64 {
    if range_degrees > 0.0 {
        rng.gen_range(0.0..range_degrees)
    } else {
        0.0
    }
}

/// The invariant every layout must satisfy: pairwise center distances at
/// least the sum of the radii. Construction guarantees it; this guards
/// against regressions in the scaling/jitter arithmetic.
fn validate_no_overlap(placements: &[Placement]) -> Result<(), DobbleError> {
    for i in 0..placements.len() {
        let a = &placements[i];
        debug_assert!((a.x * a.x + a.y * a.y).sqrt() + a.radius <= 1.0 + 1e-9);
        for (offset, b) in placements[i + 1..].iter().enumerate() {
            let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if distance < a.radius + b.radius {
                return Err(DobbleError::LayoutOverlap {
                    slot_a: i,
                    slot_b: i + 1 + offset,
                    overlap: a.radius + b.radius - distance,
                });
            }
        }
    }
    Ok(())
}
