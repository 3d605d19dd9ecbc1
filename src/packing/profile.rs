// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing families and their radius profiles.
//!
//! Each family pairs a coordinate table set with a radius profile: a
//! function evaluated at `1..=n` that fixes the relative sizes of the `n`
//! circles on a card. `cci` is the uniform packing; the other four vary
//! the radii by a power law, giving cards a mix of large and small
//! symbols. Profile values are sorted ascending (decreasing profiles are
//! reversed) and scaled so the largest circle matches the radius recorded
//! in the coordinate table.

use strum_macros::{Display, EnumIter};

/// A circle-packing family.
///
/// The lowercase names (`cci`, `ccib`, ...) follow the naming of the
/// circle-in-circle packing data set the tables derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PackingFamily {
    /// Uniform radii.
    Cci,
    /// Radii proportional to `i^(-1/5)` (mildly decreasing).
    Ccib,
    /// Radii proportional to `i^(-2/3)` (strongly decreasing).
    Ccic,
    /// Radii proportional to `sqrt(i)` (increasing).
    Ccir,
    /// Radii proportional to `i^(-1/2)` (decreasing).
    Ccis,
}

impl PackingFamily {
    /// Profile value at 1-based index `i`.
    pub fn profile_value(self, i: usize) -> f64 {
        let x = i as f64;
        match self {
            PackingFamily::Cci => 1.0,
            PackingFamily::Ccib => x.powf(-1.0 / 5.0),
            PackingFamily::Ccic => x.powf(-2.0 / 3.0),
            PackingFamily::Ccir => x.sqrt(),
            PackingFamily::Ccis => x.powf(-0.5),
        }
    }

    /// Whether the profile decreases with `i`.
    pub fn is_decreasing(self) -> bool {
        matches!(
            self,
            PackingFamily::Ccib | PackingFamily::Ccic | PackingFamily::Ccis
        )
    }
}

/// Radii of all circles in a packing, ascending, with the largest equal to
/// `largest_radius`.
///
/// The profile is evaluated at `1..=count`; decreasing profiles are
/// reversed so the result is ascending, then everything is scaled by
/// `largest_radius / max`.
pub fn compute_radii(family: PackingFamily, count: usize, largest_radius: f64) -> Vec<f64> {
    debug_assert!(count > 0);
    debug_assert!(largest_radius > 0.0 && largest_radius <= 1.0);

    let mut values: Vec<f64> = (1..=count).map(|i| family.profile_value(i)).collect();
    if family.is_decreasing() {
        values.reverse();
    }
    let ratio = largest_radius / values[count - 1];
    for v in values.iter_mut() {
        *v *= ratio;
    }
    values
}
