// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circle packings: precomputed slot positions for a card's symbols.
//!
//! A card with `n` symbols is laid out on the slots of a precomputed
//! packing of `n` circles in the unit disk. The packings are immutable
//! reference data embedded at compile time ([`tables`]); a lookup pairs a
//! table entry with the per-slot radii computed from the family's radius
//! profile ([`profile`]). Nothing is solved at runtime, so lookups are
//! cheap and safe to share across threads.
//!
//! Uniform packings (`cci`) exist for 1..=16 circles; the non-uniform
//! families start at 5 circles, mirroring the source data set.

pub mod profile;
pub mod tables;

use crate::error::DobbleError;
pub use profile::{compute_radii, PackingFamily};
use tables::PackingTable;

fn family_tables(family: PackingFamily) -> &'static [PackingTable] {
    match family {
        PackingFamily::Cci => tables::CCI,
        PackingFamily::Ccib => tables::CCIB,
        PackingFamily::Ccic => tables::CCIC,
        PackingFamily::Ccir => tables::CCIR,
        PackingFamily::Ccis => tables::CCIS,
    }
}

/// Circle counts with a table entry for the family.
pub fn available_counts(family: PackingFamily) -> std::ops::RangeInclusive<usize> {
    let entries = family_tables(family);
    entries[0].count..=entries[entries.len() - 1].count
}

/// A resolved packing: slot centers and radii for one card size.
///
/// Slots are ordered by ascending radius; `centers[i]` and `radii[i]`
/// describe slot `i`. All coordinates are unit-disk relative, origin at
/// the card center.
#[derive(Debug, Clone)]
pub struct CirclePacking {
    family: PackingFamily,
    centers: &'static [(f64, f64)],
    radii: Vec<f64>,
}

impl CirclePacking {
    /// Look up the packing for `count` circles of the given family.
    ///
    /// Fails with [`DobbleError::UnsupportedSymbolCount`] when the family
    /// has no table entry for that count.
    pub fn lookup(family: PackingFamily, count: usize) -> Result<Self, DobbleError> {
        let entry = family_tables(family)
            .iter()
            .find(|table| table.count == count)
            .ok_or(DobbleError::UnsupportedSymbolCount { family, count })?;
        Ok(Self {
            family,
            centers: entry.centers,
            radii: compute_radii(family, count, entry.largest_radius),
        })
    }

    /// The packing family this packing was resolved from.
    pub fn family(&self) -> PackingFamily {
        self.family
    }

    /// Number of slots.
    pub fn count(&self) -> usize {
        self.centers.len()
    }

    /// Slot centers, ordered by ascending slot radius.
    pub fn centers(&self) -> &[(f64, f64)] {
        self.centers
    }

    /// Slot radii, ascending.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_uniform() {
        let packing = CirclePacking::lookup(PackingFamily::Cci, 7).unwrap();
        assert_eq!(packing.count(), 7);
        assert_eq!(packing.radii().len(), 7);
        // Uniform family: all slots share the table's largest radius.
        let r = packing.radii()[0];
        assert!(packing.radii().iter().all(|&x| x == r));
    }

    #[test]
    fn test_lookup_missing_count() {
        let result = CirclePacking::lookup(PackingFamily::Ccib, 3);
        assert!(matches!(
            result,
            Err(DobbleError::UnsupportedSymbolCount {
                family: PackingFamily::Ccib,
                count: 3,
            })
        ));
        assert!(CirclePacking::lookup(PackingFamily::Cci, 17).is_err());
        assert!(CirclePacking::lookup(PackingFamily::Cci, 0).is_err());
    }

    #[test]
    fn test_available_counts() {
        assert_eq!(available_counts(PackingFamily::Cci), 1..=16);
        assert_eq!(available_counts(PackingFamily::Ccis), 5..=16);
    }

    /// Every embedded table must itself satisfy the invariants the layout
    /// stage relies on: circles inside the unit disk and pairwise
    /// non-overlapping after profile scaling.
    #[test]
    fn test_all_tables_are_valid_packings() {
        for family in PackingFamily::iter() {
            for count in available_counts(family) {
                let packing = CirclePacking::lookup(family, count).unwrap();
                let centers = packing.centers();
                let radii = packing.radii();
                for i in 0..count {
                    let (x, y) = centers[i];
                    assert!(
                        (x * x + y * y).sqrt() + radii[i] <= 1.0,
                        "{} n={} slot {} escapes the disk",
                        family,
                        count,
                        i
                    );
                    for j in (i + 1)..count {
                        let dx = centers[i].0 - centers[j].0;
                        let dy = centers[i].1 - centers[j].1;
                        let dist = (dx * dx + dy * dy).sqrt();
                        assert!(
                            dist >= radii[i] + radii[j],
                            "{} n={} slots {} and {} overlap",
                            family,
                            count,
                            i,
                            j
                        );
                    }
                }
            }
        }
    }
}
