// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

/* Validity of the embedded packing tables through the public lookup API.
  The layout stage assumes every table entry is a genuine packing; these
  tests make that assumption explicit for all families and counts.
*/
use dobble::packing::{available_counts, compute_radii};
use dobble::{CirclePacking, DobbleError, PackingFamily};
use strum::IntoEnumIterator;

#[test]
fn test_supported_ranges() {
    assert_eq!(available_counts(PackingFamily::Cci), 1..=16);
    for family in [
        PackingFamily::Ccib,
        PackingFamily::Ccic,
        PackingFamily::Ccir,
        PackingFamily::Ccis,
    ] {
        assert_eq!(available_counts(family), 5..=16);
    }
}

#[test]
fn test_every_table_is_a_packing() {
    for family in PackingFamily::iter() {
        for count in available_counts(family) {
            let packing = CirclePacking::lookup(family, count).unwrap();
            assert_eq!(packing.count(), count);
            assert_eq!(packing.centers().len(), count);
            assert_eq!(packing.radii().len(), count);

            for i in 0..count {
                let (x, y) = packing.centers()[i];
                let r = packing.radii()[i];
                assert!(r > 0.0);
                assert!(
                    (x * x + y * y).sqrt() + r <= 1.0,
                    "{} n={}: slot {} outside the unit disk",
                    family,
                    count,
                    i
                );
                for j in (i + 1)..count {
                    let (ox, oy) = packing.centers()[j];
                    let dist = ((x - ox).powi(2) + (y - oy).powi(2)).sqrt();
                    assert!(
                        dist >= r + packing.radii()[j],
                        "{} n={}: slots {} and {} overlap",
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

#[test]
fn test_radii_follow_the_family_profile() {
    // The largest slot matches the table's scale and the ratios follow
    // the profile; spot-check the inverse square root family.
    let packing = CirclePacking::lookup(PackingFamily::Ccis, 9).unwrap();
    let radii = packing.radii();
    assert!((radii[0] / radii[8] - 1.0 / 3.0).abs() < 1e-12);

    let recomputed = compute_radii(PackingFamily::Ccis, 9, radii[8]);
    for (a, b) in radii.iter().zip(&recomputed) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_packings_are_reasonably_dense() {
    // A packing that wastes most of the card would be a table defect.
    // The sparsest uniform packing (two circles) still covers just under
    // half of the unit disk; everything else covers more.
    for count in 1..=16 {
        let packing = CirclePacking::lookup(PackingFamily::Cci, count).unwrap();
        let covered: f64 = packing.radii().iter().map(|r| r * r).sum();
        assert!(
            covered >= 0.45,
            "cci n={} covers only {:.0}% of the disk",
            count,
            covered * 100.0
        );
    }
}

#[test]
fn test_missing_entries() {
    for family in [
        PackingFamily::Ccib,
        PackingFamily::Ccic,
        PackingFamily::Ccir,
        PackingFamily::Ccis,
    ] {
        for count in [1, 2, 3, 4, 17] {
            assert!(matches!(
                CirclePacking::lookup(family, count),
                Err(DobbleError::UnsupportedSymbolCount { .. })
            ));
        }
    }
    assert!(CirclePacking::lookup(PackingFamily::Cci, 0).is_err());
    assert!(CirclePacking::lookup(PackingFamily::Cci, 17).is_err());
}
