// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite projective plane construction.
//!
//! For a prime power `q`, the plane `PG(2, q)` is built from the field
//! `GF(q)`: points are the normalized homogeneous triples over the field,
//! lines are the same triples read as coefficient vectors, and a point lies
//! on a line when their dot product vanishes. This yields `q^2 + q + 1`
//! points and as many lines, each line holding `q + 1` points, with any two
//! distinct lines meeting in exactly one point.
//!
//! # Enumeration order
//!
//! Points (and lines) are enumerated canonically so that repeated
//! construction is bit-for-bit identical:
//!
//! 1. `(1, a, b)` for `a`, `b` in field order (indices `0..q^2`)
//! 2. `(0, 1, a)` for `a` in field order (indices `q^2..q^2 + q`)
//! 3. `(0, 0, 1)` (index `q^2 + q`)
//!
//! The degenerate order-1 plane (the triangle: 3 points, 3 lines of 2) is
//! constructed explicitly; it backs decks with 2 symbols per card.

use crate::math::Field;

/// A finite projective plane of order `n`, stored as its lines.
#[derive(Debug, Clone)]
pub struct ProjectivePlane {
    order: u32,
    lines: Vec<Vec<u32>>,
}

impl ProjectivePlane {
    /// Construct the plane of the given order.
    ///
    /// # Panics
    ///
    /// Panics if the order is not constructible; check with
    /// [`ProjectivePlane::is_constructible`] first.
    pub fn new(order: u32) -> Self {
        Self::try_new(order).unwrap_or_else(|| panic!("order {} is not constructible", order))
    }

    /// Construct the plane of the given order, or `None` when the order is
    /// neither 1 nor a prime power with a known field construction.
    pub fn try_new(order: u32) -> Option<Self> {
        if order == 1 {
            return Some(Self {
                order: 1,
                lines: vec![vec![0, 1], vec![0, 2], vec![1, 2]],
            });
        }

        let field = Field::new(order)?;
        let q = field.q();

        // Triple for a point or line index, per the canonical enumeration.
        let triple = |index: u32| -> [u32; 3] {
            if index < q * q {
                [1, index / q, index % q]
            } else if index < q * q + q {
                [0, 1, index - q * q]
            } else {
                [0, 0, 1]
            }
        };

        let size = q * q + q + 1;
        let mut lines = Vec::with_capacity(size as usize);
        for line_index in 0..size {
            let l = triple(line_index);
            let mut points = Vec::with_capacity(q as usize + 1);
            for point_index in 0..size {
                let x = triple(point_index);
                let dot = field.add(
                    field.add(field.mul(l[0], x[0]), field.mul(l[1], x[1])),
                    field.mul(l[2], x[2]),
                );
                if dot == 0 {
                    points.push(point_index);
                }
            }
            debug_assert_eq!(points.len() as u32, q + 1);
            lines.push(points);
        }

        log::debug!(
            "[ProjectivePlane] order {}: {} points, {} lines of {}",
            order,
            size,
            lines.len(),
            q + 1
        );

        Some(Self { order, lines })
    }

    /// Whether a plane of this order can be constructed.
    pub fn is_constructible(order: u32) -> bool {
        order == 1 || Field::supports_order(order)
    }

    /// The order of the plane.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of points (equals the number of lines).
    pub fn num_points(&self) -> u32 {
        self.order * self.order + self.order + 1
    }

    /// The lines of the plane, each a sorted list of point indices.
    pub fn lines(&self) -> &[Vec<u32>] {
        &self.lines
    }
}
