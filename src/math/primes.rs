// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primality and prime-power detection.
//!
//! A finite projective plane of order `n` is constructible by the standard
//! field construction exactly when `n` is a prime power. These checks are
//! cheap trial-division routines; the orders we ever see are small (a deck
//! with `k` symbols per card needs order `k - 1`).

/// Check whether `num` is prime.
pub fn is_prime(num: u32) -> bool {
    if num < 2 {
        return false;
    }
    let mut factor = 2u32;
    while u64::from(factor) * u64::from(factor) <= u64::from(num) {
        if num % factor == 0 {
            return false;
        }
        factor += 1;
    }
    true
}

/// Decompose `num` as a prime power `p^m` with `m >= 1`.
///
/// Returns `Some((p, m))` if `num` is a prime power, `None` otherwise.
/// Note that 1 is not a prime power.
pub fn prime_power(num: u32) -> Option<(u32, u32)> {
    if num < 2 {
        return None;
    }
    // The smallest prime factor of a prime power is its base.
    let mut base = 2u32;
    while u64::from(base) * u64::from(base) <= u64::from(num) {
        if num % base == 0 {
            break;
        }
        base += 1;
    }
    if u64::from(base) * u64::from(base) > u64::from(num) {
        // num itself is prime.
        return Some((num, 1));
    }
    let mut remaining = num;
    let mut exponent = 0u32;
    while remaining % base == 0 {
        remaining /= base;
        exponent += 1;
    }
    if remaining == 1 {
        Some((base, exponent))
    } else {
        None
    }
}
