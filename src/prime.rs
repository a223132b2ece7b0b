//! Prime capacities for the slot array.
//!
//! Quadratic probing only visits half of the residues of a prime modulus
//! before repeating, so every capacity the table ever allocates comes from
//! [`smallest_prime_at_least`].

/// Floor applied to degenerate size hints so the table never allocates
/// fewer than two slots.
pub const MIN_CAPACITY: usize = 2;

/// Returns true if `n` is prime. Values below 2 are not prime.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }

    if n < 4 {
        return true;
    }

    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;

    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }

        divisor += 2;
    }

    true
}

/// Smallest prime that is greater than or equal to `n`. Always at least 2.
///
/// # Panics
///
/// Panics with "capacity overflow" if no such prime fits in a `usize`.
pub fn smallest_prime_at_least(n: usize) -> usize {
    checked_smallest_prime_at_least(n).unwrap_or_else(|| capacity_overflow())
}

/// Like [`smallest_prime_at_least`], but returns `None` instead of panicking
/// when the search runs past `usize::MAX`.
pub fn checked_smallest_prime_at_least(n: usize) -> Option<usize> {
    let mut candidate = n;

    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }

    Some(candidate)
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
