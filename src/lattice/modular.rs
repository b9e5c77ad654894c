//! Modular arithmetic over Z_q for q = 12289
//!
//! All helpers take canonical residues in [0, q) and return canonical
//! residues. Products are widened to `u32` before the truncating `%`, and
//! subtractions are biased by `+q` so no intermediate goes negative. Every
//! helper is a `const fn` so the twiddle tables can be built at compile time.

use super::params::Q;

const Q32: u32 = Q as u32;

/// Add two residues: (a + b) mod q
#[inline(always)]
pub const fn add_mod(a: u16, b: u16) -> u16 {
    ((a as u32 + b as u32) % Q32) as u16
}

/// Subtract two residues: (a + q - b) mod q
///
/// Assumes b ≤ q.
#[inline(always)]
pub const fn sub_mod(a: u16, b: u16) -> u16 {
    ((a as u32 + Q32 - b as u32) % Q32) as u16
}

/// Multiply two residues with a 32-bit intermediate: (a · b) mod q
#[inline(always)]
pub const fn mul_mod(a: u16, b: u16) -> u16 {
    ((a as u32 * b as u32) % Q32) as u16
}

/// Negate a residue: -a mod q (0 stays 0)
#[inline(always)]
pub const fn neg_mod(a: u16) -> u16 {
    if a == 0 {
        0
    } else {
        Q - a
    }
}

/// Compute base^exp mod q using binary exponentiation
pub const fn pow_mod(base: u16, mut exp: u32) -> u16 {
    let mut result = 1u16;
    let mut base = base % Q;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base);
        }
        exp >>= 1;
        base = mul_mod(base, base);
    }
    result
}

/// Compute a^{-1} mod q using the extended Euclidean algorithm
///
/// Panics if a ≡ 0 (mod q).
pub const fn mod_inv(a: u16) -> u16 {
    let (mut old_r, mut r) = (a as i32 % Q as i32, Q as i32);
    let (mut old_s, mut s) = (1i32, 0i32);

    while r != 0 {
        let quotient = old_r / r;
        let temp = r;
        r = old_r - quotient * r;
        old_r = temp;
        let temp = s;
        s = old_s - quotient * s;
        old_s = temp;
    }

    assert!(old_r == 1, "a must be invertible mod q");
    old_s.rem_euclid(Q as i32) as u16
}

/// Multiplicative order of a mod q: the least k ≥ 1 with a^k ≡ 1
///
/// Panics if a ≡ 0 (mod q).
pub const fn multiplicative_order(a: u16) -> u32 {
    let a = a % Q;
    assert!(a != 0, "0 has no multiplicative order");
    let mut k = 1u32;
    let mut x = a;
    while x != 1 {
        x = mul_mod(x, a);
        k += 1;
    }
    k
}

/// Reduce a signed value to [0, q)
#[inline(always)]
pub const fn reduce_signed(a: i64) -> u16 {
    a.rem_euclid(Q as i64) as u16
}

/// Center a residue to [-(q-1)/2, (q-1)/2]
#[inline]
pub const fn center(a: u16) -> i16 {
    if a > Q / 2 {
        a as i16 - Q as i16
    } else {
        a as i16
    }
}

/// Reverse the low `bits` bits of `x`
#[inline]
pub const fn bit_reverse(x: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS - bits)
    }
}

// ============================================================================
// Tests
// ============================================================================
