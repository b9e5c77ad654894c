//! Parameter set for the HVC ring R_q = Z_q[X]/(X^n + 1)
//!
//! | Name | n | q | g | g⁻¹ | n⁻¹ |
//! |------|---|---|---|-----|-----|
//! | `HVC` | 256 | 12289 | 7 | 8778 | 12241 |
//!
//! The generator g = 7 has multiplicative order 2048 = 8n modulo 12289. The
//! transform itself runs on ψ = g^{2048/2n} = 7⁴ = 2401, a primitive 2n-th
//! root of unity, so that the stage-indexed twiddle layout agrees with the
//! reference tables (whose 10-bit layout over g coincides with an 8-bit
//! layout over ψ on the first n entries).

use super::modular::{mod_inv, mul_mod, multiplicative_order, pow_mod};

// ============================================================================
// Compile-time constants
// ============================================================================

/// Field modulus q (prime, q ≡ 1 mod 2n)
pub const Q: u16 = 12289;

/// Ring degree n
pub const N: usize = 256;

/// log₂(n): number of butterfly stages
pub const LOG_N: u32 = N.trailing_zeros();

/// Generator g from which the twiddle factors are derived
pub const GENERATOR: u16 = 7;

/// g⁻¹ mod q
pub const GENERATOR_INV: u16 = 8778;

/// n⁻¹ mod q, applied once at the end of the inverse transform
pub const N_INV: u16 = 12241;

/// Multiplicative order of g mod q
pub const GENERATOR_ORDER: u32 = multiplicative_order(GENERATOR);

/// ψ: primitive 2n-th root of unity used by the forward transform
pub const PSI: u16 = pow_mod(GENERATOR, GENERATOR_ORDER / (2 * N as u32));

/// ψ⁻¹: primitive 2n-th root of unity used by the inverse transform
pub const PSI_INV: u16 = pow_mod(GENERATOR_INV, GENERATOR_ORDER / (2 * N as u32));

const _: () = {
    assert!(N.is_power_of_two());
    assert!(Q as usize % (2 * N) == 1);
    assert!(mul_mod(GENERATOR, GENERATOR_INV) == 1);
    assert!(mod_inv(GENERATOR) == GENERATOR_INV);
    assert!(mul_mod(N as u16, N_INV) == 1);
    assert!(GENERATOR_ORDER % (2 * N as u32) == 0);
    assert!(mul_mod(PSI, PSI_INV) == 1);
    assert!(multiplicative_order(PSI) == 2 * N as u32);
};

// ============================================================================
// Parameter Set Structure
// ============================================================================

/// Parameter set for a negacyclic NTT over Z_q[X]/(X^n + 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NttParams {
    /// Ring dimension n (power of two)
    pub n: usize,
    /// Prime modulus q
    pub q: u16,
    /// Generator g of a subgroup containing the 2n-th roots of unity
    pub generator: u16,
    /// g⁻¹ mod q
    pub generator_inv: u16,
    /// n⁻¹ mod q
    pub n_inv: u16,
    /// Human-readable name
    pub name: &'static str,
}

/// Parameters of the HVC small ring
pub const HVC: NttParams = NttParams {
    n: N,
    q: Q,
    generator: GENERATOR,
    generator_inv: GENERATOR_INV,
    n_inv: N_INV,
    name: "HVC",
};

impl NttParams {
    /// Check whether q ≡ 1 (mod 2n), the condition for a direct negacyclic NTT.
    pub fn supports_direct_ntt(&self) -> bool {
        self.q as usize % (2 * self.n) == 1
    }

    /// Verify that ψ is a primitive 2n-th root of unity: ψ^{2n} = 1, ψ^n = -1.
    pub fn verify_primitive_root(&self, psi: u16) -> bool {
        let n = self.n as u32;
        pow_mod(psi, 2 * n) == 1 && pow_mod(psi, n) == self.q - 1
    }

    /// ψ derived from the generator: g^{ord(g) / 2n}
    pub fn psi(&self) -> u16 {
        pow_mod(self.generator, multiplicative_order(self.generator) / (2 * self.n as u32))
    }

    /// ψ⁻¹ derived from g⁻¹
    pub fn psi_inv(&self) -> u16 {
        pow_mod(self.generator_inv, multiplicative_order(self.generator) / (2 * self.n as u32))
    }

    /// Check the inverse constants: g·g⁻¹ ≡ 1 and n·n⁻¹ ≡ 1 (mod q).
    pub fn verify_inverses(&self) -> bool {
        mul_mod(self.generator, self.generator_inv) == 1
            && mul_mod(self.n as u16 % self.q, self.n_inv) == 1
    }
}

/// Find the smallest primitive 2n-th root of unity mod q.
///
/// Returns ψ with ψ^{2n} = 1 and ψ^n = -1, or None if q ≢ 1 (mod 2n).
pub fn find_primitive_2d_root(n: usize) -> Option<u16> {
    let two_n = 2 * n as u32;
    if (Q as u32 - 1) % two_n != 0 {
        return None;
    }
    let exp = (Q as u32 - 1) / two_n;

    (2..Q)
        .map(|g| pow_mod(g, exp))
        .find(|&psi| pow_mod(psi, two_n) == 1 && pow_mod(psi, n as u32) == Q - 1)
}

// ============================================================================
// Tests
// ============================================================================
