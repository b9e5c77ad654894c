//! Twiddle tables for the HVC transform
//!
//! `NTT_TABLE[k] = ψ^{rev₈(k)}` and `INV_NTT_TABLE[k] = ψ^{-rev₈(k)}`, where
//! rev₈ reverses the low 8 bits of k. Stage l of either transform (with
//! m = 2^l groups) reads the contiguous slice `[m, 2m)`, so entry 0 is never
//! read and the n − 1 live entries are laid out stage by stage.
//!
//! Both tables are evaluated at compile time.

use super::modular::{bit_reverse, pow_mod};
use super::params::{LOG_N, N, PSI, PSI_INV};

/// Forward twiddle factors, stage-indexed, bit-reversed powers of ψ
pub const NTT_TABLE: [u16; N] = build_table(PSI);

/// Inverse twiddle factors, stage-indexed, bit-reversed powers of ψ⁻¹
pub const INV_NTT_TABLE: [u16; N] = build_table(PSI_INV);

/// Build `table[k] = root^{rev(k)}` over `LOG_N` bits.
pub const fn build_table(root: u16) -> [u16; N] {
    let mut table = [0u16; N];
    let mut k = 0;
    while k < N {
        table[k] = pow_mod(root, bit_reverse(k, LOG_N) as u32);
        k += 1;
    }
    table
}

/// Twiddle slice read by the stage with `groups` butterfly groups.
///
/// `groups` must be a power of two below n.
#[inline]
pub fn stage_twiddles(table: &'static [u16; N], groups: usize) -> &'static [u16] {
    debug_assert!(groups.is_power_of_two() && groups < N);
    &table[groups..2 * groups]
}

// ============================================================================
// Tests
// ============================================================================
