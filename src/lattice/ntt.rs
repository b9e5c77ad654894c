//! Negacyclic NTT over R_q = Z_q[X]/(X^256 + 1), q = 12289
//!
//! This module provides the in-place transform pair used by every
//! polynomial multiplication in the HVC commitment scheme:
//!
//! - [`forward_transform`]: coefficient domain → evaluation (NTT) domain
//! - [`inverse_transform`]: evaluation domain → coefficient domain
//!
//! # Mathematical Background
//!
//! With ψ a primitive 2n-th root of unity, the forward transform evaluates
//! a(X) at the n roots ψ^{2j+1} of X^n + 1, so pointwise products in the
//! evaluation domain are negacyclic convolutions in the coefficient domain.
//! No pre-twist by powers of ψ is needed: the odd powers are folded into the
//! stage-indexed twiddle tables (see [`super::tables`]).
//!
//! The forward direction is a Cooley–Tukey network (multiply the high
//! operand, then combine); the inverse is a Gentleman–Sande network (combine,
//! then multiply the difference) followed by a scaling by n⁻¹. Output of the
//! forward transform is in bit-reversed order, which is exactly the order the
//! inverse consumes, so no explicit permutation pass exists.
//!
//! # Input Contract
//!
//! Every coefficient must lie in [0, q). The checked entry points verify this
//! up front and return [`NttError::InvalidResidue`] without touching the
//! buffer; the `_unchecked` variants only `debug_assert!` it.

use super::modular::{add_mod, mul_mod, sub_mod};
use super::params::{LOG_N, N, N_INV, Q};
use super::tables::{stage_twiddles, INV_NTT_TABLE, NTT_TABLE};
use crate::error::{NttError, Result};

// ============================================================================
// Stage Descriptors
// ============================================================================

/// One butterfly layer of the transform network.
///
/// The buffer splits into `twiddles.len()` contiguous blocks of
/// `2 * distance` coefficients; block i pairs position j with j + distance
/// and uses `twiddles[i]` for every pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    /// Twiddle factor per group
    pub twiddles: &'static [u16],
    /// Distance between the two operands of a butterfly
    pub distance: usize,
}

impl Stage {
    /// Number of butterfly groups in this layer
    #[inline]
    pub fn groups(&self) -> usize {
        self.twiddles.len()
    }

    /// Length of the block each group covers
    #[inline]
    pub fn block_len(&self) -> usize {
        2 * self.distance
    }
}

/// Forward layers: 1, 2, ..., n/2 groups at distance n/2, ..., 1.
pub fn forward_stages() -> impl Iterator<Item = Stage> {
    (0..LOG_N).map(|l| Stage {
        twiddles: stage_twiddles(&NTT_TABLE, 1 << l),
        distance: N >> (l + 1),
    })
}

/// Inverse layers: n/2, ..., 2, 1 groups at distance 1, ..., n/2.
pub fn inverse_stages() -> impl Iterator<Item = Stage> {
    (0..LOG_N).rev().map(|l| Stage {
        twiddles: stage_twiddles(&INV_NTT_TABLE, 1 << l),
        distance: N >> (l + 1),
    })
}

// ============================================================================
// Butterflies
// ============================================================================

/// Cooley–Tukey butterfly: (u, v) → (u + s·v, u − s·v)
#[inline(always)]
fn ct_butterfly(u: &mut u16, v: &mut u16, s: u16) {
    let t = mul_mod(*v, s);
    (*u, *v) = (add_mod(*u, t), sub_mod(*u, t));
}

/// Gentleman–Sande butterfly: (u, v) → (u + v, (u − v)·s)
#[inline(always)]
fn gs_butterfly(u: &mut u16, v: &mut u16, s: u16) {
    let sum = add_mod(*u, *v);
    let diff = mul_mod(sub_mod(*u, *v), s);
    (*u, *v) = (sum, diff);
}

// ============================================================================
// Transforms
// ============================================================================

/// Check that every coefficient lies in [0, q).
pub fn check_residues(p: &[u16]) -> Result<()> {
    match p.iter().position(|&c| c >= Q) {
        Some(index) => Err(NttError::InvalidResidue {
            index,
            value: p[index],
        }),
        None => Ok(()),
    }
}

/// Forward NTT (in-place): coefficient domain → evaluation domain.
///
/// Fails with [`NttError::InvalidResidue`] if any input is ≥ q, in which case
/// the buffer is left unmodified.
pub fn forward_transform(p: &mut [u16; N]) -> Result<()> {
    check_residues(p)?;
    forward_transform_unchecked(p);
    Ok(())
}

/// Inverse NTT (in-place): evaluation domain → coefficient domain.
///
/// Fails with [`NttError::InvalidResidue`] if any input is ≥ q, in which case
/// the buffer is left unmodified.
pub fn inverse_transform(p: &mut [u16; N]) -> Result<()> {
    check_residues(p)?;
    inverse_transform_unchecked(p);
    Ok(())
}

/// Forward NTT without the range check.
///
/// Caller must guarantee every coefficient is below q.
pub fn forward_transform_unchecked(p: &mut [u16; N]) {
    debug_assert!(check_residues(p).is_ok());

    for stage in forward_stages() {
        for (block, &s) in p.chunks_exact_mut(stage.block_len()).zip(stage.twiddles) {
            let (lo, hi) = block.split_at_mut(stage.distance);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                ct_butterfly(u, v, s);
            }
        }
    }
}

/// Inverse NTT without the range check, including the final n⁻¹ scaling.
///
/// Caller must guarantee every coefficient is below q.
pub fn inverse_transform_unchecked(p: &mut [u16; N]) {
    debug_assert!(check_residues(p).is_ok());

    for stage in inverse_stages() {
        for (block, &s) in p.chunks_exact_mut(stage.block_len()).zip(stage.twiddles) {
            let (lo, hi) = block.split_at_mut(stage.distance);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                gs_butterfly(u, v, s);
            }
        }
    }

    for c in p.iter_mut() {
        *c = mul_mod(*c, N_INV);
    }
}

// ============================================================================
// Tests
// ============================================================================
