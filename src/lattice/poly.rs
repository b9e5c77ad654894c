//! Domain-typed polynomials over R_q = Z_q[X]/(X^256 + 1)
//!
//! - [`HvcPoly`]: coefficient domain, schoolbook multiplication O(n²)
//! - [`HvcNttPoly`]: evaluation (NTT) domain, pointwise multiplication O(n)
//!
//! [`HvcPoly::ntt`] and [`HvcNttPoly::inv_ntt`] move a polynomial between the
//! two domains, so the domain a buffer is in is tracked by its type. Both
//! wrappers keep every coefficient in [0, q); the only fallible entry points
//! are the constructors that accept raw coefficients.

use std::fmt;
use std::ops;

use itertools::iproduct;

use super::modular::{add_mod, center, mul_mod, neg_mod, reduce_signed, sub_mod};
use super::ntt::{check_residues, forward_transform_unchecked, inverse_transform_unchecked};
use super::params::{N, Q};
use crate::error::{NttError, Result};

// ============================================================================
// Coefficient-domain polynomial
// ============================================================================

/// Polynomial c_0 + c_1·X + ... + c_{n-1}·X^{n-1} with c_i in [0, q)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HvcPoly {
    coeffs: [u16; N],
}

impl fmt::Debug for HvcPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HvcPoly")
            .field("coeffs[..4]", &&self.coeffs[..4])
            .finish_non_exhaustive()
    }
}

impl Default for HvcPoly {
    fn default() -> Self {
        Self::zero()
    }
}

impl HvcPoly {
    /// Create from coefficients, rejecting any value ≥ q
    pub fn new(coeffs: [u16; N]) -> Result<Self> {
        check_residues(&coeffs)?;
        Ok(Self { coeffs })
    }

    /// Create from a slice of exactly n coefficients
    pub fn try_from_slice(coeffs: &[u16]) -> Result<Self> {
        let coeffs: [u16; N] = coeffs.try_into().map_err(|_| NttError::LengthMismatch {
            expected: N,
            actual: coeffs.len(),
        })?;
        Self::new(coeffs)
    }

    /// Create from signed coefficients, reducing each into [0, q)
    pub fn from_signed(coeffs: &[i64; N]) -> Self {
        Self {
            coeffs: coeffs.map(reduce_signed),
        }
    }

    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Create constant polynomial c
    pub fn constant(c: u16) -> Self {
        let mut coeffs = [0; N];
        coeffs[0] = c % Q;
        Self { coeffs }
    }

    /// Create uniformly random polynomial
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Self {
            coeffs: std::array::from_fn(|_| rng.gen_range(0..Q)),
        }
    }

    /// Create random ternary polynomial with `num_nonzero` coefficients in {-1, +1}
    pub fn random_ternary<R: rand::Rng>(rng: &mut R, num_nonzero: usize) -> Self {
        use rand::seq::index::sample;
        let mut coeffs = [0i64; N];
        for idx in sample(rng, N, num_nonzero.min(N)) {
            coeffs[idx] = if rng.gen_bool(0.5) { 1 } else { -1 };
        }
        Self::from_signed(&coeffs)
    }

    #[inline]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    #[inline]
    pub const fn into_coeffs(self) -> [u16; N] {
        self.coeffs
    }

    /// Consuming forward transform into the evaluation domain
    pub fn ntt(mut self) -> HvcNttPoly {
        forward_transform_unchecked(&mut self.coeffs);
        HvcNttPoly {
            coeffs: self.coeffs,
        }
    }
}

// ----------------------------------------------------------------------------
// Centered representation & norms
// ----------------------------------------------------------------------------

impl HvcPoly {
    /// Coefficients centered to [-(q-1)/2, (q-1)/2]
    pub fn centered(&self) -> [i16; N] {
        self.coeffs.map(center)
    }

    /// ℓ∞ norm of the centered representation
    pub fn linf_norm(&self) -> u16 {
        self.coeffs
            .iter()
            .map(|&c| center(c).unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

// ----------------------------------------------------------------------------
// Arithmetic
// ----------------------------------------------------------------------------

impl HvcPoly {
    pub fn add(&self, other: &Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| add_mod(self.coeffs[i], other.coeffs[i])),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| sub_mod(self.coeffs[i], other.coeffs[i])),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.map(neg_mod),
        }
    }

    pub fn scalar_mul(&self, scalar: u16) -> Self {
        let scalar = scalar % Q;
        Self {
            coeffs: self.coeffs.map(|c| mul_mod(c, scalar)),
        }
    }

    /// Schoolbook negacyclic multiplication: X^n ≡ -1
    pub fn mul_schoolbook(&self, other: &Self) -> Self {
        let mut result = [0u16; N];

        let self_nz = self.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);
        let other_nz = || other.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);

        for ((i, &ai), (j, &bj)) in iproduct!(self_nz, other_nz()) {
            let prod = mul_mod(ai, bj);
            if i + j < N {
                result[i + j] = add_mod(result[i + j], prod);
            } else {
                result[i + j - N] = sub_mod(result[i + j - N], prod);
            }
        }

        Self { coeffs: result }
    }

    /// Multiplication through the evaluation domain
    pub fn mul_ntt(&self, other: &Self) -> Self {
        self.ntt().pointwise_mul(&other.ntt()).inv_ntt()
    }
}

impl TryFrom<[u16; N]> for HvcPoly {
    type Error = NttError;

    fn try_from(coeffs: [u16; N]) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<'b> ops::Add<&'b HvcPoly> for &HvcPoly {
    type Output = HvcPoly;
    #[inline]
    fn add(self, rhs: &'b HvcPoly) -> HvcPoly {
        HvcPoly::add(self, rhs)
    }
}

impl<'b> ops::Sub<&'b HvcPoly> for &HvcPoly {
    type Output = HvcPoly;
    #[inline]
    fn sub(self, rhs: &'b HvcPoly) -> HvcPoly {
        HvcPoly::sub(self, rhs)
    }
}

impl ops::Neg for &HvcPoly {
    type Output = HvcPoly;
    #[inline]
    fn neg(self) -> HvcPoly {
        HvcPoly::neg(self)
    }
}

// ============================================================================
// Evaluation-domain polynomial
// ============================================================================

/// Polynomial in NTT (bit-reversed evaluation) form
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HvcNttPoly {
    coeffs: [u16; N],
}

impl fmt::Debug for HvcNttPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HvcNttPoly")
            .field("coeffs[..4]", &&self.coeffs[..4])
            .finish_non_exhaustive()
    }
}

impl Default for HvcNttPoly {
    fn default() -> Self {
        Self::zero()
    }
}

impl HvcNttPoly {
    /// Wrap values already in the evaluation domain, rejecting any ≥ q
    pub fn new(coeffs: [u16; N]) -> Result<Self> {
        check_residues(&coeffs)?;
        Ok(Self { coeffs })
    }

    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Uniformly random element; uniform in one domain is uniform in the other
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Self {
            coeffs: std::array::from_fn(|_| rng.gen_range(0..Q)),
        }
    }

    #[inline]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    /// Consuming inverse transform into the coefficient domain
    pub fn inv_ntt(mut self) -> HvcPoly {
        inverse_transform_unchecked(&mut self.coeffs);
        HvcPoly {
            coeffs: self.coeffs,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| add_mod(self.coeffs[i], other.coeffs[i])),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| sub_mod(self.coeffs[i], other.coeffs[i])),
        }
    }

    /// Pointwise product: the negacyclic product in the coefficient domain
    pub fn pointwise_mul(&self, other: &Self) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| mul_mod(self.coeffs[i], other.coeffs[i])),
        }
    }

    /// Pointwise multiply and accumulate: self += a ⊙ b
    pub fn pointwise_mul_acc(&mut self, a: &Self, b: &Self) {
        for ((r, &ai), &bi) in self.coeffs.iter_mut().zip(&a.coeffs).zip(&b.coeffs) {
            *r = add_mod(*r, mul_mod(ai, bi));
        }
    }
}

impl TryFrom<[u16; N]> for HvcNttPoly {
    type Error = NttError;

    fn try_from(coeffs: [u16; N]) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<'b> ops::Add<&'b HvcNttPoly> for &HvcNttPoly {
    type Output = HvcNttPoly;
    #[inline]
    fn add(self, rhs: &'b HvcNttPoly) -> HvcNttPoly {
        HvcNttPoly::add(self, rhs)
    }
}

impl<'b> ops::Sub<&'b HvcNttPoly> for &HvcNttPoly {
    type Output = HvcNttPoly;
    #[inline]
    fn sub(self, rhs: &'b HvcNttPoly) -> HvcNttPoly {
        HvcNttPoly::sub(self, rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn monomial(k: usize) -> HvcPoly {
        let mut coeffs = [0u16; N];
        coeffs[k] = 1;
        HvcPoly::new(coeffs).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let mut coeffs = [1u16; N];
        coeffs[9] = Q;
        assert_eq!(
            HvcPoly::new(coeffs),
            Err(NttError::InvalidResidue { index: 9, value: Q })
        );
        assert!(HvcNttPoly::try_from(coeffs).is_err());
    }

    #[test]
    fn test_try_from_slice() {
        let v: Vec<u16> = (0..N as u16).collect();
        let p = HvcPoly::try_from_slice(&v).unwrap();
        assert_eq!(p.coeffs()[255], 255);

        assert_eq!(
            HvcPoly::try_from_slice(&v[..10]),
            Err(NttError::LengthMismatch { expected: N, actual: 10 })
        );
    }

    #[test]
    fn test_add_sub_neg() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        let b = HvcPoly::random(&mut rng);

        assert_eq!(a, &(&a + &b) - &b);
        assert_eq!(HvcPoly::zero(), &a + &(-&a));
    }

    #[test]
    fn test_schoolbook_identity_and_wrap() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        assert_eq!(a, a.mul_schoolbook(&HvcPoly::constant(1)));

        // X^255 · X = -1
        let prod = monomial(N - 1).mul_schoolbook(&monomial(1));
        assert_eq!(prod, HvcPoly::constant(Q - 1));
    }

    #[test]
    fn test_ntt_mul_vs_schoolbook() {
        let mut rng = test_rng();
        for _ in 0..4 {
            let a = HvcPoly::random(&mut rng);
            let b = HvcPoly::random(&mut rng);
            assert_eq!(a.mul_ntt(&b), a.mul_schoolbook(&b));
        }
    }

    #[test]
    fn test_domain_round_trip() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        assert_eq!(a.ntt().inv_ntt(), a);

        let e = HvcNttPoly::random(&mut rng);
        assert_eq!(e.inv_ntt().ntt(), e);
    }

    #[test]
    fn test_ntt_is_additive() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        let b = HvcPoly::random(&mut rng);
        assert_eq!((&a + &b).ntt(), &a.ntt() + &b.ntt());
        assert_eq!((&a - &b).ntt(), &a.ntt() - &b.ntt());
    }

    #[test]
    fn test_pointwise_mul_acc() {
        let mut rng = test_rng();
        let (a, b, c, d) = (
            HvcNttPoly::random(&mut rng),
            HvcNttPoly::random(&mut rng),
            HvcNttPoly::random(&mut rng),
            HvcNttPoly::random(&mut rng),
        );
        let mut acc = HvcNttPoly::zero();
        acc.pointwise_mul_acc(&a, &b);
        acc.pointwise_mul_acc(&c, &d);
        assert_eq!(acc, a.pointwise_mul(&b).add(&c.pointwise_mul(&d)));
    }

    #[test]
    fn test_scalar_mul_matches_constant_mul() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        assert_eq!(a.scalar_mul(42), a.mul_schoolbook(&HvcPoly::constant(42)));
        assert_eq!(a.scalar_mul(Q + 1), a);
    }

    #[test]
    fn test_from_signed_and_centered() {
        let mut coeffs = [0i64; N];
        coeffs[..4].copy_from_slice(&[-1, -12289, 12290, 6145]);
        let p = HvcPoly::from_signed(&coeffs);
        assert_eq!(p.coeffs()[..4], [12288, 0, 1, 6145]);
        assert_eq!(p.centered()[..4], [-1, 0, 1, -6144]);
        assert_eq!(p.linf_norm(), 6144);
    }

    #[test]
    fn test_random_ternary() {
        let mut rng = test_rng();
        let p = HvcPoly::random_ternary(&mut rng, 60);
        let nonzero = p.coeffs().iter().filter(|&&c| c != 0).count();
        assert_eq!(nonzero, 60);
        assert_eq!(p.linf_norm(), 1);
    }

    #[test]
    fn test_debug_is_truncated() {
        let s = format!("{:?}", HvcPoly::constant(5));
        assert!(s.starts_with("HvcPoly"));
        assert!(s.contains("[5, 0, 0, 0]"));
    }
}
