//! Ring multiplication backends for R_q = Z_q[X]/(X^256 + 1)
//!
//! A trait-based abstraction over ring multiplication, so commitment code
//! can switch between:
//!
//! - [`SchoolbookBackend`]: O(n²), the reference negacyclic convolution
//! - [`NttBackend`]: O(n log n) through the HVC transform pair
//!
//! Both backends must agree bit for bit; the schoolbook backend exists to
//! check the NTT backend and to serve as a reference in tests and benches.

use super::poly::{HvcNttPoly, HvcPoly};

// ============================================================================
// Ring Multiplication Trait
// ============================================================================

/// Backend for multiplication in R_q.
pub trait RingMulBackend {
    /// Multiply two ring elements.
    fn ring_mul(&self, a: &HvcPoly, b: &HvcPoly) -> HvcPoly;

    /// Inner product Σ aᵢ·bᵢ of two equal-length vectors of ring elements.
    fn inner_product(&self, a: &[HvcPoly], b: &[HvcPoly]) -> HvcPoly {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(HvcPoly::zero(), |acc, (ai, bi)| acc.add(&self.ring_mul(ai, bi)))
    }
}

// ============================================================================
// Schoolbook Backend
// ============================================================================

/// Schoolbook O(n²) multiplication.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchoolbookBackend;

impl RingMulBackend for SchoolbookBackend {
    fn ring_mul(&self, a: &HvcPoly, b: &HvcPoly) -> HvcPoly {
        a.mul_schoolbook(b)
    }
}

// ============================================================================
// NTT Backend
// ============================================================================

/// NTT-based O(n log n) multiplication over the compile-time twiddle tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct NttBackend;

impl NttBackend {
    /// Inner product against a vector already in the evaluation domain.
    ///
    /// This is the commitment shape t = Σ aᵢ·sᵢ with a public key aᵢ stored
    /// in NTT form: n forward transforms, one inverse.
    pub fn inner_product_ntt(&self, a: &[HvcNttPoly], s: &[HvcPoly]) -> HvcPoly {
        debug_assert_eq!(a.len(), s.len());
        let mut acc = HvcNttPoly::zero();
        for (ai, si) in a.iter().zip(s) {
            acc.pointwise_mul_acc(ai, &si.ntt());
        }
        acc.inv_ntt()
    }
}

impl RingMulBackend for NttBackend {
    fn ring_mul(&self, a: &HvcPoly, b: &HvcPoly) -> HvcPoly {
        a.mul_ntt(b)
    }

    fn inner_product(&self, a: &[HvcPoly], b: &[HvcPoly]) -> HvcPoly {
        let a_ntt: Vec<HvcNttPoly> = a.iter().map(|ai| ai.ntt()).collect();
        self.inner_product_ntt(&a_ntt, b)
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
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn schoolbook_backend() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        let b = HvcPoly::random(&mut rng);

        assert_eq!(SchoolbookBackend.ring_mul(&a, &b), a.mul_schoolbook(&b));
    }

    #[test]
    fn ntt_vs_schoolbook_agree() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        let b = HvcPoly::random(&mut rng);

        assert_eq!(
            NttBackend.ring_mul(&a, &b),
            SchoolbookBackend.ring_mul(&a, &b)
        );
    }

    #[test]
    fn inner_product_agree() {
        let mut rng = test_rng();
        let a: Vec<HvcPoly> = (0..4).map(|_| HvcPoly::random(&mut rng)).collect();
        let s: Vec<HvcPoly> = (0..4)
            .map(|_| HvcPoly::random_ternary(&mut rng, 32))
            .collect();

        assert_eq!(
            NttBackend.inner_product(&a, &s),
            SchoolbookBackend.inner_product(&a, &s)
        );
    }

    #[test]
    fn inner_product_empty_is_zero() {
        assert_eq!(NttBackend.inner_product(&[], &[]), HvcPoly::zero());
        assert_eq!(SchoolbookBackend.inner_product(&[], &[]), HvcPoly::zero());
    }

    #[test]
    fn backends_as_trait_objects() {
        let mut rng = test_rng();
        let a = HvcPoly::random(&mut rng);
        let one = HvcPoly::constant(1);
        let backends: [&dyn RingMulBackend; 2] = [&SchoolbookBackend, &NttBackend];
        for backend in backends {
            assert_eq!(backend.ring_mul(&a, &one), a);
        }
    }
}
