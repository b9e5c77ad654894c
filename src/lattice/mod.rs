//! Ring arithmetic for the HVC small ring Z_12289[X]/(X^256 + 1)
//!
//! This module provides the negacyclic NTT and the types built on it:
//! compile-time twiddle tables, modular helpers, parameters, and
//! domain-typed polynomials with pluggable multiplication backends.

pub mod modular;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod ring_mul;
pub mod tables;

pub use modular::{add_mod, mod_inv, mul_mod, neg_mod, pow_mod, sub_mod};
pub use ntt::{
    forward_transform, forward_transform_unchecked, inverse_transform,
    inverse_transform_unchecked, Stage,
};
pub use params::{NttParams, GENERATOR, GENERATOR_INV, HVC, N, N_INV, PSI, PSI_INV, Q};
pub use poly::{HvcNttPoly, HvcPoly};
pub use ring_mul::{NttBackend, RingMulBackend, SchoolbookBackend};
pub use tables::{INV_NTT_TABLE, NTT_TABLE};
