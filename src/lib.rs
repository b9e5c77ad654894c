//! # hvc-ntt
//!
//! Number-Theoretic Transform for the small ring of a lattice-based
//! homomorphic vector commitment: R_q = Z_q[X]/(X^256 + 1) with q = 12289.
//!
//! - **Transforms**: in-place forward and inverse NTT on `[u16; 256]`
//! - **Twiddle tables**: stage-indexed, bit-reversed root powers built at
//!   compile time
//! - **Polynomials**: coefficient- and evaluation-domain types with
//!   schoolbook and NTT multiplication backends
//!
//! ## Modules
//!
//! - [`lattice`]: transforms, tables, parameters and ring arithmetic
//! - [`error`]: the input-contract error type
//!
//! ## Example
//! ```
//! use hvc_ntt::{forward_transform, inverse_transform, N};
//!
//! let mut p = [0u16; N];
//! p[0] = 1;
//! forward_transform(&mut p).unwrap();
//! assert_eq!(p, [1u16; N]);
//! inverse_transform(&mut p).unwrap();
//! assert_eq!(p[0], 1);
//! ```

pub mod error;
pub mod lattice;

// Re-export commonly used items
pub use error::{NttError, Result};
pub use lattice::{
    forward_transform, inverse_transform, HvcNttPoly, HvcPoly, NttBackend, RingMulBackend,
    SchoolbookBackend, N, Q,
};
