//! Dense, growable univariate polynomials with `i32` coefficients.
//!
//! A [`Poly`] owns a coefficient buffer indexed by exponent. Reads outside
//! the buffer yield zero, writes beyond it grow the buffer, and negative
//! exponents are clamped or ignored rather than rejected.
//!
//! ```
//! use intpoly::Poly;
//!
//! let p: Poly = "3 2 -1 1 5 0 -1 -1".parse().unwrap();
//! let q = Poly::new(1, 1);
//!
//! assert_eq!(p.to_string(), " +3x^2 -1x +5");
//! assert_eq!((&p * &q).to_string(), " +3x^3 -1x^2 +5x");
//! ```

pub mod error;
pub mod structures;
pub mod utils;

pub use error::PolyError;
pub use structures::poly::Poly;
pub use structures::text::{Formatted, Notation, TokenReader};
pub use utils::SENTINEL;
