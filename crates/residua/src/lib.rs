//! # residua
//!
//! Exact modular arithmetic over the finite ring ℤ/mℤ with a runtime
//! modulus.
//!
//! This crate provides:
//! - [`ModInt`]: an immutable `(residue, modulus)` value type, generic
//!   over any primitive integer width
//! - Overflow-safe operators that try checked native arithmetic first
//!   and escalate to a wider intermediate on demand
//! - Modular inversion via the extended Euclidean algorithm, modular
//!   exponentiation with negative-exponent support, and Chinese
//!   Remainder Theorem reconstruction
//!
//! ## Example
//!
//! ```
//! use residua::{crt, ModInt};
//!
//! let x = ModInt::new(4_i64, 11)?;
//! let y = ModInt::new(8_i64, 14)?;
//! let z = crt(&[x, y])?;
//! assert_eq!(z.residue(), 92);
//! assert_eq!(z.modulus(), 154);
//! # Ok::<(), residua::ModularError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crt;
pub mod modular;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use crt::{crt, crt_pair};
pub use modular::{ModInt, ModOperand, ModularError};
pub use traits::ModularInt;
