//! # Fixed-width bit vectors in Rust
//!
//! Fixedbit provides a single primitive, [`FixedBitVector`]: a mutable
//! container of bits whose width is fixed at construction.
//!
//! ## Design policy
//!
//! - **Keep the contract small:**
//!   One type, a handful of operations. Fixedbit is a building block, not a
//!   bit-manipulation framework.
//!
//! - **Ensure safety:**
//!   Fixedbit refrains from using unsafe instructions typically reserved for
//!   extremely low-level programming.
//!
//! - **Remain Rust-centric:**
//!   Fixedbit consistently utilizes Pure Rust in its implementation.
//!
//! ## Overview
//!
//! A vector is seeded from the binary representation of an unsigned integer
//! (truncating seed bits beyond the width) or from an iterator of booleans.
//! Individual bits are read with [`Access::access`] and mutated in place with
//! [`FixedBitVector::set_bit`] and [`FixedBitVector::clear_bit`]; the latter
//! reports [`Error::OutOfRange`] for positions outside the width. The
//! [`Display`](core::fmt::Display) impl renders the vector as a string of
//! `'0'`/`'1'` characters, most-significant bit first.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fixedbit::{Access, FixedBitVector, NumBits};
//!
//! let mut bv = FixedBitVector::from_int(32, 1)?;
//! for pos in 24..32 {
//!     bv.clear_bit(pos)?;
//! }
//!
//! assert_eq!(bv.num_bits(), 32);
//! assert_eq!(bv.num_ones(), 1);
//! assert_eq!(bv.access(0), Some(true));
//! assert_eq!(bv.to_string(), "00000000000000000000000000000001");
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]

pub mod bit_vector;
pub mod error;

pub use bit_vector::{Access, FixedBitVector, NumBits, WORD_LEN};
pub use error::{Error, Result};
