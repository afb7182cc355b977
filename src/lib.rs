//! Bit Sequences
//!
//! A minimal library for working with variable-length bit vectors.
//!
//! # Endianness
//!
//! [`BitVector`] stores its bits in little-endian order: index 0 is the
//! least-significant bit and higher indices hold more-significant bits. The
//! canonical textual form shown by [`Display`](std::fmt::Display) (and
//! accepted by [`BitVector::from_bitstring`]) is the reverse of that: it
//! follows conventional binary-string notation with the most-significant
//! digit first.
//!
//! Byte and hex conversion use the most-significant-bit-first convention on
//! both sides, so `from_bytes`/`to_bytes` round-trip and the first byte of
//! the output is the most significant.
//!
//! # Value semantics
//!
//! Comparisons interpret a vector as an unsigned binary integer and ignore
//! high-order zero bits, so vectors of different stored lengths can be
//! equal. The stored length is reported by [`BitVector::len`] and is never
//! zero: the integer zero is represented by the single-bit vector `"0"`.

mod bit;
mod error;
mod parts;
mod vector;

pub use bit::*;
pub use error::*;
pub use parts::*;
pub use vector::*;
