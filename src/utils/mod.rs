//! Utilities shared by the library and the binary.
//!
//! - [`primes`]: rounding a requested table size up to a prime.
//! - [`words`]: splitting an input stream into lowercase words.

pub mod primes;
pub mod words;

pub use primes::{is_prime, next_prime};
pub use words::WordReader;
