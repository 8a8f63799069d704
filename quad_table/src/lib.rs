//! [QuadTable] is an open addressing hash table from string keys to append-only sequences of
//! occurrences.
//!
//! Every key owns exactly one slot. Inserting a key that is already present appends the value to
//! that key's sequence instead of replacing anything, so the table behaves like a multimap whose
//! values for a key are kept in insertion order.
//!
//! Slots are located with a Horner's rule digest over the first 8 characters of the key (see
//! [`hash`]) and collisions are resolved with quadratic probing (see [`probe`]). The table grows to
//! `2 * capacity + 1` slots as soon as more than half of its slots are occupied.
//!
//! Quadratic probing only visits every slot when the capacity is prime, which the growth rule does
//! not guarantee. Probing is therefore capped at `capacity + 1` steps, and running out of steps is
//! reported as [`ProbeExhausted`].
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod load_factor;
mod util;

pub mod hash;
pub mod probe;
pub mod quad_table;

pub use load_factor::LoadFactor;
pub use quad_table::{ProbeExhausted, QuadTable};

#[cfg(test)]
mod test_table;
