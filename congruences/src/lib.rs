//! Exact solving of systems of integer congruences.
//!
//! Indexing code that reasons about strided access patterns runs into
//! questions of the form: the positions `o1 + k*s1` and `o2 + j*s2`, do
//! they ever coincide, and if so, what pattern describes the common
//! positions? Each pattern is the congruence `n = o (mod s)`, so the
//! question is a small system of congruences, and it has to be answered
//! exactly. All arithmetic here is arbitrary precision, so products of
//! moduli cannot overflow no matter how many constraints are combined.
//!
//! [`solve()`] takes `(residue, modulus)` pairs and handles arbitrary
//! moduli, including repeated and non-coprime ones. [`combine()`] takes
//! parallel moduli and residue slices, optimistically runs the classical
//! Chinese remainder construction, which is only valid for pairwise
//! coprime moduli, checks the candidate in one linear pass and falls back
//! to the general solver when the check fails. [`CrtBasis`] precomputes
//! the tables of that construction for a fixed set of moduli.
//!
//! An unsatisfiable system is an ordinary outcome, reported as
//! `Ok(None)`. `Err` is reserved for inputs that do not describe a system
//! at all: zero moduli, mismatched slice lengths, empty systems.

pub mod crt;
pub mod error;
pub mod euclid;
pub mod solve;

pub use crt::{CrtBasis, combine, crt_coprime};
pub use error::Error;
pub use euclid::gcdex;
pub use solve::{Solution, solve};
