//! Input validation at the public boundary.

use thiserror::Error;

/// A structural defect in the description of a congruence system.
///
/// These are caller bugs, reported at the public entry points instead of
/// surfacing as a panic somewhere inside the arithmetic. An unsatisfiable
/// system is not an error, it is reported as `Ok(None)` by
/// [`solve`](crate::solve()) and [`combine`](crate::combine()).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A constraint has modulus zero, which defines no congruence.
    #[error("modulus at position {position} is zero")]
    ZeroModulus { position: usize },

    /// The moduli and residue slices have different lengths.
    #[error("got {moduli} moduli but {residues} residues")]
    LengthMismatch { moduli: usize, residues: usize },

    /// The system contains no constraints at all.
    #[error("empty congruence system")]
    Empty,
}
