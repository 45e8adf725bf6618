//! Chinese remaindering: an optimistic combination step for coprime
//! moduli plus a verified facade that falls back to the general solver
//! when the moduli turn out not to be coprime after all.

use itertools::zip_eq;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::Error;
use crate::euclid::gcdex;
use crate::solve::{Solution, solve_normalized};

/// Combines residues against pairwise coprime moduli.
///
/// Returns the unique `v` in `[0, product(moduli))` with
/// `v = residues[i] (mod moduli[i])` for every `i`.
///
/// The moduli must be positive and pairwise coprime, which is not
/// checked: if they are not, the result is simply wrong for some inputs.
/// [`combine`] layers detection and recovery on top of this routine.
/// Panics if the slices differ in length.
pub fn crt_coprime(residues: &[BigInt], moduli: &[BigInt]) -> BigInt {
    let p: BigInt = moduli.iter().product();

    let mut v = BigInt::zero();
    for (u, m) in zip_eq(residues, moduli) {
        // m divides p, so this division is exact.
        let e = &p / m;
        let (s, _, _) = gcdex(&e, m);
        v += &e * (u * s).mod_floor(m);
    }

    v.mod_floor(&p)
}

/// Combines parallel moduli and residue slices into a single congruence.
///
/// The arguments are moduli first, the reverse of the pair order
/// [`crate::solve()`] takes. A negative modulus constrains the same as its
/// absolute value.
///
/// The coprime construction of [`crt_coprime`] is always run first. With
/// `verify` set, its result is checked against every input congruence, a
/// single linear pass, and on a mismatch the system is redone by the
/// general solver, so non-coprime moduli yield a correct answer (or
/// `Ok(None)` if they contradict each other) instead of a silently wrong
/// one. Checking pairwise coprimality up front would take quadratically
/// many gcds; checking the candidate catches exactly the systems where
/// the optimistic result is wrong.
///
/// Without `verify` the unchecked construction is returned as is, which
/// is only meaningful when the moduli are known to be pairwise coprime.
///
/// ```
/// use num_bigint::BigInt;
/// use congruences::combine;
///
/// let m = [99, 97, 95].map(BigInt::from);
/// let v = [49, 76, 65].map(BigInt::from);
/// let sol = combine(&m, &v, true).unwrap().unwrap();
/// assert_eq!(sol.value, BigInt::from(639985));
/// assert_eq!(sol.modulus, BigInt::from(912285));
/// ```
pub fn combine(
    moduli: &[BigInt],
    residues: &[BigInt],
    verify: bool,
) -> Result<Option<Solution>, Error> {
    let moduli = normalized_moduli(moduli, residues.len())?;

    let value = crt_coprime(residues, &moduli);
    if verify && !satisfies(&value, residues, &moduli) {
        return Ok(fall_back(residues, &moduli));
    }

    let modulus = moduli.iter().product();
    Ok(Some(Solution { value, modulus }))
}

/// Checks the shape of the system and takes the absolute value of every
/// modulus.
fn normalized_moduli(moduli: &[BigInt], residues: usize) -> Result<Vec<BigInt>, Error> {
    if moduli.len() != residues {
        return Err(Error::LengthMismatch { moduli: moduli.len(), residues });
    }
    if moduli.is_empty() {
        return Err(Error::Empty);
    }

    moduli.iter()
        .enumerate()
        .map(|(position, m)| if m.is_zero() {
            Err(Error::ZeroModulus { position })
        } else {
            Ok(m.abs())
        })
        .collect()
}

/// Checks `value` against every congruence of the system.
fn satisfies(value: &BigInt, residues: &[BigInt], moduli: &[BigInt]) -> bool {
    zip_eq(residues, moduli).all(|(u, m)| u.mod_floor(m) == value.mod_floor(m))
}

/// Redoes a system whose optimistic result failed verification with the
/// general solver. The redundancy pre-pass stays off since the merge step
/// handles repeated moduli anyway.
fn fall_back(residues: &[BigInt], moduli: &[BigInt]) -> Option<Solution> {
    let pairs = residues.iter()
        .cloned()
        .zip(moduli.iter().cloned())
        .collect();
    let solution = solve_normalized(pairs, false);

    debug_assert!(
        solution.as_ref().is_none_or(|sol| satisfies(&sol.value, residues, moduli)),
        "solver result fails a congruence it was built from"
    );

    solution
}

/// Precomputed tables for combining residues against a fixed set of
/// pairwise coprime moduli.
///
/// Reconciling many residue vectors against the same periods repeats the
/// cofactor and Bezout computations of [`crt_coprime`] every time;
/// building the basis once hoists them out of the loop. Each combination
/// then costs one multiplication and reduction per modulus.
///
/// The verify-and-fall-back contract of [`combine`] holds per call, so a
/// basis over moduli that are not actually coprime still gives correct
/// answers with `verify` set, just without the speedup.
///
/// ```
/// use num_bigint::BigInt;
/// use congruences::CrtBasis;
///
/// let basis = CrtBasis::new(&[3, 5, 7].map(BigInt::from)).unwrap();
/// let sol = basis.combine(&[2, 3, 2].map(BigInt::from), true).unwrap().unwrap();
/// assert_eq!(sol.value, BigInt::from(23));
/// let sol = basis.combine(&[1, 2, 3].map(BigInt::from), true).unwrap().unwrap();
/// assert_eq!(sol.value, BigInt::from(52));
/// ```
#[derive(Clone, Debug)]
pub struct CrtBasis {
    moduli: Vec<BigInt>,
    product: BigInt,
    /// `cofactors[i] = product / moduli[i]`.
    cofactors: Vec<BigInt>,
    /// `coefficients[i] * cofactors[i] = 1 (mod moduli[i])` when the
    /// moduli are pairwise coprime.
    coefficients: Vec<BigInt>,
}

impl CrtBasis {
    /// Builds the tables for a set of moduli, validated and normalized as
    /// in [`combine`].
    pub fn new(moduli: &[BigInt]) -> Result<Self, Error> {
        let moduli = normalized_moduli(moduli, moduli.len())?;
        let product: BigInt = moduli.iter().product();

        let cofactors: Vec<BigInt> = moduli.iter()
            .map(|m| &product / m)
            .collect();
        let coefficients = zip_eq(&cofactors, &moduli)
            .map(|(e, m)| gcdex(e, m).0)
            .collect();

        Ok(Self { moduli, product, cofactors, coefficients })
    }

    /// The moduli the basis was built over, normalized to their absolute
    /// values.
    pub fn moduli(&self) -> &[BigInt] {
        &self.moduli
    }

    /// The product of the moduli.
    pub fn product(&self) -> &BigInt {
        &self.product
    }

    /// Combines one residue per modulus, with the same contract and
    /// result as the free-standing [`combine`].
    pub fn combine(
        &self,
        residues: &[BigInt],
        verify: bool,
    ) -> Result<Option<Solution>, Error> {
        if residues.len() != self.moduli.len() {
            return Err(Error::LengthMismatch {
                moduli: self.moduli.len(),
                residues: residues.len(),
            });
        }

        let mut v = BigInt::zero();
        let terms = zip_eq(residues, &self.moduli)
            .zip(zip_eq(&self.cofactors, &self.coefficients));
        for ((u, m), (e, s)) in terms {
            v += e * (u * s).mod_floor(m);
        }
        let value = v.mod_floor(&self.product);

        if verify && !satisfies(&value, residues, &self.moduli) {
            return Ok(fall_back(residues, &self.moduli));
        }

        Ok(Some(Solution { value, modulus: self.product.clone() }))
    }
}
