//! Solves general systems of congruences by successive substitution.
//!
//! Nothing here assumes the moduli are coprime. Constraints are merged one
//! pair at a time: each merge divides out the common gcd and inverts what
//! remains, so repeated and overlapping moduli cost a [`gcdex`] call
//! instead of making the system unsolvable.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::Error;
use crate::euclid::gcdex;

/// A solved congruence system.
///
/// The values satisfying every input constraint are exactly
/// `value + k*modulus` for integer `k`, with `0 <= value < modulus`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub value: BigInt,
    pub modulus: BigInt,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

/// Solves a system of congruences `n = a_i (mod m_i)` given as
/// `(residue, modulus)` pairs.
///
/// The moduli need not be coprime and a negative modulus constrains the
/// same as its absolute value. Returns `Ok(None)` when the constraints
/// contradict each other, otherwise the single constraint equivalent to
/// all of them, whose modulus is the lcm of the input moduli.
///
/// `verify_redundancy` enables a pre-pass that collapses pairs sharing a
/// modulus and reports a contradiction between such pairs immediately.
/// The result is the same either way, the merge step handles repeated
/// moduli on its own.
///
/// ```
/// use num_bigint::BigInt;
/// use congruences::solve;
///
/// // What is 2 mod 3, 3 mod 5 and 2 mod 7?
/// let pairs = [(2, 3), (3, 5), (2, 7)]
///     .map(|(a, m)| (BigInt::from(a), BigInt::from(m)));
/// let sol = solve(&pairs, true).unwrap().unwrap();
/// assert_eq!(sol.value, BigInt::from(23));
/// assert_eq!(sol.modulus, BigInt::from(105));
/// ```
pub fn solve(
    pairs: &[(BigInt, BigInt)],
    verify_redundancy: bool,
) -> Result<Option<Solution>, Error> {
    let pairs = normalize(pairs)?;
    Ok(solve_normalized(pairs, verify_redundancy))
}

/// Checks the shape of the input and takes the absolute value of every
/// modulus.
fn normalize(pairs: &[(BigInt, BigInt)]) -> Result<Vec<(BigInt, BigInt)>, Error> {
    if pairs.is_empty() {
        return Err(Error::Empty);
    }

    pairs.iter()
        .enumerate()
        .map(|(position, (a, m))| if m.is_zero() {
            Err(Error::ZeroModulus { position })
        } else {
            Ok((a.clone(), m.abs()))
        })
        .collect()
}

/// Runs the solve on pairs whose moduli are already positive. The
/// verified combine in [`crate::crt`] calls this directly.
pub(crate) fn solve_normalized(
    pairs: Vec<(BigInt, BigInt)>,
    verify_redundancy: bool,
) -> Option<Solution> {
    let pairs = if verify_redundancy {
        dedup(pairs)?
    } else {
        pairs
    };

    // Fold all pairs into a single constraint, starting from the identity
    // "anything mod 1".
    let mut combined = (BigInt::zero(), BigInt::one());
    for pair in &pairs {
        combined = combine_pair(&combined, pair)?;
    }

    let (value, modulus) = combined;
    Some(Solution {
        value: value.mod_floor(&modulus),
        modulus,
    })
}

/// Collapses pairs sharing a modulus to a single representative,
/// preserving the order in which the moduli first appear.
///
/// Two pairs with the same modulus either agree once their residues are
/// reduced, making one of them redundant, or the system has no solution.
/// Inconsistencies between different moduli are left for the merge step
/// to find.
fn dedup(pairs: Vec<(BigInt, BigInt)>) -> Option<Vec<(BigInt, BigInt)>> {
    let mut uniq: Vec<(BigInt, BigInt)> = Vec::with_capacity(pairs.len());
    for (a, m) in pairs {
        let a = a.mod_floor(&m);
        match uniq.iter().position(|(_, seen)| *seen == m) {
            Some(i) => if uniq[i].0 != a {
                return None;
            },
            None => uniq.push((a, m)),
        }
    }

    Some(uniq)
}

/// Merges two constraints by the method of successive substitution.
///
/// Every solution of `n = a1 (mod m1)` has the form `a1 + j*m1`, so `j`
/// has to satisfy `m1*j = a2 - a1 (mod m2)`. Dividing out the common gcd
/// and inverting what remains of `m1` either yields the merged constraint,
/// whose modulus is `lcm(m1, m2)`, or proves the two incompatible.
fn combine_pair(
    (a1, m1): &(BigInt, BigInt),
    (a2, m2): &(BigInt, BigInt),
) -> Option<(BigInt, BigInt)> {
    let a = m1;
    let b = a2 - a1;
    let c = m2;

    let g = a.gcd(&b).gcd(c);
    let a = a / &g;
    let mut b = b / &g;
    let c = c / &g;

    if !a.is_one() {
        // j = b * a^-1 (mod c), if the inverse exists. If it does not,
        // the two constraints contradict each other.
        let (inv_a, _, g2) = gcdex(&a, &c);
        if !g2.is_one() {
            return None;
        }
        b *= inv_a;
    }

    Some((a1 + m1 * &b, m1 * c))
}

#[cfg(test)]
mod test {
    use rand::{distr::{Distribution as _, Uniform}, rngs::StdRng, SeedableRng};

    use super::*;

    fn pairs(raw: &[(i64, i64)]) -> Vec<(BigInt, BigInt)> {
        raw.iter()
            .map(|&(a, m)| (BigInt::from(a), BigInt::from(m)))
            .collect()
    }

    fn solved(raw: &[(i64, i64)], verify_redundancy: bool) -> Option<(i64, i64)> {
        solve(&pairs(raw), verify_redundancy)
            .unwrap()
            .map(|sol| (
                i64::try_from(sol.value).unwrap(),
                i64::try_from(sol.modulus).unwrap(),
            ))
    }

    #[test]
    fn coprime_chain() {
        assert_eq!(solved(&[(2, 3), (3, 5), (2, 7)], true), Some((23, 105)));
        assert_eq!(solved(&[(2, 3), (3, 5), (2, 7)], false), Some((23, 105)));
    }

    #[test]
    fn overlapping_moduli() {
        // 2 mod 3 and 4 mod 6 disagree mod 3, while 5 mod 6 agrees.
        assert_eq!(solved(&[(2, 3), (4, 6)], true), None);
        assert_eq!(solved(&[(2, 3), (4, 6)], false), None);
        assert_eq!(solved(&[(2, 3), (5, 6)], true), Some((5, 6)));
        assert_eq!(solved(&[(2, 3), (5, 6)], false), Some((5, 6)));
    }

    #[test]
    fn inconsistency_behind_redundancy() {
        // The pre-pass only compares pairs sharing a modulus, so this one
        // is found by the merge step whether or not it runs.
        assert_eq!(solved(&[(1, 3), (14, 42)], true), None);
        assert_eq!(solved(&[(1, 3), (14, 42)], false), None);
    }

    #[test]
    fn repeated_moduli() {
        assert_eq!(solved(&[(1, 3), (1, 3)], true), Some((1, 3)));
        assert_eq!(solved(&[(1, 3), (4, 3)], true), Some((1, 3)));
        assert_eq!(solved(&[(1, 3), (2, 3)], true), None);

        // Without the pre-pass the merge step resolves agreeing
        // duplicates and rejects disagreeing ones itself.
        assert_eq!(solved(&[(1, 3), (4, 3)], false), Some((1, 3)));
        assert_eq!(solved(&[(1, 3), (2, 3)], false), None);
    }

    #[test]
    fn normalizes_single_pair() {
        assert_eq!(solved(&[(-1, 3)], true), Some((2, 3)));
        assert_eq!(solved(&[(7, 3)], true), Some((1, 3)));
        assert_eq!(solved(&[(2, -3)], true), Some((2, 3)));
        assert_eq!(solved(&[(-1, -3)], false), Some((2, 3)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(solve(&[], true), Err(Error::Empty));
        assert_eq!(
            solve(&pairs(&[(1, 2), (1, 0)]), true),
            Err(Error::ZeroModulus { position: 1 })
        );
    }

    #[test]
    fn same_result_as_brute_force() {
        let rng = &mut StdRng::seed_from_u64(0);
        let len_dist = Uniform::new_inclusive(1usize, 4).unwrap();
        let modulus_dist = Uniform::new_inclusive(1i64, 12).unwrap();
        let residue_dist = Uniform::new_inclusive(-12i64, 12).unwrap();

        for _ in 0..500 {
            let len = len_dist.sample(rng);
            let raw: Vec<(i64, i64)> = (0..len)
                .map(|_| (residue_dist.sample(rng), modulus_dist.sample(rng)))
                .collect();

            // The combined modulus has to be the lcm, so scanning one
            // period decides solvability and finds the smallest solution.
            let period = raw.iter().fold(1i64, |l, &(_, m)| l.lcm(&m));
            let expected = (0..period)
                .find(|x| raw.iter().all(|&(a, m)| (x - a).rem_euclid(m) == 0))
                .map(|x| (x, period));

            assert_eq!(solved(&raw, true), expected, "system: {raw:?}");
            assert_eq!(solved(&raw, false), expected, "system: {raw:?}");
        }
    }

    #[test]
    fn solving_twice_gives_the_same_result() {
        let input = pairs(&[(2, 3), (3, 5), (2, 7)]);
        assert_eq!(solve(&input, true), solve(&input, true));
    }
}
