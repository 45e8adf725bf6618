//! The extended Euclidean algorithm on arbitrary precision integers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Computes `(x, y, g)` such that `x*a + y*b = g = gcd(|a|, |b|)`.
///
/// `g` is never negative. The zero cases return fixed coefficients instead
/// of leaving them unspecified, because the congruence combination step
/// relies on them: `gcdex(0, 0) = (0, 1, 0)`,
/// `gcdex(0, b) = (0, sign(b), |b|)` and `gcdex(a, 0) = (sign(a), 0, |a|)`.
///
/// ```
/// use num_bigint::BigInt;
/// use congruences::gcdex;
///
/// let (x, y, g) = gcdex(&BigInt::from(100), &BigInt::from(2004));
/// assert_eq!(x, BigInt::from(-20));
/// assert_eq!(y, BigInt::from(1));
/// assert_eq!(g, BigInt::from(4));
/// ```
pub fn gcdex(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() && b.is_zero() {
        return (BigInt::zero(), BigInt::one(), BigInt::zero());
    }
    if a.is_zero() {
        return (BigInt::zero(), b.signum(), b.abs());
    }
    if b.is_zero() {
        return (a.signum(), BigInt::zero(), a.abs());
    }

    // Run the loop on the absolute values and flip the sign of the
    // coefficient of each operand that was negative at the end.
    let x_negative = a.is_negative();
    let y_negative = b.is_negative();
    let mut a = a.abs();
    let mut b = b.abs();

    // x*a0 + y*b0 = a and r*a0 + s*b0 = b at every step, where a0 and b0
    // are the absolute values of the inputs.
    let (mut x, mut y) = (BigInt::one(), BigInt::zero());
    let (mut r, mut s) = (BigInt::zero(), BigInt::one());

    while !b.is_zero() {
        let (q, rem) = a.div_rem(&b);
        let new_r = &x - &q * &r;
        let new_s = &y - &q * &s;
        (a, b) = (b, rem);
        (x, r) = (r, new_r);
        (y, s) = (s, new_s);
    }

    if x_negative {
        x = -x;
    }
    if y_negative {
        y = -y;
    }

    (x, y, a)
}

#[cfg(test)]
mod test {
    use rand::{distr::{Distribution as _, Uniform}, rngs::StdRng, SeedableRng};

    use super::*;

    fn int(i: i64) -> BigInt {
        i.into()
    }

    #[test]
    fn zero_operands() {
        assert_eq!(gcdex(&int(0), &int(0)), (int(0), int(1), int(0)));
        assert_eq!(gcdex(&int(0), &int(7)), (int(0), int(1), int(7)));
        assert_eq!(gcdex(&int(0), &int(-7)), (int(0), int(-1), int(7)));
        assert_eq!(gcdex(&int(7), &int(0)), (int(1), int(0), int(7)));
        assert_eq!(gcdex(&int(-7), &int(0)), (int(-1), int(0), int(7)));
    }

    #[test]
    fn small_coefficients() {
        assert_eq!(gcdex(&int(2), &int(3)), (int(-1), int(1), int(1)));
        assert_eq!(gcdex(&int(10), &int(12)), (int(-1), int(1), int(2)));
        assert_eq!(gcdex(&int(100), &int(2004)), (int(-20), int(1), int(4)));
    }

    #[test]
    fn bezout_identity_random() {
        let rng = &mut StdRng::seed_from_u64(0);
        let dist = Uniform::new_inclusive(-10000, 10000).unwrap();

        for _ in 0..1000 {
            let a = int(dist.sample(rng));
            let b = int(dist.sample(rng));
            let (x, y, g) = gcdex(&a, &b);

            assert!(!g.is_negative(), "gcdex({a}, {b}) returned g = {g}");
            assert_eq!(g, a.gcd(&b), "wrong gcd for ({a}, {b})");
            assert_eq!(&x * &a + &y * &b, g, "not a Bezout identity for ({a}, {b})");
        }
    }
}
