//! Property-based tests for root counting and isolation

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::interval::Interval;
use ralg_math::polynomial::root_isolation::{RootIsolator, SturmIsolator};
use ralg_math::polynomial::univariate::UnivariatePolynomial;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn from_roots(roots: &[i64]) -> UnivariatePolynomial {
    roots.iter().fold(UnivariatePolynomial::one(), |acc, r| {
        &acc * &UnivariatePolynomial::linear_root(&rat(*r))
    })
}

fn distinct(mut roots: Vec<i64>) -> Vec<i64> {
    roots.sort_unstable();
    roots.dedup();
    roots
}

proptest! {
    #[test]
    fn isolation_finds_every_root(roots in prop::collection::vec(-8i64..8, 1..5)) {
        let p = from_roots(&roots);
        let expected = distinct(roots);
        let isolated = SturmIsolator::new().isolate(&p, &Interval::unbounded());
        prop_assert_eq!(isolated.len(), expected.len());
        for (iv, r) in isolated.iter().zip(&expected) {
            prop_assert!(iv.meets(&rat(*r)));
        }
        for w in isolated.windows(2) {
            prop_assert!(w[0].upper() <= w[1].lower());
        }
    }

    #[test]
    fn open_intervals_hold_one_root(c in prop::collection::vec(-6i64..6, 2..6)) {
        let p = UnivariatePolynomial::from_coeffs_int(&c);
        prop_assume!(!p.is_constant());
        for iv in SturmIsolator::new().isolate(&p, &Interval::unbounded()) {
            if iv.is_point() {
                prop_assert!(p.is_root(iv.lower()));
            } else {
                prop_assert!(!p.is_root(iv.lower()));
                prop_assert!(!p.is_root(iv.upper()));
                prop_assert_eq!(p.count_roots_open(iv.lower(), iv.upper()), 1);
            }
        }
    }

    #[test]
    fn closed_count_matches_listing(
        roots in prop::collection::vec(-8i64..8, 1..5),
        a in -9i64..9,
        w in 0i64..9,
    ) {
        let p = from_roots(&roots);
        let b = a + w;
        let inside = distinct(roots).into_iter().filter(|r| *r >= a && *r <= b).count();
        prop_assert_eq!(p.count_roots_closed(&rat(a), &rat(b)), inside);
        prop_assert_eq!(p.count_roots_in(&Interval::closed(rat(a), rat(b))), inside);
        let isolated = SturmIsolator::new().isolate(&p, &Interval::closed(rat(a), rat(b)));
        prop_assert_eq!(isolated.len(), inside);
    }
}
