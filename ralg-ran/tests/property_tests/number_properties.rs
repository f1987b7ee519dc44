//! Property-based tests for refinement and ordering of algebraic numbers

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::interval::IsolatingInterval;
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::sign::Sign;
use ralg_ran::{AlgebraicNumber, IntervalRoot};
use std::cmp::Ordering;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn is_square(n: i64) -> bool {
    (0..=n).any(|k| k * k == n)
}

/// The positive square root of `n`, isolated loosely by `(0, n + 1)`.
fn sqrt_root(n: i64) -> IntervalRoot {
    let p = UnivariatePolynomial::from_coeffs_int(&[-n, 0, 1]);
    IntervalRoot::from_bounds(&p, rat(0), rat(n + 1)).expect("isolating interval")
}

proptest! {
    #[test]
    fn refine_shrinks_and_keeps_root(n in 2i64..60, steps in 1usize..12) {
        prop_assume!(!is_square(n));
        let mut root = sqrt_root(n);
        for _ in 0..steps {
            let before = root.interval().width();
            root.refine();
            prop_assert!(root.interval().width() < before);
            prop_assert!(!root.polynomial().is_root(root.lower()));
            prop_assert!(!root.polynomial().is_root(root.upper()));
            prop_assert_eq!(root.polynomial().count_roots_open(root.lower(), root.upper()), 1);
        }
        prop_assert_eq!(root.refinement_count(), steps);
    }

    #[test]
    fn refine_avoiding_detects_the_root(n in 1i64..40, num in 0i64..60, den in 1i64..8) {
        let r = BigRational::new(BigInt::from(num), BigInt::from(den));
        let mut root = sqrt_root(n);
        let is_root = &r * &r == rat(n);
        prop_assert_eq!(root.refine_avoiding(&r), is_root);
        if is_root {
            prop_assert_eq!(root.exact_value(), Some(&r));
        } else if root.interval().is_point() {
            prop_assert!(root.lower() != &r);
        } else {
            prop_assert!(!root.interval().meets(&r));
        }
    }

    #[test]
    fn rational_round_trip(num in -1000i64..1000, den in 1i64..100) {
        let r = BigRational::new(BigInt::from(num), BigInt::from(den));
        let n = AlgebraicNumber::from_rational(r.clone());
        prop_assert!(n.is_numeric());
        prop_assert_eq!(n.value(), r.clone());
        prop_assert_eq!(n.sign(), Sign::of(&r));
        prop_assert_eq!(n.integer_below(), r.floor().to_integer());
    }

    #[test]
    fn ordering_matches_rationals(a in -50i64..50, b in -50i64..50, d in 1i64..6) {
        let x = BigRational::new(BigInt::from(a), BigInt::from(d));
        let y = BigRational::new(BigInt::from(b), BigInt::from(d));
        let ax = AlgebraicNumber::from(x.clone());
        let ay = AlgebraicNumber::from(y.clone());
        prop_assert_eq!(ax.cmp(&ay), x.cmp(&y));
    }

    #[test]
    fn sqrt_compares_like_its_square(n in 2i64..60, num in 0i64..80, den in 1i64..8) {
        let c = BigRational::new(BigInt::from(num), BigInt::from(den));
        let root = AlgebraicNumber::from_interval_root(sqrt_root(n));
        let expected = rat(n).cmp(&(&c * &c));
        prop_assert_eq!(root.cmp(&AlgebraicNumber::from(c.clone())), expected);

        // sign of x - c at the root agrees with the comparison
        let linear = UnivariatePolynomial::new(vec![-c, rat(1)]);
        let sign = match expected {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        };
        prop_assert_eq!(root.sign_of(&linear), sign);
    }

    #[test]
    fn equal_roots_hash_alike(n in 2i64..40, k in 1u32..3) {
        prop_assume!(!is_square(n));
        // sqrt(n) as a root of x^2 - n and of (x^2 - n)(x^2 + k)
        let q = UnivariatePolynomial::from_coeffs_int(&[-n, 0, 1]);
        let extra = &q * &UnivariatePolynomial::from_coeffs_int(&[i64::from(k), 0, 1]);
        let a = AlgebraicNumber::from_interval_root(sqrt_root(n));
        let b = AlgebraicNumber::from_polynomial(&extra, IsolatingInterval::open(rat(1), rat(n)))
            .expect("isolating interval");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.integer_below(), b.integer_below());
        prop_assert_eq!(-&a, -&b);
    }
}
