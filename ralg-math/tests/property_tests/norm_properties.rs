//! Property-based tests for norms

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::polynomial::norm::norm;
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::polynomial::Polynomial;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

proptest! {
    /// N(x0 - a*x1 - b) over x1^2 = d is (x0 - b)^2 - d*a^2.
    #[test]
    fn quadratic_norm_closed_form(a in -5i64..5, b in -5i64..5, d in 2i64..7) {
        let q = UnivariatePolynomial::from_coeffs_int(&[-d, 0, 1]);
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-a, &[(1, 1)]), (-b, &[])]);
        let shifted = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-b, &[])]);
        let expected = &shifted.pow(2) - &Polynomial::constant(rat(d * a * a));
        prop_assert_eq!(norm(&p, 1, &q), expected);
    }

    /// The norm is multiplicative.
    #[test]
    fn norm_is_multiplicative(a in -4i64..4, b in -4i64..4, c in -4i64..4) {
        let q = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 0, 1]);
        let p1 = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (a, &[(1, 1)])]);
        let p2 = Polynomial::from_coeffs_int(&[(b, &[(1, 2)]), (c, &[])]);
        let lhs = norm(&(&p1 * &p2), 1, &q);
        let rhs = &norm(&p1, 1, &q) * &norm(&p2, 1, &q);
        prop_assert_eq!(lhs, rhs);
    }
}
