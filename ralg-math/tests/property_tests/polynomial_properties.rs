//! Property-based tests for polynomial arithmetic

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::polynomial::Polynomial;

fn coeff_strategy() -> impl Strategy<Value = i64> {
    -10i64..10i64
}

fn coeffs_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(coeff_strategy(), 1..max_len)
}

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// c0 + c1*x0 + c2*x1 + c3*x0*x1 + c4*x0^2
fn bivariate(c: &[i64; 5]) -> Polynomial {
    Polynomial::from_coeffs_int(&[
        (c[0], &[]),
        (c[1], &[(0, 1)]),
        (c[2], &[(1, 1)]),
        (c[3], &[(0, 1), (1, 1)]),
        (c[4], &[(0, 2)]),
    ])
}

fn bivariate_strategy() -> impl Strategy<Value = [i64; 5]> {
    prop::array::uniform5(coeff_strategy())
}

proptest! {
    #[test]
    fn mul_distributes_over_add(
        a in bivariate_strategy(),
        b in bivariate_strategy(),
        c in bivariate_strategy(),
    ) {
        let (p, q, r) = (bivariate(&a), bivariate(&b), bivariate(&c));
        let lhs = &p * &(&q + &r);
        let rhs = &(&p * &q) + &(&p * &r);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn sub_self_is_zero(a in bivariate_strategy()) {
        let p = bivariate(&a);
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn substitute_constant_matches_eval_at(a in bivariate_strategy(), v in coeff_strategy()) {
        let p = bivariate(&a);
        let by_subst = p.substitute(0, &Polynomial::constant(rat(v)));
        prop_assert_eq!(by_subst, p.eval_at(0, &rat(v)));
    }

    #[test]
    fn coefficients_reassemble(a in bivariate_strategy()) {
        let p = bivariate(&a);
        let mut acc = Polynomial::zero();
        for (k, c) in p.coefficients(0).iter().enumerate() {
            acc = &acc + &(c * &Polynomial::from_var_power(0, k as u32));
        }
        prop_assert_eq!(acc, p);
    }

    #[test]
    fn product_rule(a in coeffs_strategy(5), b in coeffs_strategy(5)) {
        let p = UnivariatePolynomial::from_coeffs_int(&a);
        let q = UnivariatePolynomial::from_coeffs_int(&b);
        let lhs = (&p * &q).derivative();
        let rhs = &(&p.derivative() * &q) + &(&p * &q.derivative());
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn div_rem_identity(a in coeffs_strategy(7), b in coeffs_strategy(4)) {
        let p = UnivariatePolynomial::from_coeffs_int(&a);
        let d = UnivariatePolynomial::from_coeffs_int(&b);
        prop_assume!(!d.is_zero());
        let (q, r) = p.div_rem(&d);
        prop_assert_eq!(&(&q * &d) + &r, p);
        prop_assert!(r.degree() < d.degree());
    }

    #[test]
    fn gcd_divides_both(a in coeffs_strategy(5), b in coeffs_strategy(5), c in coeffs_strategy(3)) {
        let common = UnivariatePolynomial::from_coeffs_int(&c);
        let p = &UnivariatePolynomial::from_coeffs_int(&a) * &common;
        let q = &UnivariatePolynomial::from_coeffs_int(&b) * &common;
        prop_assume!(!p.is_zero() && !q.is_zero());
        let g = p.gcd(&q);
        prop_assert!(p.exact_div(&g).is_some());
        prop_assert!(q.exact_div(&g).is_some());
        prop_assert!(g.degree() >= common.degree());
    }

    #[test]
    fn square_free_has_simple_roots(a in coeffs_strategy(4), k in 1u32..3) {
        let base = UnivariatePolynomial::from_coeffs_int(&a);
        prop_assume!(!base.is_constant());
        let mut p = base.clone();
        for _ in 0..k {
            p = &p * &base;
        }
        let sf = p.square_free();
        prop_assert!(sf.gcd(&sf.derivative()).is_constant());
        prop_assert_eq!(sf.count_real_roots(), base.count_real_roots());
    }
}
