//! Real root isolation for univariate polynomials.
//!
//! [`RootIsolator`] is the oracle used by the real algebraic number kernel to
//! turn a univariate polynomial into isolating intervals. [`SturmIsolator`]
//! implements it with Sturm sequences and bisection.

use super::univariate::{count_roots_open_with, UnivariatePolynomial};
use crate::interval::{sample_between, Interval, IsolatingInterval};
use num_rational::BigRational;
use num_traits::One;

/// Isolates the real roots of a univariate polynomial.
pub trait RootIsolator {
    /// Isolate the distinct real roots of `poly` inside the closed `interval`.
    ///
    /// The result is sorted ascending. Each entry is either an exact point or
    /// an open interval containing exactly one root and whose endpoints are
    /// not roots. The zero polynomial yields no intervals.
    fn isolate(&self, poly: &UnivariatePolynomial, interval: &Interval) -> Vec<IsolatingInterval>;
}

/// Sturm-sequence bisection isolator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SturmIsolator;

impl SturmIsolator {
    /// Create a new isolator.
    pub fn new() -> Self {
        Self
    }
}

enum Work {
    Range(BigRational, BigRational),
    Point(BigRational),
}

impl RootIsolator for SturmIsolator {
    fn isolate(&self, poly: &UnivariatePolynomial, interval: &Interval) -> Vec<IsolatingInterval> {
        if poly.is_constant() || interval.is_empty() {
            return Vec::new();
        }
        let p = poly.square_free();
        let seq = p.sturm_sequence();

        let bound = p.cauchy_bound() + BigRational::one();
        let neg_bound = -bound.clone();
        let lo = match interval.lower() {
            Some(l) if l > &neg_bound => l.clone(),
            _ => neg_bound,
        };
        let hi = match interval.upper() {
            Some(u) if u < &bound => u.clone(),
            _ => bound,
        };

        if lo > hi {
            return Vec::new();
        }
        if lo == hi {
            return if p.is_root(&lo) {
                vec![IsolatingInterval::point(lo)]
            } else {
                Vec::new()
            };
        }

        let mut roots = Vec::new();
        if p.is_root(&lo) {
            roots.push(IsolatingInterval::point(lo.clone()));
        }
        let hi_is_root = p.is_root(&hi);

        let mut stack = vec![Work::Range(lo, hi.clone())];
        while let Some(work) = stack.pop() {
            let (a, b) = match work {
                Work::Point(m) => {
                    roots.push(IsolatingInterval::point(m));
                    continue;
                }
                Work::Range(a, b) => (a, b),
            };
            match count_roots_open_with(&seq, &a, &b) {
                0 => {}
                1 => roots.push(shrink_off_roots(&p, &seq, a, b)),
                _ => {
                    let m = sample_between(&a, &b);
                    stack.push(Work::Range(m.clone(), b));
                    if p.is_root(&m) {
                        stack.push(Work::Point(m.clone()));
                    }
                    stack.push(Work::Range(a, m));
                }
            }
        }

        if hi_is_root {
            roots.push(IsolatingInterval::point(hi));
        }
        roots
    }
}

/// Narrow an interval holding exactly one root until neither end is a root.
fn shrink_off_roots(
    p: &UnivariatePolynomial,
    seq: &[UnivariatePolynomial],
    mut a: BigRational,
    mut b: BigRational,
) -> IsolatingInterval {
    while p.is_root(&a) || p.is_root(&b) {
        let m = sample_between(&a, &b);
        if p.is_root(&m) {
            return IsolatingInterval::point(m);
        }
        if count_roots_open_with(seq, &a, &m) == 1 {
            b = m;
        } else {
            a = m;
        }
    }
    IsolatingInterval::open(a, b)
}

/// Isolate over the whole real line with the default isolator.
pub fn isolate_real_roots(poly: &UnivariatePolynomial) -> Vec<IsolatingInterval> {
    SturmIsolator::new().isolate(poly, &Interval::unbounded())
}
