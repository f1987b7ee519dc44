//! Norms of polynomials over simple algebraic extensions.
//!
//! For a polynomial `p` in which the variable `v` stands for a root of a
//! univariate `q`, the norm
//!
//! ```text
//! N(p) = prod_{q(b) = 0} p[v := b]
//! ```
//!
//! ranges over all complex roots of `q` and no longer mentions `v`. Every
//! real zero of `p[v := alpha]` for a real root `alpha` of `q` is a zero of
//! `N(p)`, which is how algebraic coordinates get eliminated.
//!
//! The norm is the determinant of multiplication by `p` on `Q[v]/(q)`,
//! computed with the division-free Berkowitz algorithm so that entries may be
//! polynomials in the remaining variables.

use super::univariate::UnivariatePolynomial;
use super::{Polynomial, Var};
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Norm of `p` with respect to the root `v` of `q`.
///
/// A constant `q` has no roots and gives the empty product `1`.
pub fn norm(p: &Polynomial, v: Var, q: &UnivariatePolynomial) -> Polynomial {
    let n = match q.degree() {
        Some(d) if d > 0 => d,
        _ => return Polynomial::one(),
    };
    if !p.contains_var(v) {
        return p.pow(n as u32);
    }
    let q = q.make_monic();
    if n == 1 {
        let root = -q.coeff(0);
        return p.eval_at(v, &root);
    }

    let matrix = multiplication_matrix(p, v, &q, n);
    determinant(&matrix)
}

/// Matrix of multiplication by `p` on the basis `1, v, ..., v^(n-1)` of
/// `Q[v]/(q)`, with `q` monic of degree `n`. Entry `[i][j]` is the
/// coefficient of `v^i` in `p * v^j mod q`.
fn multiplication_matrix(
    p: &Polynomial,
    v: Var,
    q: &UnivariatePolynomial,
    n: usize,
) -> Vec<Vec<Polynomial>> {
    let coeffs = p.coefficients(v);

    // v^k mod q for every power occurring in p
    let mut powers: Vec<Vec<BigRational>> = Vec::with_capacity(coeffs.len());
    let mut cur = vec![BigRational::zero(); n];
    cur[0] = BigRational::one();
    for _ in 0..coeffs.len() {
        powers.push(cur.clone());
        cur = shift_scalar(&cur, q);
    }

    let mut column: Vec<Polynomial> = (0..n)
        .map(|i| {
            coeffs
                .iter()
                .zip(&powers)
                .filter(|(_, pw)| !pw[i].is_zero())
                .fold(Polynomial::zero(), |acc, (c, pw)| {
                    Polynomial::add(&acc, &c.scale(&pw[i]))
                })
        })
        .collect();

    let mut matrix = vec![Vec::with_capacity(n); n];
    for j in 0..n {
        for (row, entry) in matrix.iter_mut().zip(&column) {
            row.push(entry.clone());
        }
        if j + 1 < n {
            column = shift_poly(&column, q);
        }
    }
    matrix
}

/// Multiply a reduced scalar vector by `v` modulo monic `q`.
fn shift_scalar(col: &[BigRational], q: &UnivariatePolynomial) -> Vec<BigRational> {
    let n = col.len();
    let top = &col[n - 1];
    (0..n)
        .map(|i| {
            let carried = top * q.coeff(i);
            if i == 0 {
                -carried
            } else {
                &col[i - 1] - carried
            }
        })
        .collect()
}

/// Multiply a reduced polynomial vector by `v` modulo monic `q`.
fn shift_poly(col: &[Polynomial], q: &UnivariatePolynomial) -> Vec<Polynomial> {
    let n = col.len();
    let top = &col[n - 1];
    (0..n)
        .map(|i| {
            let carried = top.scale(&q.coeff(i));
            if i == 0 {
                carried.neg()
            } else {
                Polynomial::sub(&col[i - 1], &carried)
            }
        })
        .collect()
}

/// Determinant of a square matrix of polynomials (Berkowitz).
///
/// The empty matrix has determinant `1`.
pub fn determinant(m: &[Vec<Polynomial>]) -> Polynomial {
    let n = m.len();
    // characteristic polynomial of the leading k x k block, highest power first
    let mut cp = vec![Polynomial::one()];

    for k in 1..=n {
        let idx = k - 1;
        let a = &m[idx][idx];
        let row = &m[idx][..idx];

        let mut toeplitz = Vec::with_capacity(k + 1);
        toeplitz.push(Polynomial::one());
        toeplitz.push(a.neg());
        let mut v: Vec<Polynomial> = (0..idx).map(|i| m[i][idx].clone()).collect();
        for step in 0..idx {
            toeplitz.push(dot(row, &v).neg());
            if step + 1 < idx {
                v = (0..idx).map(|i| dot(&m[i][..idx], &v)).collect();
            }
        }

        let next: Vec<Polynomial> = (0..=k)
            .map(|i| {
                (0..=i.min(k - 1)).fold(Polynomial::zero(), |acc, j| {
                    Polynomial::add(&acc, &Polynomial::mul(&toeplitz[i - j], &cp[j]))
                })
            })
            .collect();
        cp = next;
    }

    let constant = cp.pop().unwrap_or_else(Polynomial::one);
    if n % 2 == 1 {
        constant.neg()
    } else {
        constant
    }
}

fn dot(a: &[Polynomial], b: &[Polynomial]) -> Polynomial {
    a.iter().zip(b).fold(Polynomial::zero(), |acc, (x, y)| {
        Polynomial::add(&acc, &Polynomial::mul(x, y))
    })
}
