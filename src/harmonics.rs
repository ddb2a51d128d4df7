//! Transformation coefficients between normalized Cartesian Gaussians and
//! real solid harmonic (pure) Gaussians, following Schlegel & Frisch,
//! Int. J. Quantum Chem. 54, 83 (1995), eq. (15).
//!
//! Orderings: Cartesian components are alphabetical (lx descending, then ly
//! descending, e.g. xx, xy, xz, yy, yz, zz), pure components are
//! m = 0, +1, -1, +2, -2, ... (cosine before sine).

use ndarray::prelude::*;
use once_cell::sync::Lazy;

use crate::{n_cart, n_pure, MAX_SHELL};

// Exact up to 33!, far beyond 2 * MAX_SHELL.
fn fact(n: u32) -> u128 {
    (1..=n as u128).product()
}

fn binom(n: u32, k: u32) -> u128 {
    if k > n {
        0
    } else {
        fact(n) / (fact(k) * fact(n - k))
    }
}

/// Coefficient of the normalized Cartesian Gaussian with exponents
/// `(lx, ly, lz)` in the real pure Gaussian `(l, m)`.
pub fn tf_coeff(l: u32, m: i32, lx: u32, ly: u32, lz: u32) -> f64 {
    debug_assert_eq!(lx + ly + lz, l);
    debug_assert!(m.unsigned_abs() <= l);

    let ma = m.unsigned_abs();
    let xy = lx + ly;
    if xy < ma || (xy - ma) % 2 != 0 {
        return 0.0;
    }
    let j = (xy - ma) / 2;

    let num = fact(2 * lx) * fact(2 * ly) * fact(2 * lz) * fact(l) * fact(l - ma);
    let den = fact(2 * l) * fact(lx) * fact(ly) * fact(lz) * fact(l + ma);
    let mut pre =
        (num as f64 / den as f64).sqrt() / (2f64.powi(l as i32) * fact(l) as f64);
    if ma != 0 {
        pre *= std::f64::consts::SQRT_2;
    }

    let mut total = 0.0;
    for i in j..=(l - ma) / 2 {
        let mut term =
            (binom(l, i) * binom(i, j) * (fact(2 * l - 2 * i) / fact(l - ma - 2 * i)))
                as f64;
        if i % 2 == 1 {
            term = -term;
        }

        let mut inner = 0.0;
        for k in 0..=j {
            let t = lx as i64 - 2 * k as i64;
            if t < 0 || t > ma as i64 {
                continue;
            }
            let w = (binom(j, k) * binom(ma, t as u32)) as f64;
            // ma - lx + 2k decides which of the cosine/sine combinations
            // this monomial enters, and with which sign.
            let par = ma as i64 - t;
            if m >= 0 {
                if par % 2 == 0 {
                    inner += if (par / 2) % 2 == 0 { w } else { -w };
                }
            } else if par % 2 == 1 {
                inner += if ((par - 1) / 2) % 2 == 0 { w } else { -w };
            }
        }

        total += term * inner;
    }

    pre * total
}

/// The `(lx, ly, lz)` exponent triples of a Cartesian shell in alphabetical
/// order.
pub fn cart_components(l: u32) -> impl Iterator<Item = (u32, u32, u32)> {
    (0..=l)
        .rev()
        .flat_map(move |lx| (0..=l - lx).rev().map(move |ly| (lx, ly, l - lx - ly)))
}

/// Magnetic quantum number of the pure component at index `i`.
pub fn pure_m(i: usize) -> i32 {
    let k = ((i + 1) / 2) as i32;
    if i % 2 == 1 {
        k
    } else {
        -k
    }
}

static DENSE_TF: Lazy<Vec<Array2<f64>>> = Lazy::new(|| {
    (0..=MAX_SHELL as u32)
        .map(|l| {
            let mut mat = Array2::zeros((n_pure(l as usize), n_cart(l as usize)));

            for (ic, (lx, ly, lz)) in cart_components(l).enumerate() {
                for ip in 0..n_pure(l as usize) {
                    mat[(ip, ic)] = tf_coeff(l, pure_m(ip), lx, ly, lz);
                }
            }

            mat
        })
        .collect()
});

/// The dense `(n_pure(l), n_cart(l))` transformation matrix for angular
/// momentum `l`, built once and shared for the lifetime of the process.
pub fn dense_tf(l: usize) -> &'static Array2<f64> {
    assert!(
        l <= MAX_SHELL,
        "angular momentum {l} not supported (max {MAX_SHELL})"
    );

    &DENSE_TF[l]
}
