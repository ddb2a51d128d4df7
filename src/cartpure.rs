//! Projection of Cartesian Gaussian data blocks onto the pure (real solid
//! harmonic) basis.
//!
//! The kernel applies the fixed `(n_pure(l), n_cart(l))` map for one shell
//! type to the middle axis of a row-major `(nant, ncart, npost)` block, for
//! every combination of the outer and inner indices. The tables for the
//! common shells (l <= 4) are hard-coded sparse constants; higher shells are
//! distilled once from the generated dense matrices.
//!
//! Orderings follow `harmonics`: alphabetical Cartesian components, pure
//! components m = 0, +1, -1, +2, -2, ...  For l = 1 the map is the
//! permutation (x, y, z) -> (z, x, y).

use arrayvec::ArrayVec;
use once_cell::sync::Lazy;

use crate::{dense_tf, n_cart, n_pure, shell_l, MAX_N_CART, MAX_N_PURE, MAX_SHELL};

/// One entry of a sparse transformation table: pure component `pure` picks
/// up Cartesian component `cart` with weight `coeff`.
#[derive(Clone, Copy, Debug)]
pub struct TfEl {
    pub pure: usize,
    pub cart: usize,
    pub coeff: f64,
}

const fn el(pure: usize, cart: usize, coeff: f64) -> TfEl {
    TfEl { pure, cart, coeff }
}

const CPTF0: &[TfEl] = &[el(0, 0, 1.0)];

const CPTF1: &[TfEl] = &[el(0, 2, 1.0), el(1, 0, 1.0), el(2, 1, 1.0)];

// Cartesian order: xx, xy, xz, yy, yz, zz
const CPTF2: &[TfEl] = &[
    el(0, 0, -0.5),
    el(0, 3, -0.5),
    el(0, 5, 1.0),
    el(1, 2, 1.0),
    el(2, 4, 1.0),
    el(3, 0, 0.86602540378443864676),
    el(3, 3, -0.86602540378443864676),
    el(4, 1, 1.0),
];

// Cartesian order: xxx, xxy, xxz, xyy, xyz, xzz, yyy, yyz, yzz, zzz
const CPTF3: &[TfEl] = &[
    el(0, 2, -0.67082039324993690892),
    el(0, 7, -0.67082039324993690892),
    el(0, 9, 1.0),
    el(1, 0, -0.61237243569579452455),
    el(1, 3, -0.27386127875258305673),
    el(1, 5, 1.0954451150103322269),
    el(2, 1, -0.27386127875258305673),
    el(2, 6, -0.61237243569579452455),
    el(2, 8, 1.0954451150103322269),
    el(3, 2, 0.86602540378443864676),
    el(3, 7, -0.86602540378443864676),
    el(4, 4, 1.0),
    el(5, 0, 0.79056941504209482958),
    el(5, 3, -1.0606601717798212866),
    el(6, 1, 1.0606601717798212866),
    el(6, 6, -0.79056941504209482958),
];

// Cartesian order: xxxx, xxxy, xxxz, xxyy, xxyz, xxzz, xyyy, xyyz, xyzz,
//                  xzzz, yyyy, yyyz, yyzz, yzzz, zzzz
const CPTF4: &[TfEl] = &[
    el(0, 0, 0.375),
    el(0, 3, 0.21957751641341996535),
    el(0, 5, -0.87831006565367986142),
    el(0, 10, 0.375),
    el(0, 12, -0.87831006565367986142),
    el(0, 14, 1.0),
    el(1, 2, -0.89642145700079522998),
    el(1, 7, -0.40089186286863657703),
    el(1, 9, 1.1952286093343936400),
    el(2, 4, -0.40089186286863657703),
    el(2, 11, -0.89642145700079522998),
    el(2, 13, 1.1952286093343936400),
    el(3, 0, -0.55901699437494742410),
    el(3, 5, 0.98198050606196828174),
    el(3, 10, 0.55901699437494742410),
    el(3, 12, -0.98198050606196828174),
    el(4, 1, -0.42257712736425828875),
    el(4, 6, -0.42257712736425828875),
    el(4, 8, 1.1338934190276817168),
    el(5, 2, 0.79056941504209482958),
    el(5, 7, -1.0606601717798212866),
    el(6, 4, 1.0606601717798212866),
    el(6, 11, -0.79056941504209482958),
    el(7, 0, 0.73950997288745200532),
    el(7, 3, -1.2990381056766579701),
    el(7, 10, 0.73950997288745200532),
    el(8, 1, 1.1180339887498948482),
    el(8, 6, -1.1180339887498948482),
];

static CPTF_HIGH: Lazy<Vec<Vec<TfEl>>> = Lazy::new(|| {
    (5..=MAX_SHELL)
        .map(|l| {
            dense_tf(l)
                .indexed_iter()
                .filter(|(_, c)| **c != 0.0)
                .map(|((p, c), &coeff)| el(p, c, coeff))
                .collect()
        })
        .collect()
});

pub(crate) fn shell_tf(l: usize) -> &'static [TfEl] {
    match l {
        0 => CPTF0,
        1 => CPTF1,
        2 => CPTF2,
        3 => CPTF3,
        4 => CPTF4,
        5..=MAX_SHELL => &CPTF_HIGH[l - 5],
        _ => panic!("angular momentum {l} not supported (max {MAX_SHELL})"),
    }
}

/// Transform the middle axis of `work_cart`, logically shaped
/// `(nant, n_cart(l), npost)` row-major with `npost` fastest, into
/// `work_pure`, shaped `(nant, n_pure(l), npost)`.
///
/// `shell_type` selects l through its magnitude. Both extents may be zero,
/// in which case nothing is read or written. Buffers must be at least as
/// large as the stated extents; data values are transformed unconditionally.
pub fn cart_to_pure(
    work_cart: &[f64],
    work_pure: &mut [f64],
    shell_type: i32,
    nant: usize,
    npost: usize,
) {
    let l = shell_l(shell_type);
    let tf = shell_tf(l);
    let ncart = n_cart(l);
    let npure = n_pure(l);

    debug_assert!(work_cart.len() >= nant * ncart * npost);
    debug_assert!(work_pure.len() >= nant * npure * npost);

    for a in 0..nant {
        let cart = &work_cart[a * ncart * npost..(a + 1) * ncart * npost];
        let pure = &mut work_pure[a * npure * npost..(a + 1) * npure * npost];

        for p in 0..npost {
            let mut acc = [0.0; MAX_N_PURE];

            for e in tf {
                acc[e.pure] += e.coeff * cart[e.cart * npost + p];
            }

            for (c, v) in acc[..npure].iter().enumerate() {
                pure[c * npost + p] = *v;
            }
        }
    }
}

/// Like [`cart_to_pure`], but reading and writing a single buffer. The
/// Cartesian input occupies the leading `nant * n_cart(l) * npost` elements
/// of `work`; the pure result is left in the leading
/// `nant * n_pure(l) * npost` elements, which always fit inside the
/// Cartesian footprint since `n_pure(l) <= n_cart(l)`.
pub fn cart_to_pure_inplace(
    work: &mut [f64],
    shell_type: i32,
    nant: usize,
    npost: usize,
) {
    let l = shell_l(shell_type);
    let tf = shell_tf(l);
    let ncart = n_cart(l);
    let npure = n_pure(l);

    debug_assert!(work.len() >= nant * ncart * npost);

    // Ascending a keeps every pure slab ahead of all later Cartesian slabs,
    // and within one a the writes for inner index p only ever land on
    // Cartesian elements of the same (a, p) pair, which are gathered first.
    for a in 0..nant {
        let cart_base = a * ncart * npost;
        let pure_base = a * npure * npost;

        for p in 0..npost {
            let cart: ArrayVec<f64, MAX_N_CART> =
                (0..ncart).map(|c| work[cart_base + c * npost + p]).collect();

            let mut acc = [0.0; MAX_N_PURE];

            for e in tf {
                acc[e.pure] += e.coeff * cart[e.cart];
            }

            for (c, v) in acc[..npure].iter().enumerate() {
                work[pure_base + c * npost + p] = *v;
            }
        }
    }
}
