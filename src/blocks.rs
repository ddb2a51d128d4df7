use itertools::iproduct;
use ndarray::prelude::*;
use rayon::prelude::*;

use crate::{
    cart_to_pure, dense_tf, is_pure, n_cart, n_pure, shell_l, shell_nbasis,
};

/// Transform the middle axis of one logical `(nant, n_cart(l), npost)` block.
pub fn cart_to_pure_block(block: ArrayView3<f64>, shell_type: i32) -> Array3<f64> {
    let l = shell_l(shell_type);
    let (nant, ncart, npost) = block.dim();
    assert_eq!(ncart, n_cart(l));

    let block_std = block.as_standard_layout();
    let cart = block_std.as_slice_memory_order().unwrap();

    let mut out = Array3::zeros((nant, n_pure(l), npost));

    cart_to_pure(cart, out.as_slice_mut().unwrap(), shell_type, nant, npost);

    out
}

fn split_shell_blocks<'a>(
    mut mat: ArrayViewMut2<'a, f64>,
    sizes: &[usize],
) -> Vec<ArrayViewMut2<'a, f64>> {
    let mut parts = Vec::new();

    for &n1 in sizes {
        let (mut top, rest) = mat.split_at(Axis(0), n1);
        mat = rest;

        for &n2 in sizes {
            let (chunk, right) = top.split_at(Axis(1), n2);
            top = right;

            parts.push(chunk);
        }
    }

    parts
}

/// Transform both axes of a shell-blocked square matrix given in the
/// Cartesian representation of every shell (overlap or density blocks).
/// Shells with a negative shell type are projected onto their pure
/// components; Cartesian shells pass through unchanged. Shell pairs are
/// independent and processed in parallel.
pub fn cart_to_pure_mat(mat: ArrayView2<f64>, shell_types: &[i32]) -> Array2<f64> {
    let n_sh = shell_types.len();

    let cart_sizes: Vec<_> =
        shell_types.iter().map(|&st| n_cart(shell_l(st))).collect();
    let out_sizes: Vec<_> = shell_types.iter().map(|&st| shell_nbasis(st)).collect();

    let n_in: usize = cart_sizes.iter().sum();
    let n_out: usize = out_sizes.iter().sum();
    assert_eq!(mat.dim(), (n_in, n_in));

    let mut cart_offs = Vec::with_capacity(n_sh);
    let mut off = 0;
    for &n in &cart_sizes {
        cart_offs.push(off);
        off += n;
    }

    let mut out = Array2::zeros((n_out, n_out));

    let mut chunks: Vec<_> = iproduct!(0..n_sh, 0..n_sh)
        .zip(split_shell_blocks(out.view_mut(), &out_sizes))
        .collect();

    chunks.par_iter_mut().for_each(|((i, j), chunk)| {
        let block = mat.slice(s![
            cart_offs[*i]..cart_offs[*i] + cart_sizes[*i],
            cart_offs[*j]..cart_offs[*j] + cart_sizes[*j]
        ]);

        let left = if is_pure(shell_types[*i]) {
            dense_tf(shell_l(shell_types[*i])).dot(&block)
        } else {
            block.to_owned()
        };

        let res = if is_pure(shell_types[*j]) {
            left.dot(&dense_tf(shell_l(shell_types[*j])).t())
        } else {
            left
        };

        chunk.assign(&res);
    });

    out
}
