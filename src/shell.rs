/// Highest angular momentum with a transformation table.
pub const MAX_SHELL: usize = 9;

pub const MAX_N_CART: usize = (MAX_SHELL + 1) * (MAX_SHELL + 2) / 2;
pub const MAX_N_PURE: usize = 2 * MAX_SHELL + 1;

pub fn n_cart(l: usize) -> usize {
    (l + 1) * (l + 2) / 2
}

pub fn n_pure(l: usize) -> usize {
    2 * l + 1
}

/// Signed shell-type convention: `shell_type >= 0` is a Cartesian shell of
/// angular momentum `shell_type`, `shell_type < 0` a pure shell of angular
/// momentum `-shell_type`.
pub fn is_pure(shell_type: i32) -> bool {
    shell_type < 0
}

pub fn shell_l(shell_type: i32) -> usize {
    shell_type.unsigned_abs() as usize
}

/// Number of basis functions in a shell of the given signed type.
pub fn shell_nbasis(shell_type: i32) -> usize {
    if is_pure(shell_type) {
        n_pure(shell_l(shell_type))
    } else {
        n_cart(shell_l(shell_type))
    }
}
