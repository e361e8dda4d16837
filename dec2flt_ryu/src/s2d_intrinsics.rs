//! 64-bit arithmetic path, used for the binary64 format.

#[cfg(not(feature = "small"))]
use crate::s2d_full_table::{DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT};
#[cfg(feature = "small")]
use crate::s2d_small_table::{compute_inv_pow5, compute_pow5};

pub const DOUBLE_POW5_BITCOUNT: i32 = 125;
pub const DOUBLE_POW5_INV_BITCOUNT: i32 = 125;

/// floor((m * mul) / 2^shift), where mul is a 125-bit value in two limbs
/// (lo, hi); requires shift >= 64.
fn mul_shift_64(m: u64, mul: (u64, u64), shift: i32) -> u64 {
    debug_assert!(shift >= 64);
    let b0 = m as u128 * mul.0 as u128;
    let b2 = m as u128 * mul.1 as u128;
    (((b0 >> 64) + b2) >> (shift - 64)) as u64
}

/// floor(m * 5^i / 2^(shift - DOUBLE_POW5_BITCOUNT + pow5bits(i) - 1)),
/// i.e. a multiply/shift against the normalized table entry for 5^i.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn mul_pow5_div_pow2(m: u64, i: u32, shift: i32) -> u64 {
    #[cfg(feature = "small")]
    let mul = compute_pow5(i);
    #[cfg(not(feature = "small"))]
    let mul = {
        debug_assert!((i as usize) < DOUBLE_POW5_SPLIT.len());
        unsafe { *DOUBLE_POW5_SPLIT.get_unchecked(i as usize) }
    };
    mul_shift_64(m, mul, shift)
}

/// floor(m / (5^q * 2^(...))) via the normalized reciprocal table entry.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn mul_pow5_inv_div_pow2(m: u64, q: u32, shift: i32) -> u64 {
    #[cfg(feature = "small")]
    let mul = compute_inv_pow5(q);
    #[cfg(not(feature = "small"))]
    let mul = {
        debug_assert!((q as usize) < DOUBLE_POW5_INV_SPLIT.len());
        unsafe { *DOUBLE_POW5_INV_SPLIT.get_unchecked(q as usize) }
    };
    mul_shift_64(m, mul, shift)
}

fn pow5_factor(mut value: u64) -> u32 {
    // Instead of dividing, multiply by the modular inverse of 5 and
    // compare against the largest multiple-of-5 residue.
    const M_INV_5: u64 = 14757395258967641293; // 5 * m_inv_5 = 1 (mod 2^64)
    const N_DIV_5: u64 = 3689348814741910323; // #{ n | n = 0 (mod 2^64) } / 5
    let mut count = 0u32;
    loop {
        debug_assert!(value != 0);
        value = value.wrapping_mul(M_INV_5);
        if value > N_DIV_5 {
            break;
        }
        count += 1;
    }
    count
}

/// Returns true if value is divisible by 5^p.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    // The author tried a case distinction on p, but there was no
    // performance difference.
    pow5_factor(value) >= p
}

/// Returns true if value is divisible by 2^p; requires value != 0, p < 64.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    debug_assert!(value != 0);
    debug_assert!(p < 64);
    (value & ((1u64 << p) - 1)) == 0
}
