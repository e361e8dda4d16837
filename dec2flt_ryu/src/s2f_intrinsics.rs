//! 32-bit arithmetic path, used for the binary32 format.
//!
//! There is no separate float table: the upper 64 bits of each 125-bit
//! double table entry are a correctly-truncated 61-bit multiplier for
//! the same power of 5.

#[cfg(not(feature = "small"))]
use crate::s2d_full_table::{DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT};
use crate::s2d_intrinsics::{DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT};
#[cfg(feature = "small")]
use crate::s2d_small_table::{compute_inv_pow5, compute_pow5};

pub const FLOAT_POW5_BITCOUNT: i32 = DOUBLE_POW5_BITCOUNT - 64;
pub const FLOAT_POW5_INV_BITCOUNT: i32 = DOUBLE_POW5_INV_BITCOUNT - 64;

/// floor((m * factor) / 2^shift) for a 64-bit factor; requires shift > 32
/// and a result that fits in 32 bits.
fn mul_shift_32(m: u32, factor: u64, shift: i32) -> u32 {
    debug_assert!(shift > 32);
    let factor_lo = factor as u32;
    let factor_hi = (factor >> 32) as u32;
    let bits0 = m as u64 * factor_lo as u64;
    let bits1 = m as u64 * factor_hi as u64;
    let sum = (bits0 >> 32) + bits1;
    let shifted_sum = sum >> (shift - 32);
    debug_assert!(shifted_sum <= u32::max_value() as u64);
    shifted_sum as u32
}

#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn mul_float_pow5_div_pow2(m: u32, i: u32, shift: i32) -> u32 {
    #[cfg(feature = "small")]
    let factor = compute_pow5(i).1;
    #[cfg(not(feature = "small"))]
    let factor = {
        debug_assert!((i as usize) < DOUBLE_POW5_SPLIT.len());
        unsafe { DOUBLE_POW5_SPLIT.get_unchecked(i as usize).1 }
    };
    mul_shift_32(m, factor, shift)
}

#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn mul_float_pow5_inv_div_pow2(m: u32, q: u32, shift: i32) -> u32 {
    // The inverse multipliers are defined as [2^x / 5^y] + 1; the upper
    // 64 bits of the table entry are the correct bits for [2^x / 5^y], so
    // we have to add 1 here. Note that we rely on the fact that the added
    // 1 that's already stored in the table never overflows into the upper
    // 64 bits.
    #[cfg(feature = "small")]
    let factor = compute_inv_pow5(q).1 + 1;
    #[cfg(not(feature = "small"))]
    let factor = {
        debug_assert!((q as usize) < DOUBLE_POW5_INV_SPLIT.len());
        unsafe { DOUBLE_POW5_INV_SPLIT.get_unchecked(q as usize).1 + 1 }
    };
    mul_shift_32(m, factor, shift)
}

fn pow5_factor_32(mut value: u32) -> u32 {
    let mut count = 0u32;
    loop {
        debug_assert!(value != 0);
        let q = value / 5;
        let r = value % 5;
        if r != 0 {
            break;
        }
        value = q;
        count += 1;
    }
    count
}

/// Returns true if value is divisible by 5^p.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn multiple_of_power_of_5_32(value: u32, p: u32) -> bool {
    pow5_factor_32(value) >= p
}

/// Returns true if value is divisible by 2^p; requires value != 0, p < 32.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn multiple_of_power_of_2_32(value: u32, p: u32) -> bool {
    debug_assert!(value != 0);
    debug_assert!(p < 32);
    (value & ((1u32 << p) - 1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow5_factor_32() {
        assert_eq!(pow5_factor_32(1), 0);
        assert_eq!(pow5_factor_32(5), 1);
        assert_eq!(pow5_factor_32(1_953_125), 9); // 5^9
        assert_eq!(pow5_factor_32(6), 0);
    }

    #[test]
    fn test_mul_shift_32() {
        assert_eq!(mul_shift_32(1, 1 << 60, 60), 1);
        assert_eq!(mul_shift_32(9, 5 << 58, 58), 45);
    }

    #[test]
    fn test_mul_float_pow5_div_pow2() {
        // Upper limb of entry 0 is 2^60
        assert_eq!(mul_float_pow5_div_pow2(123, 0, 60), 123);
        // Entry 1's upper limb is 5 * 2^58
        assert_eq!(mul_float_pow5_div_pow2(7, 1, 58), 35);
    }

    #[test]
    fn test_mul_float_pow5_inv_div_pow2() {
        // Upper limb + 1 approximates 2^63 / 5 at 61 bits
        assert_eq!(mul_float_pow5_inv_div_pow2(35, 1, 63), 7);
        assert_eq!(mul_float_pow5_inv_div_pow2(36, 1, 63), 7);
    }
}
