//! Cut-down version of [ryu](https://crates.io/crates/ryu), keeping only
//! what the string-to-float direction needs: the 125-bit power-of-5
//! tables and the fixed-width multiply/shift, divisibility, and integer
//! logarithm routines used to convert a decimal mantissa/exponent pair
//! into a binary one.
//!
//! The 32-bit path reuses the upper limb of the 64-bit tables, so only
//! one table pair is stored.
//!
//! Part of the [dec2flt](https://crates.io/crates/dec2flt) project.

#![no_std]

mod common;
#[cfg(not(feature = "small"))]
mod s2d_full_table;
mod s2d_intrinsics;
#[cfg(feature = "small")]
mod s2d_small_table;
mod s2f_intrinsics;

pub use crate::common::{ceil_log2_pow5, floor_log2, log2_pow5, pow5bits};
pub use crate::s2d_intrinsics::{
    mul_pow5_div_pow2, mul_pow5_inv_div_pow2, multiple_of_power_of_2, multiple_of_power_of_5,
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT,
};
pub use crate::s2f_intrinsics::{
    mul_float_pow5_div_pow2, mul_float_pow5_inv_div_pow2, multiple_of_power_of_2_32,
    multiple_of_power_of_5_32, FLOAT_POW5_BITCOUNT, FLOAT_POW5_INV_BITCOUNT,
};
