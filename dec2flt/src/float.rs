//! Helper trait describing the formats the pipeline computes natively.

use dec2flt_ryu as ryu;

/// Format constants and arithmetic hooks for [`crate::parse`], one impl
/// per natively-computed IEEE-754 format.
///
/// The pipeline itself works in `u64`/`i32` regardless of format; the
/// impls route multiplication and divisibility through the kernel of the
/// matching integer width, and the final bit pattern sits in the low
/// `BITS` bits of the assembled `u64`.
pub trait RawFloat: Sized + Copy {
    /// Stored mantissa width, excluding the implicit leading bit.
    const MANTISSA_BITS: u32;
    const EXPONENT_BITS: u32;
    const EXPONENT_BIAS: i32;
    /// Total format width; `MANTISSA_BITS + EXPONENT_BITS + 1 == BITS`.
    const BITS: u32;
    /// Decimal digits guaranteed to fit the mantissa accumulator.
    const MAX_MANTISSA_DIGITS: i32;
    /// `digits + exponent` at or below this always underflows to zero.
    const MIN_DEC_EXPONENT: i32;
    /// `digits + exponent` at or above this always overflows to infinity.
    const MAX_DEC_EXPONENT: i32;
    /// Bit width of the power-of-5 multipliers used by this format.
    const POW5_BITCOUNT: i32;
    const POW5_INV_BITCOUNT: i32;

    /// floor(m * 5^i / 2^j), j biased by `POW5_BITCOUNT`.
    fn mul_pow5_div_pow2(m: u64, i: u32, j: i32) -> u64;
    /// floor(m / (5^q * 2^j)), j biased by `POW5_INV_BITCOUNT`.
    fn mul_pow5_inv_div_pow2(m: u64, q: u32, j: i32) -> u64;
    /// Whether 5^p divides m.
    fn multiple_of_power_of_5(m: u64, p: u32) -> bool;
    /// Whether 2^p divides m; requires m != 0 and p < `BITS`.
    fn multiple_of_power_of_2(m: u64, p: u32) -> bool;

    /// Reinterpret an assembled bit pattern as the value.
    fn from_bits64(bits: u64) -> Self;
}

impl RawFloat for f32 {
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;
    const BITS: u32 = 32;
    const MAX_MANTISSA_DIGITS: i32 = 9;
    const MIN_DEC_EXPONENT: i32 = -46;
    const MAX_DEC_EXPONENT: i32 = 40;
    const POW5_BITCOUNT: i32 = ryu::FLOAT_POW5_BITCOUNT;
    const POW5_INV_BITCOUNT: i32 = ryu::FLOAT_POW5_INV_BITCOUNT;

    fn mul_pow5_div_pow2(m: u64, i: u32, j: i32) -> u64 {
        u64::from(ryu::mul_float_pow5_div_pow2(m as u32, i, j))
    }

    fn mul_pow5_inv_div_pow2(m: u64, q: u32, j: i32) -> u64 {
        u64::from(ryu::mul_float_pow5_inv_div_pow2(m as u32, q, j))
    }

    fn multiple_of_power_of_5(m: u64, p: u32) -> bool {
        ryu::multiple_of_power_of_5_32(m as u32, p)
    }

    fn multiple_of_power_of_2(m: u64, p: u32) -> bool {
        ryu::multiple_of_power_of_2_32(m as u32, p)
    }

    fn from_bits64(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl RawFloat for f64 {
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;
    const BITS: u32 = 64;
    const MAX_MANTISSA_DIGITS: i32 = 17;
    const MIN_DEC_EXPONENT: i32 = -324;
    const MAX_DEC_EXPONENT: i32 = 310;
    const POW5_BITCOUNT: i32 = ryu::DOUBLE_POW5_BITCOUNT;
    const POW5_INV_BITCOUNT: i32 = ryu::DOUBLE_POW5_INV_BITCOUNT;

    fn mul_pow5_div_pow2(m: u64, i: u32, j: i32) -> u64 {
        ryu::mul_pow5_div_pow2(m, i, j)
    }

    fn mul_pow5_inv_div_pow2(m: u64, q: u32, j: i32) -> u64 {
        ryu::mul_pow5_inv_div_pow2(m, q, j)
    }

    fn multiple_of_power_of_5(m: u64, p: u32) -> bool {
        ryu::multiple_of_power_of_5(m, p)
    }

    fn multiple_of_power_of_2(m: u64, p: u32) -> bool {
        ryu::multiple_of_power_of_2(m, p)
    }

    fn from_bits64(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_invariant() {
        assert_eq!(f32::MANTISSA_BITS + f32::EXPONENT_BITS + 1, f32::BITS);
        assert_eq!(f64::MANTISSA_BITS + f64::EXPONENT_BITS + 1, f64::BITS);
    }

    #[test]
    fn test_from_bits64_masks_to_width() {
        // Garbage above bit 31 must not leak into an f32
        let v = f32::from_bits64(0xFFFF_FFFF_0000_0000 | 0x3F80_0000);
        assert_eq!(v, 1.0f32);
    }
}
