//! The conversion pipeline: decimal lexer, decimal-to-binary core, and
//! IEEE assembler, generic over [`RawFloat`].
//!
//! A single forward scan accumulates up to `MAX_MANTISSA_DIGITS`
//! significant digits and the decimal exponent; the core rescales the
//! decimal mantissa to a binary one with one table-driven multiply or
//! divide by a power of 5 (the only inexact step, tracked by a single
//! flag); the assembler rounds to nearest, ties to even.

use crate::float::RawFloat;
use crate::{Error, Result};
use dec2flt_ryu::{ceil_log2_pow5, floor_log2, log2_pow5};

/// Special tokens recognized before the numeric pipeline runs.
pub(crate) enum Special {
    Nan,
    Inf { negative: bool },
}

pub(crate) fn parse_special(s: &[u8]) -> Option<Special> {
    if s.eq_ignore_ascii_case(b"nan") {
        Some(Special::Nan)
    } else if s.eq_ignore_ascii_case(b"inf") || s.eq_ignore_ascii_case(b"+inf") {
        Some(Special::Inf { negative: false })
    } else if s.eq_ignore_ascii_case(b"-inf") {
        Some(Special::Inf { negative: true })
    } else {
        None
    }
}

fn sign_bits<F: RawFloat>(negative: bool) -> u64 {
    (negative as u64) << (F::EXPONENT_BITS + F::MANTISSA_BITS)
}

fn infinity_bits<F: RawFloat>(negative: bool) -> u64 {
    let max_biased = (1u64 << F::EXPONENT_BITS) - 1;
    sign_bits::<F>(negative) | (max_biased << F::MANTISSA_BITS)
}

/// Canonical quiet NaN: exponent all ones, quiet bit set, payload zero.
fn nan_bits<F: RawFloat>() -> u64 {
    infinity_bits::<F>(false) | 1u64 << (F::MANTISSA_BITS - 1)
}

/// Parse `buffer` into the bit pattern of the nearest `F` value.
///
/// The entire input must match
/// `['-'|'+']? digit* ['.' digit*]? [('e'|'E') ['-'|'+']? digit+]?`;
/// a body with no mantissa digits yields signed zero.
pub(crate) fn parse_bits<F: RawFloat>(buffer: &[u8]) -> Result<u64> {
    if buffer.is_empty() {
        return Err(Error::InvalidCharacter);
    }

    let len = buffer.len();
    let mut m10: u64 = 0;
    let mut e10: i32 = 0;
    let mut m10_digits: i32 = 0;
    let mut e10_digits: i32 = 0;
    let mut seen_dot = false;
    // Fractional digits folded into m10 (each shifts e10 down by one) and
    // integer digits dropped past the digit budget (each shifts it up).
    let mut frac_digits: i32 = 0;
    let mut dropped_digits: i32 = 0;
    let mut negative = false;
    let mut exp_negative = false;

    let mut i = 0;
    if buffer[0] == b'-' || buffer[0] == b'+' {
        negative = buffer[0] == b'-';
        i += 1;
    }
    while i < len {
        let c = buffer[i];
        if c == b'.' {
            if seen_dot {
                return Err(Error::InvalidCharacter);
            }
            seen_dot = true;
            i += 1;
            continue;
        }
        if !c.is_ascii_digit() {
            break;
        }
        if m10_digits < F::MAX_MANTISSA_DIGITS {
            m10 = 10 * m10 + u64::from(c - b'0');
            // Leading zeros don't count against the digit budget
            if m10 != 0 {
                m10_digits += 1;
            }
            if seen_dot {
                frac_digits += 1;
            }
        } else if !seen_dot {
            dropped_digits += 1;
        }
        i += 1;
    }
    if i < len && (buffer[i] == b'e' || buffer[i] == b'E') {
        i += 1;
        if i < len && (buffer[i] == b'-' || buffer[i] == b'+') {
            exp_negative = buffer[i] == b'-';
            i += 1;
        }
        if i == len || !buffer[i].is_ascii_digit() {
            return Err(Error::InvalidCharacter);
        }
        while i < len {
            let c = buffer[i];
            if !c.is_ascii_digit() {
                return Err(Error::InvalidCharacter);
            }
            // Stop accumulating after five significant exponent digits.
            // The clamped magnitude (>= 10^5) is far past every format's
            // thresholds, so the early-outs below resolve it without the
            // accumulator ever overflowing. The rest of the input still
            // has to be valid digits.
            if e10_digits <= 5 {
                e10 = 10 * e10 + i32::from(c - b'0');
                if e10 != 0 {
                    e10_digits += 1;
                }
            }
            i += 1;
        }
    }
    if i < len {
        return Err(Error::InvalidCharacter);
    }

    if exp_negative {
        e10 = -e10;
    }
    e10 += dropped_digits - frac_digits;

    if m10 == 0 || m10_digits + e10 <= F::MIN_DEC_EXPONENT {
        return Ok(sign_bits::<F>(negative));
    }
    if m10_digits + e10 >= F::MAX_DEC_EXPONENT {
        return Ok(infinity_bits::<F>(negative));
    }

    // Convert m10 * 10^e10 to m2 * 2^e2. The binary exponent is chosen
    // so m2 keeps at least MANTISSA_BITS + 1 bits; the single power-of-5
    // multiply/divide below is the only step that can discard a nonzero
    // remainder, so one flag is enough to know whether m2 is exact.
    let m2: u64;
    let e2: i32;
    let mut trailing_zeros: bool;
    if e10 >= 0 {
        e2 = floor_log2(m10) as i32 + e10 + log2_pow5(e10) - (F::MANTISSA_BITS as i32 + 1);
        let j = e2 - e10 - ceil_log2_pow5(e10) + F::POW5_BITCOUNT;
        m2 = F::mul_pow5_div_pow2(m10, e10 as u32, j);
        // m10 * 5^e10 * 2^(e10-e2): inexact only when the 2^(e2-e10)
        // divisor isn't covered by m10's trailing zero bits
        trailing_zeros = e2 < e10
            || (e2 - e10 < F::BITS as i32
                && F::multiple_of_power_of_2(m10, (e2 - e10) as u32));
    } else {
        e2 = floor_log2(m10) as i32 + e10 - ceil_log2_pow5(-e10) - (F::MANTISSA_BITS as i32 + 1);
        let j = e2 - e10 + ceil_log2_pow5(-e10) - 1 + F::POW5_INV_BITCOUNT;
        m2 = F::mul_pow5_inv_div_pow2(m10, (-e10) as u32, j);
        // Dividing by 10^-e10 also needs the 5-part to divide out. The
        // 64-bit format always has e2 < e10 here; the 32-bit one does not.
        trailing_zeros = (e2 < e10
            || (e2 - e10 < F::BITS as i32
                && F::multiple_of_power_of_2(m10, (e2 - e10) as u32)))
            && F::multiple_of_power_of_5(m10, (-e10) as u32);
    }

    // Candidate biased exponent; 0 selects the subnormal encoding.
    let mut ieee_e2 = i32::max(0, e2 + F::EXPONENT_BIAS + floor_log2(m2) as i32) as u64;
    let max_biased = (1u64 << F::EXPONENT_BITS) - 1;
    if ieee_e2 > max_biased - 1 {
        return Ok(infinity_bits::<F>(negative));
    }

    // Reduce m2 to MANTISSA_BITS fractional bits; subnormals shift
    // relative to exponent basis 1 instead of the biased exponent.
    let shift = if ieee_e2 == 0 { 1 } else { ieee_e2 as i32 }
        - e2
        - F::EXPONENT_BIAS
        - F::MANTISSA_BITS as i32;
    debug_assert!(shift > 0);
    let shift = shift as u32;

    // A halfway value is a true tie only if the conversion was exact and
    // every shifted-out bit below the rounding bit is zero.
    trailing_zeros &= m2 & ((1u64 << (shift - 1)) - 1) == 0;
    let last_removed_bit = (m2 >> (shift - 1)) & 1;
    let round_up = last_removed_bit == 1 && (!trailing_zeros || (m2 >> shift) & 1 == 1);

    let mut ieee_m2 = (m2 >> shift) + u64::from(round_up);
    debug_assert!(ieee_m2 <= 1u64 << (F::MANTISSA_BITS + 1));
    ieee_m2 &= (1u64 << F::MANTISSA_BITS) - 1;
    if ieee_m2 == 0 && round_up {
        // Rounding carried out of the mantissa field. The infinity check
        // above leaves one exponent step of headroom, so this cannot
        // overflow the exponent field.
        ieee_e2 += 1;
    }
    Ok(sign_bits::<F>(negative) | (ieee_e2 << F::MANTISSA_BITS) | ieee_m2)
}

/// Full entry point for natively-computed formats: special tokens, then
/// the numeric pipeline.
pub(crate) fn parse_float<F: RawFloat>(s: &[u8]) -> Result<F> {
    let bits = match parse_special(s) {
        Some(Special::Nan) => nan_bits::<F>(),
        Some(Special::Inf { negative }) => infinity_bits::<F>(negative),
        None => parse_bits::<F>(s)?,
    };
    Ok(F::from_bits64(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits64(s: &str) -> u64 {
        parse_bits::<f64>(s.as_bytes()).unwrap()
    }

    #[test]
    fn test_invalid() {
        for s in [
            "", " ", "   1", "1 ", "1abc", "1..2", "1.2.3", "x", "+-1", "--1", "1e", "1e+",
            "1e-", "1ee4", "1e4x", "e", "in", "infinity",
        ] {
            assert_eq!(
                parse_bits::<f64>(s.as_bytes()),
                Err(Error::InvalidCharacter),
                "input {s:?}"
            );
        }
    }

    #[test]
    fn test_zero_digit_bodies() {
        // No mantissa digits at all still yields a well-defined zero
        assert_eq!(bits64("."), 0);
        assert_eq!(bits64("-"), 1 << 63);
        assert_eq!(bits64("+"), 0);
        assert_eq!(bits64("-."), 1 << 63);
        assert_eq!(bits64("e5"), 0);
        assert_eq!(bits64("-0e99"), 1 << 63);
    }

    #[test]
    fn test_leading_zeros_do_not_consume_budget() {
        // 20 leading zeros, then a full-width mantissa
        assert_eq!(
            bits64("00000000000000000000123456789.0123456789"),
            bits64("123456789.0123456789")
        );
        assert_eq!(bits64("0.00000001"), 1e-8f64.to_bits());
    }

    #[test]
    fn test_excess_digits_shift_exponent() {
        // 18 integer digits: the 18th is dropped but still scales by 10
        assert_eq!(bits64("123456789012345678"), bits64("12345678901234567e1"));
        // Dropped fractional digits don't affect the exponent
        assert_eq!(
            bits64("1.23456789012345678901234"),
            bits64("1.2345678901234567")
        );
    }

    #[test]
    fn test_exponent_clamp() {
        assert_eq!(bits64(&format!("1e{}", "9".repeat(60))), 0x7FF << 52);
        assert_eq!(bits64(&format!("1e-{}", "9".repeat(60))), 0);
        assert_eq!(bits64(&format!("-1e{}", "9".repeat(60))), (1 << 63) | (0x7FF << 52));
        // Leading exponent zeros don't defeat the clamp
        assert_eq!(bits64(&format!("0.4e00{}", "9".repeat(60))), 0x7FF << 52);
    }

    #[test]
    fn test_subnormal_boundary() {
        // Half of the smallest subnormal is the rounding boundary
        assert_eq!(bits64("2.4703282292062327e-324"), 0);
        assert_eq!(bits64("2.4703282292062328e-324"), 1);
        assert_eq!(bits64("5e-324"), 1);
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(bits64("1.7976931348623157e308"), f64::MAX.to_bits());
        assert_eq!(bits64("1.7976931348623159e308"), 0x7FF << 52);
    }

    #[test]
    fn test_nan_bits_canonical() {
        assert_eq!(nan_bits::<f64>(), 0x7FF8_0000_0000_0000);
        assert_eq!(nan_bits::<f32>(), 0x7FC0_0000);
    }

    #[test]
    fn test_float_inexact_power_of_two_part() {
        // 35021130.505 keeps 9 digits as 350211305e-1; the dropped half
        // ULP must push rounding up, not read as a tie
        let got = parse_bits::<f32>(b"35021130.505").unwrap() as u32;
        assert_eq!(got, 35021132f32.to_bits());
    }
}
