/// Returns floor(log_2(value)); requires value != 0.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn floor_log2(value: u64) -> u32 {
    debug_assert!(value != 0);
    63 - value.leading_zeros()
}

/// Returns floor(log_2(5^e)); requires 0 <= e <= 3528.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn log2_pow5(e: i32) -> i32 {
    // This approximation works up to the point that the multiplication
    // overflows at e = 3529.
    debug_assert!(e >= 0);
    debug_assert!(e <= 3528);
    ((e as u32 * 1_217_359) >> 19) as i32
}

/// Returns the number of bits of 5^e, i.e. e == 0 ? 1 : ceil(log_2(5^e));
/// requires 0 <= e <= 3528.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn pow5bits(e: i32) -> i32 {
    log2_pow5(e) + 1
}

/// Returns e == 0 ? 1 : ceil(log_2(5^e)); requires 0 <= e <= 3528.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn ceil_log2_pow5(e: i32) -> i32 {
    log2_pow5(e) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_log2() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(1 << 40), 40);
        assert_eq!(floor_log2(u64::max_value()), 63);
    }

    #[test]
    fn test_log2_pow5() {
        // 5^0 = 1, 5^1 = 5, 5^2 = 25, 5^10 = 9765625
        assert_eq!(log2_pow5(0), 0);
        assert_eq!(log2_pow5(1), 2);
        assert_eq!(log2_pow5(2), 4);
        assert_eq!(log2_pow5(10), 23);
        assert_eq!(ceil_log2_pow5(1), 3);
        assert_eq!(pow5bits(10), 24);
    }

    #[test]
    fn test_pow5bits_matches_bit_length() {
        let mut pow: u128 = 1;
        for e in 0..55 {
            let bits = 128 - pow.leading_zeros() as i32;
            assert_eq!(pow5bits(e), bits, "e = {}", e);
            pow *= 5;
        }
    }
}
