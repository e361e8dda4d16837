//! Decimal to binary floating-point conversion with guaranteed
//! round-to-nearest, ties-to-even semantics, for the IEEE-754 binary16,
//! binary32, binary64, and binary128 formats.
//!
//! The conversion runs on fixed-width integer arithmetic against
//! precomputed power-of-5 tables (the string-to-float direction of the
//! ryu algorithm family); there is no arbitrary-precision fallback.
//! Digits beyond a format's guaranteed precision still position the
//! decimal point correctly but are otherwise truncated; this is a
//! documented accuracy limit of the algorithm, not an error.
//!
//! binary16 is computed through the full binary32 pipeline and then
//! narrowed; binary128 through the binary64 pipeline and then widened.
//! For those two formats correct rounding is guaranteed relative to the
//! intermediate native format.
//!
//! ```
//! let x: f64 = dec2flt::parse("1.234e3").unwrap();
//! assert_eq!(x, 1234.0);
//! assert!(dec2flt::parse::<f64, _>("1x").is_err());
//! ```

mod errors;
mod f128;
mod float;
mod parse;

pub use errors::{Error, Result};
pub use f128::F128;
pub use half::f16;

/// Types a decimal literal can be parsed into. See [`parse`].
pub trait ParseFloat: Sized {
    fn parse_bytes(s: &[u8]) -> Result<Self>;
}

/// Parse a decimal literal, or one of the case-insensitive special
/// tokens `nan`, `inf`, `+inf`, `-inf`, into the nearest value of `T`.
///
/// The entire input must match the grammar
/// `['-'|'+']? digit* ['.' digit*]? [('e'|'E') ['-'|'+']? digit+]?`;
/// leading or trailing whitespace is an error. Out-of-range magnitudes
/// are not errors: they produce an exact signed zero (underflow) or
/// signed infinity (overflow).
pub fn parse<T: ParseFloat, S: AsRef<[u8]>>(s: S) -> Result<T> {
    T::parse_bytes(s.as_ref())
}

impl ParseFloat for f32 {
    fn parse_bytes(s: &[u8]) -> Result<Self> {
        parse::parse_float::<f32>(s)
    }
}

impl ParseFloat for f64 {
    fn parse_bytes(s: &[u8]) -> Result<Self> {
        parse::parse_float::<f64>(s)
    }
}

impl ParseFloat for f16 {
    fn parse_bytes(s: &[u8]) -> Result<Self> {
        // binary16 has no native pipeline; compute in binary32 and narrow
        // with round-to-nearest. Specials map straight to the canonical
        // binary16 patterns.
        match parse::parse_special(s) {
            Some(parse::Special::Nan) => Ok(f16::NAN),
            Some(parse::Special::Inf { negative: false }) => Ok(f16::INFINITY),
            Some(parse::Special::Inf { negative: true }) => Ok(f16::NEG_INFINITY),
            None => Ok(f16::from_f32(parse::parse_float::<f32>(s)?)),
        }
    }
}

impl ParseFloat for F128 {
    fn parse_bytes(s: &[u8]) -> Result<Self> {
        // binary128 computes in binary64 and widens the bit pattern
        // exactly; magnitudes below the binary64 range underflow with it.
        match parse::parse_special(s) {
            Some(parse::Special::Nan) => Ok(F128::NAN),
            Some(parse::Special::Inf { negative }) => Ok(if negative {
                F128::NEG_INFINITY
            } else {
                F128::INFINITY
            }),
            None => Ok(F128::from_f64(parse::parse_float::<f64>(s)?)),
        }
    }
}
