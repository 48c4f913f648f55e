#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// Clamps a score into `[MIN_SCORE, MAX_SCORE]`.
///
/// `NaN` becomes `MIN_SCORE` and negative zero is normalised to `0.0`, so the
/// stored value is always a plain in-range number.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
    if clamped == 0.0 { 0.0 } else { clamped }
}

/// Parses free-form text into an in-range score, never failing.
///
/// Surrounding whitespace is ignored and the longest leading number is used,
/// so `"12abc"` reads as `12` and `"7.5.1"` as `7.5`. `Infinity` is accepted
/// (and clamps to the top of the scale). Anything without a numeric prefix
/// reads as `0`.
pub fn parse_score(raw: &str) -> f64 {
    clamp_score(leading_number(raw.trim()).unwrap_or(MIN_SCORE))
}

/// Returns the value of the longest numeric prefix of `s`, if there is one.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Number of leading ASCII digits in `bytes`
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A value that can be written into a score slot.
///
/// Text goes through [`parse_score`]; numbers are clamped directly. Either
/// way the conversion is total.
pub trait RawScore {
    /// Converts the raw input into an in-range score
    fn to_score(&self) -> f64;
}

impl RawScore for str {
    fn to_score(&self) -> f64 {
        parse_score(self)
    }
}

impl RawScore for &str {
    fn to_score(&self) -> f64 {
        parse_score(self)
    }
}

impl RawScore for String {
    fn to_score(&self) -> f64 {
        parse_score(self)
    }
}

impl RawScore for f64 {
    fn to_score(&self) -> f64 {
        clamp_score(*self)
    }
}

impl RawScore for f32 {
    fn to_score(&self) -> f64 {
        clamp_score(f64::from(*self))
    }
}

/// Integer inputs convert losslessly enough for a 0-20 scale
macro_rules! raw_score_int {
    ($($t:ty),*) => {
        $(
            impl RawScore for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_score(&self) -> f64 {
                    clamp_score(*self as f64)
                }
            }
        )*
    };
}

raw_score_int!(i32, i64, u8, u32, u64, usize);
