//! Number-to-display conversion
//!
//! Results are written back into the display, so the text must be something the
//! parser reads again (`Infinity`, `NaN`, `1e+21`). The layout follows the usual
//! shortest round-trip rules used by browser calculators:
//!
//! - up to 21 integer digits are written out in full
//! - fractions down to `1e-6` are written in fixed point
//! - everything else uses `d.ddde±x`

/// Formats a result for the display.
///
/// ```rust
/// use padcalc::core::format::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(9.0 / 0.0), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{sign}{}", layout(&digits, exponent))
}

/// Splits a positive finite value into its shortest significant digits and the
/// decimal exponent `n` such that `value = 0.digits * 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e3"
    let scientific = format!("{value:e}");
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    (digits, exp + 1)
}

fn layout(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp = n - 1;
        let exp_sign = if exp >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1000.0), "1000");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_float_noise_is_kept() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_large_numbers_switch_to_exponent_after_21_digits() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(-2e30), "-2e+30");
    }

    #[test]
    fn test_small_numbers_switch_to_exponent_below_1e_minus_6() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.25e-9), "1.25e-9");
    }

    #[test]
    fn test_formatted_output_parses_back() {
        use crate::core::evaluator::Evaluator;

        let eval = Evaluator::new();
        for value in [8.0, 0.5, 1e21, 1.25e-9, -3.75, 123456.789] {
            let text = format_number(value);
            assert_eq!(eval.evaluate_str(&text), Ok(value), "text: {text}");
        }
    }
}
