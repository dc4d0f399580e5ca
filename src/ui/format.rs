//! Display formatting for table cells.

/// Maximum number of fractional digits shown for amounts.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a funding percentage, e.g. `186%` or `12.5%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", value)
}

/// Format a pledged amount with a dollar sign and thousands separators,
/// e.g. `$1,234,567` or `$15,823.5`.
pub fn format_amount(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Group the integer part of `value` in threes, keeping at most three
/// fractional digits with trailing zeros removed.
fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (int_part, frac_part) = round_fraction(value.abs(), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() * 4 / 3 + frac_part.len() + 2);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    out
}

/// Split a non-negative `value` into integer and fractional digits, rounded
/// half away from zero to `digits` places.
///
/// Rounding works on the shortest decimal form of the value rather than on
/// its exact binary expansion, so `1.0005` becomes `1.001`.
fn round_fraction(value: f64, digits: usize) -> (String, String) {
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= digits {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let to_string = |bytes: &[u8]| bytes.iter().map(|&b| b as char).collect::<String>();
    (to_string(&kept[..split]), to_string(&kept[split..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(186.0), "186%");
        assert_eq!(format_percentage(12.5), "12.5%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.0), "$1,234,567");
        assert_eq!(format_amount(15_823.0), "$15,823");
        assert_eq!(format_amount(100.0), "$100");
        assert_eq!(format_amount(1000.0), "$1,000");
        assert_eq!(format_amount(0.0), "$0");
    }

    #[test]
    fn test_format_amount_fraction() {
        assert_eq!(format_amount(15_823.5), "$15,823.5");
        assert_eq!(format_amount(1.23456), "$1.235");
        assert_eq!(format_amount(2.0004), "$2");
    }

    #[test]
    fn test_format_amount_rounds_decimal_form() {
        assert_eq!(format_amount(1.0005), "$1.001");
        assert_eq!(format_amount(0.9995), "$1");
        assert_eq!(format_amount(999_999.9996), "$1,000,000");
        assert_eq!(format_amount(12.3454), "$12.345");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-4_500.25), "$-4,500.25");
        assert_eq!(format_amount(-0.0001), "$0");
    }
}
