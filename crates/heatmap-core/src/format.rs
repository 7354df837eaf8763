// File: crates/heatmap-core/src/format.rs
// Summary: Number formatting for tick labels, attributes and tooltip text.

/// Typographic minus used for negative tick labels.
pub const MINUS: char = '\u{2212}';

/// Integer tick label: rounded, no decimals, no grouping separators.
pub fn format_integer(v: f64) -> String {
    let r = crate::grid::round_half_up(v);
    if r < 0.0 {
        format!("{}{}", MINUS, -r)
    } else {
        // `+ 0.0` folds -0 into 0
        format!("{}", r + 0.0)
    }
}

/// Enough fractional digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point formatting with `digits` decimals.
/// Rounds the exact binary value; only exact ties (`0.125`) round away from zero,
/// so `0.835` (stored as 0.83499…) gives `"0.83"`.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return format!("{}", v);
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    let exact = format!("{:.*}", EXACT_DIGITS, abs);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let rest = frac.get(digits..).unwrap_or("");
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        // not a tie, so the exact rounding of `{:.*}` is unambiguous
        return format!("{}{:.*}", sign, digits, abs);
    }
    let mut kept: Vec<u8> = int_part.bytes().chain(frac[..digits].bytes()).collect();
    increment_decimal(&mut kept);
    let split = kept.len() - digits;
    let (i, f) = kept.split_at(split);
    let (i, f) = (String::from_utf8_lossy(i), String::from_utf8_lossy(f));
    if digits == 0 { format!("{sign}{i}") } else { format!("{sign}{i}.{f}") }
}

/// Add one unit in the last place to a string of ASCII digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Shortest decimal that round-trips, as used for `data-*` attributes.
pub fn format_number(v: f64) -> String {
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_labels_have_no_decimals() {
        assert_eq!(format_integer(1900.0), "1900");
        assert_eq!(format_integer(1999.6), "2000");
        assert_eq!(format_integer(-2.0), "\u{2212}2");
        assert_eq!(format_integer(-0.2), "0");
    }

    #[test]
    fn fixed_two_decimals() {
        assert_eq!(to_fixed(8.66 + -0.5, 2), "8.16");
        assert_eq!(to_fixed(-0.5, 2), "-0.50");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }

    #[test]
    fn fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.375, 2), "-0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(-9.875, 2), "-9.88");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        assert_eq!(to_fixed(-7.975, 2), "-7.97");
        assert_eq!(to_fixed(0.835, 2), "0.83");
        assert_eq!(to_fixed(0.7949999999999999, 2), "0.79");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn three_decimal_variances_round_like_the_exact_value() {
        for k in -8000i32..=8000 {
            let v = k as f64 / 1000.0;
            let got = to_fixed(v, 2);
            // k/1000 is an exact binary tie only for odd multiples of 1/8 at the third decimal
            let want = if k % 125 == 0 && k % 10 != 0 {
                let away = (k.abs() + 5) / 10;
                let sign = if k < 0 { "-" } else { "" };
                format!("{}{}.{:02}", sign, away / 100, away % 100)
            } else {
                format!("{:.2}", v)
            };
            assert_eq!(got, want, "k = {k}");
        }
    }

    #[test]
    fn number_is_shortest_round_trip() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(8.16), "8.16");
        assert_eq!(format_number(-1.366), "-1.366");
    }
}
