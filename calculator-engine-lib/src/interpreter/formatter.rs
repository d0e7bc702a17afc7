/// Integers at or beyond this magnitude are shown in general form instead.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

const SIGNIFICANT_DIGITS: usize = 10;

/// Canonicalizes a numeric result into its display string.
///
/// Integral values below 10^15 are shown without a fractional part. Everything else
/// uses 10 significant digits in general form, switching to an exponent for very
/// large or very small magnitudes.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::formatter::format_number;
///
/// assert_eq!(format_number(21.0), "21");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_number(1e15), "1e+15");
/// ```
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        // Also turns -0 into 0.
        return format!("{}", value as i64);
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// Formats like C's `%.{precision}g`.
fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_insignificant_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_insignificant_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_insignificant_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
