use super::maths_utils::round_half_up;

/// Compact USD display used for every money figure on the page.
///
/// Examples:
/// 1_250_000 -> "$1.3M"
/// 8_400     -> "$8K"
/// 950       -> "$950"
pub fn format_currency(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${}M", fixed_one_decimal(amount / 1_000_000.0))
    } else if amount >= 1_000.0 {
        format!("${:.0}K", round_half_up(amount / 1_000.0))
    } else {
        format!("${}", group_thousands(round_half_up(amount) as i64))
    }
}

/// One decimal place, rounding the exact binary value with ties going up.
///
/// `{:.1}` already rounds the exact value, so 1.15 (stored as 1.1499..) gives "1.1". It only
/// differs on exact ties, which it sends to even. A one-decimal tie is exactly representable
/// only as `n + 0.25` or `n + 0.75`, i.e. when `x * 4` is an odd integer; those round up.
fn fixed_one_decimal(x: f64) -> String {
    let quarters = x * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_tie {
        format!("{:.1}", (x * 10.0 + 0.5).floor() / 10.0)
    } else {
        format!("{:.1}", x)
    }
}

/// 0.168 -> "17%"
pub fn format_percentage(decimal: f64) -> String {
    format!("{}%", round_half_up(decimal * 100.0) as i64)
}

/// Inserts `,` between groups of three digits: -1234567 -> "-1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
