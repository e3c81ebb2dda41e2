//! US dollar formatting for presentation (`1234.5` → `$1,234.50`).

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Format an amount the way en-US renders USD: `$` prefix, comma-grouped
/// thousands, two decimals, leading `-` for negatives.
///
/// Rounding works on the shortest decimal that reads back as `amount`, so
/// `1.005` rounds up to `$1.01` even though its binary value sits just
/// below the midpoint.
pub fn format_to_dollar(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let (dollars, cents) = dollars_and_cents(amount.abs());
    format!("{sign}${}.{cents}", group_thousands(&dollars))
}

/// Integer digits and two cent digits of a finite, non-negative amount.
fn dollars_and_cents(amount: f64) -> (String, String) {
    // f64 Display never uses an exponent
    let shortest = amount.to_string();

    match Decimal::from_str(&shortest) {
        Ok(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            let text = rounded.to_string();
            match text.split_once('.') {
                // rescale stops short of 2 places near Decimal::MAX
                Some((int, frac)) => (int.to_string(), format!("{frac:0<2}")),
                None => (text, "00".to_string()),
            }
        }
        // Past Decimal's range: either integral (>= 2^53) or far below a cent
        Err(_) if amount >= 1.0 => {
            let int = shortest.split('.').next().unwrap_or("0");
            (int.to_string(), "00".to_string())
        }
        Err(_) => ("0".to_string(), "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
