/// Multiplier applied to a VAT-exclusive price (10 % IVA on new housing).
pub const VAT_MULTIPLIER: f64 = 1.10;

/// Price a visitor sees, with or without VAT.
#[must_use]
pub fn final_price(price: f64, include_vat: bool) -> f64 {
    if include_vat {
        price * VAT_MULTIPLIER
    } else {
        price
    }
}

/// Formats euros the Spanish way, without decimals: `256.300 €`.
///
/// Thousands are grouped with `.` only from five integer digits upward, so
/// `9500` stays `9500 €`.
#[must_use]
pub fn format_price(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() >= 5 {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    } else {
        digits
    };

    if negative {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}
