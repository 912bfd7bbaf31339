//! Currency minor-unit conversion.
//!
//! The gateway charges in the smallest unit of each currency (paise for INR,
//! fils for KWD, whole yen for JPY). ISO 4217 exponents; anything unknown is
//! treated as a two-decimal currency.

fn minor_unit_exponent(currency: &str) -> u32 {
    match currency.to_ascii_uppercase().as_str() {
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
        | "UGX" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

/// Convert a major-unit amount to the gateway's minor-unit representation,
/// rounding to the nearest integer.
pub fn to_minor_units(amount: f64, currency: &str) -> i64 {
    let factor = 10i64.pow(minor_unit_exponent(currency)) as f64;
    (amount * factor).round() as i64
}

/// Convert a gateway minor-unit amount back to major units.
pub fn to_major_units(minor: i64, currency: &str) -> f64 {
    let factor = 10i64.pow(minor_unit_exponent(currency)) as f64;
    minor as f64 / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_converts_to_paise() {
        assert_eq!(to_minor_units(20.0, "INR"), 2000);
        assert_eq!(to_minor_units(99.99, "INR"), 9999);
        assert_eq!(to_minor_units(0.01, "INR"), 1);
    }

    #[test]
    fn zero_decimal_currencies_pass_through() {
        assert_eq!(to_minor_units(500.0, "JPY"), 500);
        assert_eq!(to_minor_units(1250.0, "KRW"), 1250);
    }

    #[test]
    fn three_decimal_currencies_scale_by_thousand() {
        assert_eq!(to_minor_units(1.25, "KWD"), 1250);
        assert_eq!(to_minor_units(0.5, "BHD"), 500);
    }

    #[test]
    fn unknown_currency_defaults_to_two_decimals() {
        assert_eq!(to_minor_units(12.5, "USD"), 1250);
        assert_eq!(to_minor_units(12.5, "XYZ"), 1250);
    }

    #[test]
    fn currency_codes_are_case_insensitive() {
        assert_eq!(to_minor_units(500.0, "jpy"), 500);
    }

    #[test]
    fn major_units_round_trip() {
        assert_eq!(to_major_units(2000, "INR"), 20.0);
        assert_eq!(to_major_units(500, "JPY"), 500.0);
        assert_eq!(to_major_units(1250, "KWD"), 1.25);
    }
}
