//! Conversion engine - rate arithmetic and reply formatting.
//!
//! Conversions are plain multiplication/division against the current rate;
//! no rounding happens here. Rounding is presentation-only: INR renders
//! with two decimals behind a `₹` prefix, USDT with four decimals, and raw
//! input amounts render with `{}` so `10.0` displays as `10`.

use crate::errors::{Error, Result};

/// Converts a USDT amount into INR at the given rate.
pub fn to_fiat(amount: f64, rate: f64) -> Result<f64> {
    validate_amount(amount)?;
    validate_rate(rate)?;
    Ok(amount * rate)
}

/// Converts an INR amount into USDT at the given rate.
pub fn to_stablecoin(amount: f64, rate: f64) -> Result<f64> {
    validate_amount(amount)?;
    validate_rate(rate)?;
    Ok(amount / rate)
}

/// Rejects amounts that are zero, negative or not finite.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Rejects rates that are zero, negative or not finite.
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::InvalidRate { rate });
    }
    Ok(())
}

/// Renders an INR amount the way replies show it: `₹` plus two decimals.
#[must_use]
pub fn format_fiat(fiat: f64) -> String {
    format!("₹{fiat:.2}")
}

/// Renders a USDT amount with four decimals.
#[must_use]
pub fn format_stablecoin(stablecoin: f64) -> String {
    format!("{stablecoin:.4}")
}

/// Reply for `/c2i`.
#[must_use]
pub fn fiat_reply(amount: f64, fiat: f64) -> String {
    format!("💱 {amount} USDT = {} INR", format_fiat(fiat))
}

/// Log-channel summary for `/c2i`.
#[must_use]
pub fn fiat_log_line(amount: f64, fiat: f64) -> String {
    format!("{amount} USDT → {}", format_fiat(fiat))
}

/// Reply for `/i2c`.
#[must_use]
pub fn stablecoin_reply(amount: f64, stablecoin: f64) -> String {
    format!("💱 ₹{amount} INR = {} USDT", format_stablecoin(stablecoin))
}

/// Log-channel summary for `/i2c`.
#[must_use]
pub fn stablecoin_log_line(amount: f64, stablecoin: f64) -> String {
    format!("₹{amount} → {} USDT", format_stablecoin(stablecoin))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_to_fiat_multiplies_by_rate() {
        assert_eq!(to_fiat(10.0, 90.0).unwrap(), 900.0);
        assert_eq!(to_fiat(1.0, 95.0).unwrap(), 95.0);
    }

    #[test]
    fn test_to_stablecoin_divides_by_rate() {
        assert_eq!(to_stablecoin(900.0, 90.0).unwrap(), 10.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let amounts = [0.01, 1.0, 10.0, 123.456, 99999.0];
        let rates = [0.5, 83.2, 90.0, 107.0];

        for amount in amounts {
            for rate in rates {
                let fiat = to_fiat(amount, rate).unwrap();
                let back = to_stablecoin(fiat, rate).unwrap();
                assert!(
                    (back - amount).abs() < 1e-9 * amount,
                    "round trip of {amount} at rate {rate} produced {back}"
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = to_fiat(amount, 90.0);
            assert!(matches!(
                result.unwrap_err(),
                Error::InvalidAmount { amount: _ }
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_rates() {
        for rate in [0.0, -90.0, f64::NAN, f64::INFINITY] {
            let result = to_stablecoin(900.0, rate);
            assert!(matches!(result.unwrap_err(), Error::InvalidRate { rate: _ }));
        }
    }

    #[test]
    fn test_fiat_formatting_uses_two_decimals() {
        assert_eq!(format_fiat(900.0), "₹900.00");
        assert_eq!(format_fiat(123.456), "₹123.46");
    }

    #[test]
    fn test_stablecoin_formatting_uses_four_decimals() {
        assert_eq!(format_stablecoin(10.0), "10.0000");
        assert_eq!(format_stablecoin(0.12345), "0.1235");
    }

    #[test]
    fn test_conversion_reply_templates() {
        assert_eq!(fiat_reply(10.0, 900.0), "💱 10 USDT = ₹900.00 INR");
        assert_eq!(stablecoin_reply(900.0, 10.0), "💱 ₹900 INR = 10.0000 USDT");
    }

    #[test]
    fn test_log_line_templates() {
        assert_eq!(fiat_log_line(10.0, 900.0), "10 USDT → ₹900.00");
        assert_eq!(stablecoin_log_line(900.0, 10.0), "₹900 → 10.0000 USDT");
    }
}
