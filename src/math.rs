//! Fixed-point payroll arithmetic.
//!
//! Amounts are `i128` values in the token's smallest unit with 18 decimals of
//! precision. Every operation is checked; overflow surfaces as
//! [`Error::ArithmeticOverflow`] instead of wrapping.

use crate::errors::Error;

/// One whole unit of the payout token.
pub const ONE: i128 = 1_000_000_000_000_000_000;

/// Denominator for basis-point rates (100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Amount owed for `rate_per_second` between `last_claim_time` and `now`.
///
/// A clock reading earlier than the last claim accrues nothing.
pub fn accrued(rate_per_second: i128, last_claim_time: u64, now: u64) -> Result<i128, Error> {
    let elapsed = now.saturating_sub(last_claim_time);
    rate_per_second
        .checked_mul(elapsed as i128)
        .ok_or(Error::ArithmeticOverflow)
}

/// Splits `gross` into `(tax, net)` at `tax_bps`, truncating the tax toward zero.
///
/// The product is taken on the quotient and remainder separately so any
/// `gross` splits without overflow for rates up to 100%.
pub fn split_tax(gross: i128, tax_bps: u32) -> Result<(i128, i128), Error> {
    let denominator = BPS_DENOMINATOR as i128;
    let bps = tax_bps as i128;
    let whole = (gross / denominator)
        .checked_mul(bps)
        .ok_or(Error::ArithmeticOverflow)?;
    let tax = checked_add(whole, (gross % denominator) * bps / denominator)?;
    let net = gross.checked_sub(tax).ok_or(Error::ArithmeticOverflow)?;
    Ok((tax, net))
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrues_per_second() {
        assert_eq!(accrued(ONE, 1_000, 1_100), Ok(100 * ONE));
        assert_eq!(accrued(ONE, 1_000, 1_000), Ok(0));
    }

    #[test]
    fn clock_behind_last_claim_accrues_nothing() {
        assert_eq!(accrued(ONE, 1_000, 900), Ok(0));
    }

    #[test]
    fn accrual_overflow_is_reported() {
        assert_eq!(accrued(i128::MAX, 0, 2), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn tax_split_is_exact() {
        assert_eq!(split_tax(100 * ONE, 1_000), Ok((10 * ONE, 90 * ONE)));
        assert_eq!(split_tax(100 * ONE, 0), Ok((0, 100 * ONE)));
        assert_eq!(split_tax(100 * ONE, 10_000), Ok((100 * ONE, 0)));
    }

    #[test]
    fn tax_truncates_toward_zero() {
        // 999 * 1234 / 10000 = 123.2766
        let (tax, net) = split_tax(999, 1_234).unwrap();
        assert_eq!(tax, 123);
        assert_eq!(net, 876);
        assert_eq!(tax + net, 999);
    }

    #[test]
    fn tax_split_handles_largest_gross() {
        assert_eq!(split_tax(i128::MAX, 10_000), Ok((i128::MAX, 0)));
        assert_eq!(split_tax(i128::MAX, 0), Ok((0, i128::MAX)));

        let (tax, net) = split_tax(i128::MAX, 1_000).unwrap();
        assert_eq!(tax, i128::MAX / 10);
        assert_eq!(tax + net, i128::MAX);
    }

    #[test]
    fn tax_split_matches_direct_product() {
        for (gross, bps) in [(6_993i128, 1_234u32), (123_456_789, 9_999), (9_999, 1)] {
            let (tax, _) = split_tax(gross, bps).unwrap();
            assert_eq!(tax, gross * bps as i128 / 10_000);
        }
    }
}
