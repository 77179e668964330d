use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{RoyaltyConfig, MAX_FEE_BASIS_POINTS};

pub fn validate_fee(fee_basis_points: u32) -> Result<(), Error> {
    if fee_basis_points > MAX_FEE_BASIS_POINTS {
        return Err(Error::InvalidFee);
    }
    Ok(())
}

/// Royalty owed on `sale_price`, rounded down.
pub fn compute_amount(sale_price: i128, fee_basis_points: u32) -> Result<i128, Error> {
    if sale_price < 0 {
        return Err(Error::InvalidAmount);
    }
    sale_price
        .checked_mul(fee_basis_points as i128)
        .map(|scaled| scaled / MAX_FEE_BASIS_POINTS as i128)
        .ok_or(Error::InvalidAmount)
}

/// Receiver and amount for a sale. Unconfigured royalties pay nothing to the
/// contract itself.
pub fn quote(e: &Env, sale_price: i128) -> Result<(Address, i128), Error> {
    let RoyaltyConfig {
        receiver,
        fee_basis_points,
    } = storage::get_royalty(e).unwrap_or_else(|| RoyaltyConfig {
        receiver: e.current_contract_address(),
        fee_basis_points: 0,
    });

    let amount = compute_amount(sale_price, fee_basis_points)?;
    Ok((receiver, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_amount_floors() {
        assert_eq!(compute_amount(10_000, 500), Ok(500));
        assert_eq!(compute_amount(199, 500), Ok(9));
        assert_eq!(compute_amount(1, 9_999), Ok(0));
        assert_eq!(compute_amount(0, 10_000), Ok(0));
    }

    #[test]
    fn test_compute_amount_full_fee_returns_price() {
        assert_eq!(compute_amount(123_456, 10_000), Ok(123_456));
    }

    #[test]
    fn test_compute_amount_rejects_negative_price() {
        assert_eq!(compute_amount(-1, 500), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_compute_amount_rejects_overflow() {
        assert_eq!(compute_amount(i128::MAX, 2), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_validate_fee_bounds() {
        assert_eq!(validate_fee(0), Ok(()));
        assert_eq!(validate_fee(10_000), Ok(()));
        assert_eq!(validate_fee(10_001), Err(Error::InvalidFee));
    }
}
