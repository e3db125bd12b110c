//! Fixed-point conversion between the 18-decimal synthetic token (fine units)
//! and the 6-decimal collateral token (coarse units).
//!
//! Fine -> coarse conversions take an explicit rounding direction:
//! - value leaving custody to a user rounds down
//! - value the pool collects from a user rounds up
//!
//! Coarse -> fine is exact.

use odra::casper_types::U256;
use crate::errors::BatcherError;

/// Decimals of the synthetic token (DSU)
pub const FINE_DECIMALS: u8 = 18;
/// Decimals of the collateral token (USDC)
pub const COARSE_DECIMALS: u8 = 6;
/// Fine units per coarse unit (1e12)
pub const SCALE_FACTOR: u64 = 1_000_000_000_000;

/// Fine units per coarse unit as `U256`
pub fn scale() -> U256 {
    U256::from(SCALE_FACTOR)
}

/// Convert a fine amount to coarse units.
///
/// Truncates unless `round_up` is set and the division leaves a remainder.
pub fn to_coarse(fine: U256, round_up: bool) -> U256 {
    let quotient = fine / scale();
    if round_up && !(fine % scale()).is_zero() {
        // quotient <= U256::MAX / 1e12, so +1 cannot overflow
        quotient + U256::one()
    } else {
        quotient
    }
}

/// Convert a coarse amount to fine units.
pub fn to_fine(coarse: U256) -> Result<U256, BatcherError> {
    coarse.checked_mul(scale()).ok_or(BatcherError::Overflow)
}

/// Coarse amount for a fine amount that must be exactly representable.
pub fn exact_coarse(fine: U256) -> Result<U256, BatcherError> {
    if !(fine % scale()).is_zero() {
        return Err(BatcherError::InvalidAmount);
    }
    Ok(fine / scale())
}

/// Largest whole-coarse-unit amount (in fine units) not above `fine`.
pub fn floor_to_coarse_unit(fine: U256) -> U256 {
    fine - (fine % scale())
}
