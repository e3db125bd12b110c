//! Rebalance and close planning.
//!
//! The pool keeps coarse liquidity equal to its outstanding claims. Anything
//! above that is minted into fine tokens through the reserve; any shortfall is
//! redeemed from the pool's fine balance. These functions only decide what to
//! do; `Pool` carries the plan out against the reserve.

use odra::casper_types::U256;
use crate::errors::BatcherError;
use crate::units::{floor_to_coarse_unit, to_coarse, to_fine};

/// Reserve call required to bring the pool back to target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceAction {
    /// Coarse holdings already match claims
    Hold,
    /// Mint this many fine units from excess coarse holdings
    Mint(U256),
    /// Redeem this many fine units to cover a coarse shortfall
    Redeem(U256),
}

impl RebalanceAction {
    /// `(minted, redeemed)` as reported in the `Rebalance` event
    pub fn amounts(&self) -> (U256, U256) {
        match self {
            RebalanceAction::Hold => (U256::zero(), U256::zero()),
            RebalanceAction::Mint(amount) => (*amount, U256::zero()),
            RebalanceAction::Redeem(amount) => (U256::zero(), *amount),
        }
    }
}

/// Decide how to rebalance a pool holding `fine_balance` and `coarse_balance`
/// against `total_claims` (fine units, zero for the wrap-only batcher).
///
/// Mints only whole coarse units. Redemptions are capped by the fine balance,
/// so a pool that cannot fully cover its claims redeems what it holds instead
/// of failing.
pub fn plan_rebalance(
    fine_balance: U256,
    coarse_balance: U256,
    total_claims: U256,
) -> Result<RebalanceAction, BatcherError> {
    let coarse_value = to_fine(coarse_balance)?;

    let action = if coarse_value > total_claims {
        let mint = floor_to_coarse_unit(coarse_value - total_claims);
        if mint.is_zero() {
            RebalanceAction::Hold
        } else {
            RebalanceAction::Mint(mint)
        }
    } else if coarse_value < total_claims {
        let redeem = (total_claims - coarse_value).min(fine_balance);
        if redeem.is_zero() {
            RebalanceAction::Hold
        } else {
            RebalanceAction::Redeem(redeem)
        }
    } else {
        RebalanceAction::Hold
    };

    Ok(action)
}

/// Reserve calls needed to close a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosePlan {
    /// Fine units repaid against the pool's reserve debt
    pub repay: U256,
    /// Fine units redeemed for collateral after repayment
    pub redeem: U256,
}

/// Plan debt repayment and redemption of the excess fine balance.
///
/// Repayment is capped by the fine balance, so a pool left short by a
/// degraded reserve repays what it holds and keeps the remaining debt. Only
/// whole coarse units of the excess are redeemed; a sub-unit residue stays in
/// the pool.
pub fn plan_close(fine_balance: U256, debt: U256) -> ClosePlan {
    let repay = debt.min(fine_balance);

    ClosePlan {
        repay,
        redeem: floor_to_coarse_unit(fine_balance - repay),
    }
}

/// Coarse balance that may leave the pool at close while still covering claims.
pub fn close_sweep(coarse_balance: U256, total_claims: U256) -> U256 {
    coarse_balance.saturating_sub(to_coarse(total_claims, true))
}
