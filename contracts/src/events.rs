//! Events emitted by the batchers.

use odra::prelude::*;
use odra::casper_types::U256;

/// Collateral swapped for `amount` fine tokens sent to `to`
#[odra::event]
pub struct Wrap {
    pub to: Address,
    pub amount: U256,
}

/// `amount` fine tokens swapped for collateral sent to `to`
#[odra::event]
pub struct Unwrap {
    pub to: Address,
    pub amount: U256,
}

/// Collateral loaned to the pool
#[odra::event]
pub struct Deposit {
    pub depositor: Address,
    pub amount: U256,
}

/// Collateral loan reclaimed from the pool
#[odra::event]
pub struct Withdraw {
    pub depositor: Address,
    pub amount: U256,
}

/// Reserve interaction performed by a rebalance (fine units)
#[odra::event]
pub struct Rebalance {
    pub minted: U256,
    pub redeemed: U256,
}

/// Pool closed; `balance` is the fine balance before debt repayment
#[odra::event]
pub struct Close {
    pub balance: U256,
}

#[odra::event]
pub struct OwnerUpdated {
    pub owner: Address,
}

#[odra::event]
pub struct PendingOwnerUpdated {
    pub pending_owner: Address,
}
