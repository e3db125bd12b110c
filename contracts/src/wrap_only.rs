//! Wrap-only Batcher Contract
//!
//! Sells pooled DSU for USDC at 1:1 without touching the reserve on the hot
//! path. Collected USDC is minted into DSU in bulk by `rebalance`.
//!
//! The pool is expected to be pre-seeded with DSU (typically lent by the
//! reserve); `close` repays that debt.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::BatcherError;
use crate::events::{Close, OwnerUpdated, PendingOwnerUpdated, Rebalance, Wrap};
use crate::ownership::Ownership;
use crate::pool::{Denomination, Pool};
use crate::units::to_coarse;

#[odra::module(events = [Wrap, Rebalance, Close, OwnerUpdated, PendingOwnerUpdated])]
pub struct WrapOnlyBatcher {
    pool: SubModule<Pool>,
    ownership: SubModule<Ownership>,
}

#[odra::module]
impl WrapOnlyBatcher {
    /// Initialize the batcher; the deployer becomes owner
    pub fn init(&mut self, reserve: Address, fine_token: Address, coarse_token: Address) {
        let owner = self.env().caller();
        self.ownership.init(owner);
        self.pool.init(reserve, fine_token, coarse_token);
    }

    // ========== Batcher Functions ==========

    /// Swap `amount` DSU for USDC pulled from the caller (rounded up)
    pub fn wrap(&mut self, amount: U256, to: Address) {
        let caller = self.env().caller();

        self.pool.pull(Denomination::Coarse, caller, to_coarse(amount, true));
        self.pool.push(Denomination::Fine, to, amount);

        self.env().emit_event(Wrap { to, amount });
    }

    /// Not supported by this batcher
    pub fn unwrap(&mut self, _amount: U256, _to: Address) {
        self.env().revert(BatcherError::NotImplemented);
    }

    /// Mint collected USDC into DSU through the reserve
    pub fn rebalance(&mut self) {
        self.pool.rebalance(U256::zero());
    }

    /// Repay the reserve and sweep remaining USDC to the owner (owner only)
    pub fn close(&mut self) {
        self.ownership.require_owner();
        let owner = self.ownership.owner();
        self.pool.close(U256::zero(), owner);
    }

    // ========== View Functions ==========

    /// DSU balance plus the DSU value of the USDC balance
    pub fn total_balance(&self) -> U256 {
        self.pool.total_balance()
    }

    /// Get reserve address
    pub fn reserve(&self) -> Address {
        self.pool.reserve()
    }

    /// Get DSU address
    pub fn fine_token(&self) -> Address {
        self.pool.fine_token()
    }

    /// Get USDC address
    pub fn coarse_token(&self) -> Address {
        self.pool.coarse_token()
    }

    // ========== Ownership ==========

    /// Get owner
    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// Get pending owner
    pub fn pending_owner(&self) -> Option<Address> {
        self.ownership.pending_owner()
    }

    /// Nominate a new owner (owner only)
    pub fn update_pending_owner(&mut self, pending_owner: Address) {
        self.ownership.update_pending_owner(pending_owner);
    }

    /// Accept ownership (pending owner only)
    pub fn accept_owner(&mut self) {
        self.ownership.accept_owner();
    }
}
