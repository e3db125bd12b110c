//! Two-way Batcher Contract
//!
//! Wraps and unwraps between DSU and USDC at 1:1 from pooled liquidity.
//!
//! Liquidity providers may loan USDC to the pool with `deposit` and reclaim it
//! with `withdraw`. Loaned collateral is tracked in the claim ledger; the pool
//! keeps enough USDC to cover outstanding claims and mints the rest into DSU.
//!
//! ## Withdraw ordering
//!
//! The pool is rebalanced while the caller's claim is still outstanding, so a
//! USDC shortfall is redeemed from DSU before the payout. Under a degraded
//! reserve the payout may still be short, in which case the withdraw reverts.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{
    Close, Deposit, OwnerUpdated, PendingOwnerUpdated, Rebalance, Unwrap, Withdraw, Wrap,
};
use crate::ledger::ClaimLedger;
use crate::ownership::Ownership;
use crate::pool::{Denomination, Pool};
use crate::units::to_coarse;

#[odra::module(events = [
    Wrap,
    Unwrap,
    Deposit,
    Withdraw,
    Rebalance,
    Close,
    OwnerUpdated,
    PendingOwnerUpdated
])]
pub struct TwoWayBatcher {
    pool: SubModule<Pool>,
    ledger: SubModule<ClaimLedger>,
    ownership: SubModule<Ownership>,
}

#[odra::module]
impl TwoWayBatcher {
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

    /// Swap `amount` DSU from the caller for USDC sent to `to` (rounded down)
    pub fn unwrap(&mut self, amount: U256, to: Address) {
        let caller = self.env().caller();

        self.pool.pull(Denomination::Fine, caller, amount);
        self.pool.push(Denomination::Coarse, to, to_coarse(amount, false));

        self.env().emit_event(Unwrap { to, amount });
    }

    /// Rebalance the pool against outstanding claims
    pub fn rebalance(&mut self) {
        let total_claims = self.ledger.total_claims();
        self.pool.rebalance(total_claims);
    }

    /// Repay the reserve and sweep free USDC to the owner (owner only).
    ///
    /// Collateral backing outstanding claims stays in the pool.
    pub fn close(&mut self) {
        self.ownership.require_owner();
        let owner = self.ownership.owner();
        let total_claims = self.ledger.total_claims();
        self.pool.close(total_claims, owner);
    }

    // ========== Liquidity Functions ==========

    /// Loan USDC to the pool. `amount` is in DSU units and must be a whole
    /// number of USDC units.
    pub fn deposit(&mut self, amount: U256) {
        let depositor = self.env().caller();

        let coarse = self.pool.or_revert(self.ledger.record_deposit(depositor, amount));
        self.pool.pull(Denomination::Coarse, depositor, coarse);

        self.env().emit_event(Deposit { depositor, amount });

        let total_claims = self.ledger.total_claims();
        self.pool.rebalance(total_claims);
    }

    /// Reclaim `amount` (DSU units) of loaned USDC
    pub fn withdraw(&mut self, amount: U256) {
        let depositor = self.env().caller();
        self.pool.or_revert(self.ledger.check_withdraw(depositor, amount));

        let total_claims = self.ledger.total_claims();
        self.pool.rebalance(total_claims);

        let coarse = self.pool.or_revert(self.ledger.record_withdraw(depositor, amount));
        self.pool.push(Denomination::Coarse, depositor, coarse);

        self.env().emit_event(Withdraw { depositor, amount });
    }

    // ========== View Functions ==========

    /// DSU balance plus the DSU value of the USDC balance
    pub fn total_balance(&self) -> U256 {
        self.pool.total_balance()
    }

    /// Sum of outstanding claims (DSU units)
    pub fn total_claims(&self) -> U256 {
        self.ledger.total_claims()
    }

    /// Outstanding claim of `depositor` (DSU units)
    pub fn claim_of(&self, depositor: Address) -> U256 {
        self.ledger.claim_of(depositor)
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
