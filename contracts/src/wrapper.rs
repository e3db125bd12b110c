//! Wrapper Contract
//!
//! Converts its whole balance of one token into the other and forwards the
//! proceeds. Tokens are sent to the wrapper first, then `wrap`/`unwrap` is called.
//!
//! ## Routing
//!
//! - Batcher, when one is configured and holds enough of the output token
//! - Reserve otherwise
//!
//! Either way the wrapper measures what it actually received and reverts with
//! `ReserveInsolvent` when the counterparty paid out less than 1:1.

use odra::prelude::*;
use odra::casper_types::{U256, RuntimeArgs, runtime_args};
use odra::CallDef;
use crate::errors::BatcherError;
use crate::events::{OwnerUpdated, PendingOwnerUpdated};
use crate::ownership::Ownership;
use crate::pool::{approve, balance_of, transfer};
use crate::units::{to_coarse, to_fine};

/// Where a conversion is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Batcher(Address),
    Reserve,
}

/// Pick the batcher only when it can cover `required` from its own liquidity.
pub fn select_route(batcher: Option<Address>, batcher_liquidity: U256, required: U256) -> Route {
    match batcher {
        Some(batcher) if batcher_liquidity >= required => Route::Batcher(batcher),
        _ => Route::Reserve,
    }
}

#[odra::module(events = [OwnerUpdated, PendingOwnerUpdated])]
pub struct Wrapper {
    /// Reserve contract address
    reserve: Var<Address>,
    /// Optional batcher used for cheap conversions
    batcher: Var<Option<Address>>,
    /// 18-decimal token (DSU)
    fine_token: Var<Address>,
    /// 6-decimal token (USDC)
    coarse_token: Var<Address>,
    ownership: SubModule<Ownership>,
}

#[odra::module]
impl Wrapper {
    /// Initialize the wrapper; the deployer becomes owner
    pub fn init(
        &mut self,
        reserve: Address,
        batcher: Option<Address>,
        fine_token: Address,
        coarse_token: Address,
    ) {
        let owner = self.env().caller();
        self.ownership.init(owner);
        self.reserve.set(reserve);
        self.fine_token.set(fine_token);
        self.coarse_token.set(coarse_token);

        self.approve_all(reserve);
        self.set_batcher_internal(batcher);
    }

    /// Replace the batcher (owner only)
    pub fn set_batcher(&mut self, batcher: Option<Address>) {
        self.ownership.require_owner();
        self.set_batcher_internal(batcher);
    }

    /// Convert the wrapper's whole USDC balance into DSU sent to `to`
    pub fn wrap(&mut self, to: Address) {
        let fine_token = self.fine_token();
        let coarse = self.own_balance(self.coarse_token());
        let amount = to_fine(coarse).unwrap_or_else(|error| self.env().revert(error));

        let liquidity = self.batcher_balance(fine_token);
        let call = match select_route(self.batcher(), liquidity, amount) {
            Route::Batcher(batcher) => {
                let args = runtime_args! {
                    "amount" => amount,
                    "to" => self.env().self_address()
                };
                (batcher, CallDef::new("wrap", true, args))
            }
            Route::Reserve => {
                let args = runtime_args! {
                    "amount" => amount
                };
                (self.reserve(), CallDef::new("mint", true, args))
            }
        };

        let received = self.call_and_measure(fine_token, call);
        if received < amount {
            self.env().revert(BatcherError::ReserveInsolvent);
        }
        transfer(&self.env(), fine_token, to, received);
    }

    /// Convert the wrapper's whole DSU balance into USDC sent to `to`
    pub fn unwrap(&mut self, to: Address) {
        let coarse_token = self.coarse_token();
        let amount = self.own_balance(self.fine_token());
        let expected = to_coarse(amount, false);

        let liquidity = self.batcher_balance(coarse_token);
        let call = match select_route(self.batcher(), liquidity, expected) {
            Route::Batcher(batcher) => {
                let args = runtime_args! {
                    "amount" => amount,
                    "to" => self.env().self_address()
                };
                (batcher, CallDef::new("unwrap", true, args))
            }
            Route::Reserve => {
                let args = runtime_args! {
                    "amount" => amount
                };
                (self.reserve(), CallDef::new("redeem", true, args))
            }
        };

        let received = self.call_and_measure(coarse_token, call);
        if received < expected {
            self.env().revert(BatcherError::ReserveInsolvent);
        }
        transfer(&self.env(), coarse_token, to, received);
    }

    // ========== View Functions ==========

    /// Get configured batcher, if any
    pub fn batcher(&self) -> Option<Address> {
        self.batcher.get().flatten()
    }

    /// Get reserve address
    pub fn reserve(&self) -> Address {
        self.reserve.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    /// Get DSU address
    pub fn fine_token(&self) -> Address {
        self.fine_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    /// Get USDC address
    pub fn coarse_token(&self) -> Address {
        self.coarse_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
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

impl Wrapper {
    fn set_batcher_internal(&mut self, batcher: Option<Address>) {
        if let Some(batcher) = batcher {
            self.approve_all(batcher);
        }
        self.batcher.set(batcher);
    }

    fn approve_all(&self, spender: Address) {
        approve(&self.env(), self.fine_token(), spender, U256::MAX);
        approve(&self.env(), self.coarse_token(), spender, U256::MAX);
    }

    fn own_balance(&self, token: Address) -> U256 {
        balance_of(&self.env(), token, self.env().self_address())
    }

    fn batcher_balance(&self, token: Address) -> U256 {
        match self.batcher() {
            Some(batcher) => balance_of(&self.env(), token, batcher),
            None => U256::zero(),
        }
    }

    /// Execute `call` and return how much of `token` the wrapper gained
    fn call_and_measure(&mut self, token: Address, (target, call_def): (Address, CallDef)) -> U256 {
        let before = self.own_balance(token);
        self.env().call_contract::<()>(target, call_def);
        self.own_balance(token).saturating_sub(before)
    }
}
