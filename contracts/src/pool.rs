//! Pool: the batcher's custody of both tokens and its relationship with the reserve.
//!
//! Shared by `WrapOnlyBatcher` and `TwoWayBatcher`. The pool moves tokens
//! between users and itself without touching the reserve; only `rebalance` and
//! `close` call the reserve.
//!
//! ## Rebalance
//!
//! 1. Coarse holdings above outstanding claims are minted into fine tokens
//! 2. A coarse shortfall is redeemed from the fine balance
//! 3. Whatever the reserve returns on redeem is accepted (partial solvency)
//!
//! ## Close
//!
//! 1. Rebalance
//! 2. Repay the reserve debt, up to the fine balance
//! 3. Redeem the remaining whole coarse units
//! 4. Sweep collateral above outstanding claims to the owner

use odra::prelude::*;
use odra::casper_types::{U256, RuntimeArgs, runtime_args};
use odra::{CallDef, ContractEnv};
use crate::errors::BatcherError;
use crate::events::{Close, Rebalance};
use crate::rebalance::{close_sweep, plan_close, plan_rebalance, RebalanceAction};
use crate::units::to_fine;

/// Reserve interface consumed by the pool
#[odra::external_contract]
pub trait Reserve {
    fn mint(&mut self, amount: U256);
    fn redeem(&mut self, amount: U256);
    fn repay(&mut self, borrower: Address, amount: U256);
    fn debt(&self, borrower: Address) -> U256;
}

/// CEP-18 token interface consumed by the pool
#[odra::external_contract]
pub trait Cep18 {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
}

/// Which of the pool's tokens an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Denomination {
    Fine,
    Coarse,
}

#[odra::module(events = [Rebalance, Close])]
pub struct Pool {
    /// Reserve contract address
    reserve: Var<Address>,
    /// 18-decimal token (DSU)
    fine_token: Var<Address>,
    /// 6-decimal token (USDC)
    coarse_token: Var<Address>,
}

#[odra::module]
impl Pool {
    /// Store collaborators and grant the reserve unlimited allowance on both tokens
    pub fn init(&mut self, reserve: Address, fine_token: Address, coarse_token: Address) {
        self.reserve.set(reserve);
        self.fine_token.set(fine_token);
        self.coarse_token.set(coarse_token);

        approve(&self.env(), fine_token, reserve, U256::MAX);
        approve(&self.env(), coarse_token, reserve, U256::MAX);
    }

    /// Get reserve address
    pub fn reserve(&self) -> Address {
        self.reserve.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    /// Get fine token address
    pub fn fine_token(&self) -> Address {
        self.fine_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    /// Get coarse token address
    pub fn coarse_token(&self) -> Address {
        self.coarse_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    /// Pool's fine token balance
    pub fn fine_balance(&self) -> U256 {
        self.balance(Denomination::Fine)
    }

    /// Pool's coarse token balance
    pub fn coarse_balance(&self) -> U256 {
        self.balance(Denomination::Coarse)
    }

    /// Fine balance plus the fine value of the coarse balance
    pub fn total_balance(&self) -> U256 {
        let coarse_value = self.or_revert(to_fine(self.coarse_balance()));
        self.fine_balance()
            .checked_add(coarse_value)
            .unwrap_or_else(|| self.env().revert(BatcherError::Overflow))
    }
}

impl Pool {
    /// Pull `amount` from `from` into the pool (requires allowance)
    pub(crate) fn pull(&mut self, denomination: Denomination, from: Address, amount: U256) {
        if amount.is_zero() {
            return;
        }

        let token = self.token(denomination);
        transfer_from(&self.env(), token, from, self.env().self_address(), amount);
    }

    /// Push `amount` from the pool to `to`
    pub(crate) fn push(&mut self, denomination: Denomination, to: Address, amount: U256) {
        if amount.is_zero() {
            return;
        }
        if self.balance(denomination) < amount {
            self.env().revert(BatcherError::InsufficientPoolBalance);
        }

        let token = self.token(denomination);
        transfer(&self.env(), token, to, amount);
    }

    /// Convert the pool's net collateral surplus or deficit through the reserve.
    ///
    /// Emits `Rebalance` only when the reserve is called.
    pub(crate) fn rebalance(&mut self, total_claims: U256) -> RebalanceAction {
        let action = self.or_revert(plan_rebalance(
            self.fine_balance(),
            self.coarse_balance(),
            total_claims,
        ));

        match action {
            RebalanceAction::Hold => return action,
            RebalanceAction::Mint(amount) => self.reserve_call("mint", amount),
            RebalanceAction::Redeem(amount) => self.reserve_call("redeem", amount),
        }

        let (minted, redeemed) = action.amounts();
        self.env().emit_event(Rebalance { minted, redeemed });
        action
    }

    /// Settle the pool with the reserve and sweep free collateral to `owner`.
    pub(crate) fn close(&mut self, total_claims: U256, owner: Address) {
        self.rebalance(total_claims);

        let balance = self.fine_balance();
        let debt = self.debt();
        let plan = plan_close(balance, debt);

        if !plan.repay.is_zero() {
            let args = runtime_args! {
                "borrower" => self.env().self_address(),
                "amount" => plan.repay
            };
            let call_def = CallDef::new("repay", true, args);
            self.env().call_contract::<()>(self.reserve(), call_def);
        }

        if !plan.redeem.is_zero() {
            self.reserve_call("redeem", plan.redeem);
        }

        let sweep = close_sweep(self.coarse_balance(), total_claims);
        self.push(Denomination::Coarse, owner, sweep);

        self.env().emit_event(Close { balance });
    }

    /// Reserve debt attributed to this pool
    pub(crate) fn debt(&self) -> U256 {
        let args = runtime_args! {
            "borrower" => self.env().self_address()
        };
        let call_def = CallDef::new("debt", false, args);
        self.env().call_contract::<U256>(self.reserve(), call_def)
    }

    pub(crate) fn or_revert<T>(&self, result: Result<T, BatcherError>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }

    fn balance(&self, denomination: Denomination) -> U256 {
        balance_of(&self.env(), self.token(denomination), self.env().self_address())
    }

    fn token(&self, denomination: Denomination) -> Address {
        match denomination {
            Denomination::Fine => self.fine_token(),
            Denomination::Coarse => self.coarse_token(),
        }
    }

    fn reserve_call(&mut self, entry_point: &str, amount: U256) {
        let args = runtime_args! {
            "amount" => amount
        };
        let call_def = CallDef::new(entry_point, true, args);
        self.env().call_contract::<()>(self.reserve(), call_def);
    }
}

// ========== Token Calls ==========
//
// Shared with the wrapper and the mock reserve.

pub(crate) fn balance_of(env: &ContractEnv, token: Address, account: Address) -> U256 {
    let args = runtime_args! {
        "account" => account
    };
    let call_def = CallDef::new("balance_of", false, args);
    env.call_contract::<U256>(token, call_def)
}

pub(crate) fn transfer(env: &ContractEnv, token: Address, recipient: Address, amount: U256) {
    let args = runtime_args! {
        "recipient" => recipient,
        "amount" => amount
    };
    let call_def = CallDef::new("transfer", true, args);
    let success: bool = env.call_contract(token, call_def);

    if !success {
        env.revert(BatcherError::TokenTransferFailed);
    }
}

pub(crate) fn transfer_from(
    env: &ContractEnv,
    token: Address,
    owner: Address,
    recipient: Address,
    amount: U256,
) {
    let args = runtime_args! {
        "owner" => owner,
        "recipient" => recipient,
        "amount" => amount
    };
    let call_def = CallDef::new("transfer_from", true, args);
    let success: bool = env.call_contract(token, call_def);

    if !success {
        env.revert(BatcherError::TokenTransferFailed);
    }
}

pub(crate) fn approve(env: &ContractEnv, token: Address, spender: Address, amount: U256) {
    let args = runtime_args! {
        "spender" => spender,
        "amount" => amount
    };
    let call_def = CallDef::new("approve", true, args);
    let success: bool = env.call_contract(token, call_def);

    if !success {
        env.revert(BatcherError::TokenTransferFailed);
    }
}
