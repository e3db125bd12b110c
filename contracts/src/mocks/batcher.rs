//! Mock Batcher
//!
//! Exposes the batcher's `wrap`/`unwrap` entry points but pays out only a
//! configured share of the 1:1 amount, so a router can be tested against a
//! partially solvent batcher. Liquidity is whatever is sent to it.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::BatcherError;
use crate::pool::{transfer, transfer_from};
use crate::units::to_coarse;

/// 100% payout ratio
const FULL_RATIO: u128 = 1_000_000_000_000_000_000;

#[odra::module]
pub struct MockBatcher {
    /// 18-decimal token (DSU)
    fine_token: Var<Address>,
    /// 6-decimal token (USDC)
    coarse_token: Var<Address>,
    /// Share of the 1:1 amount paid out (1e18 = 100%)
    ratio: Var<U256>,
}

#[odra::module]
impl MockBatcher {
    pub fn init(&mut self, fine_token: Address, coarse_token: Address, ratio: U256) {
        self.fine_token.set(fine_token);
        self.coarse_token.set(coarse_token);
        self.ratio.set(ratio);
    }

    /// Take collateral for `amount` DSU and send `to` the ratio share of it
    pub fn wrap(&mut self, amount: U256, to: Address) {
        let caller = self.env().caller();
        let batcher = self.env().self_address();

        transfer_from(&self.env(), self.coarse_token(), caller, batcher, to_coarse(amount, true));
        let payout = self.apply_ratio(amount);
        if !payout.is_zero() {
            transfer(&self.env(), self.fine_token(), to, payout);
        }
    }

    /// Take `amount` DSU and send `to` the ratio share of its collateral value
    pub fn unwrap(&mut self, amount: U256, to: Address) {
        let caller = self.env().caller();
        let batcher = self.env().self_address();

        transfer_from(&self.env(), self.fine_token(), caller, batcher, amount);
        let payout = self.apply_ratio(to_coarse(amount, false));
        if !payout.is_zero() {
            transfer(&self.env(), self.coarse_token(), to, payout);
        }
    }
}

impl MockBatcher {
    fn fine_token(&self) -> Address {
        self.fine_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    fn coarse_token(&self) -> Address {
        self.coarse_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    fn apply_ratio(&self, amount: U256) -> U256 {
        let ratio = self.ratio.get().unwrap_or(U256::from(FULL_RATIO));
        amount
            .checked_mul(ratio)
            .unwrap_or_else(|| self.env().revert(BatcherError::Overflow))
            / U256::from(FULL_RATIO)
    }
}
