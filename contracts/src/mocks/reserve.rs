//! Mock Reserve
//!
//! Issues the synthetic token against collateral, lends it to pools and
//! redeems it. Mint and redeem ratios are configurable so tests can model
//! partial solvency.
//!
//! The reserve must be an authorized minter of the fine token.

use odra::prelude::*;
use odra::casper_types::{U256, RuntimeArgs, runtime_args};
use odra::CallDef;
use crate::errors::BatcherError;
use crate::pool::{balance_of, transfer, transfer_from};
use crate::units::{to_coarse, to_fine};

/// 100% redemption ratio
const FULL_RATIO: u128 = 1_000_000_000_000_000_000;

#[odra::module]
pub struct MockReserve {
    /// 18-decimal token issued by the reserve
    fine_token: Var<Address>,
    /// 6-decimal collateral token
    coarse_token: Var<Address>,
    /// Outstanding loans (fine units)
    debts: Mapping<Address, U256>,
    /// Share of the fine amount issued on mint (1e18 = 100%)
    mint_ratio: Var<U256>,
    /// Share of the coarse value paid out on redeem (1e18 = 100%)
    redeem_ratio: Var<U256>,
    /// Number of `mint` calls served
    mint_count: Var<u32>,
    /// Number of `redeem` calls served
    redeem_count: Var<u32>,
}

#[odra::module]
impl MockReserve {
    /// Initialize a fully solvent reserve
    pub fn init(&mut self, fine_token: Address, coarse_token: Address) {
        self.fine_token.set(fine_token);
        self.coarse_token.set(coarse_token);
        self.mint_ratio.set(U256::from(FULL_RATIO));
        self.redeem_ratio.set(U256::from(FULL_RATIO));
        self.mint_count.set(0);
        self.redeem_count.set(0);
    }

    /// Take `to_coarse(amount)` collateral (rounded down) from the caller and
    /// issue `amount` fine tokens at the mint ratio
    pub fn mint(&mut self, amount: U256) {
        let caller = self.env().caller();
        let reserve = self.env().self_address();

        transfer_from(&self.env(), self.coarse_token(), caller, reserve, to_coarse(amount, false));
        let issued = self.apply_ratio(amount, self.mint_ratio());
        if !issued.is_zero() {
            self.mint_fine(caller, issued);
        }

        self.mint_count.set(self.mint_count() + 1);
    }

    /// Burn `amount` fine tokens from the caller and pay collateral at the redeem ratio
    pub fn redeem(&mut self, amount: U256) {
        let caller = self.env().caller();
        let reserve = self.env().self_address();

        transfer_from(&self.env(), self.fine_token(), caller, reserve, amount);
        self.burn_fine(amount);

        let payout = self.apply_ratio(to_coarse(amount, false), self.redeem_ratio());
        if !payout.is_zero() {
            transfer(&self.env(), self.coarse_token(), caller, payout);
        }

        self.redeem_count.set(self.redeem_count() + 1);
    }

    /// Repay `amount` of `borrower`'s loan with fine tokens from the caller
    pub fn repay(&mut self, borrower: Address, amount: U256) {
        let caller = self.env().caller();
        let reserve = self.env().self_address();

        transfer_from(&self.env(), self.fine_token(), caller, reserve, amount);
        self.burn_fine(amount);

        let debt = self.debt(borrower);
        self.debts.set(&borrower, debt.saturating_sub(amount));
    }

    /// Outstanding loan of `borrower`
    pub fn debt(&self, borrower: Address) -> U256 {
        self.debts.get(&borrower).unwrap_or(U256::zero())
    }

    /// Lend `amount` freshly minted fine tokens to `borrower`
    pub fn lend(&mut self, borrower: Address, amount: U256) {
        let debt = self
            .debt(borrower)
            .checked_add(amount)
            .unwrap_or_else(|| self.env().revert(BatcherError::Overflow));
        self.debts.set(&borrower, debt);
        self.mint_fine(borrower, amount);
    }

    /// Set the mint issuance ratio (1e18 = 100%)
    pub fn set_mint_ratio(&mut self, ratio: U256) {
        self.mint_ratio.set(ratio);
    }

    /// Get the mint issuance ratio
    pub fn mint_ratio(&self) -> U256 {
        self.mint_ratio.get().unwrap_or(U256::from(FULL_RATIO))
    }

    /// Set the redeem payout ratio (1e18 = 100%)
    pub fn set_redeem_ratio(&mut self, ratio: U256) {
        self.redeem_ratio.set(ratio);
    }

    /// Get the redeem payout ratio
    pub fn redeem_ratio(&self) -> U256 {
        self.redeem_ratio.get().unwrap_or(U256::from(FULL_RATIO))
    }

    /// Collateral held by the reserve, in fine units
    pub fn collateral_value(&self) -> U256 {
        let coarse = balance_of(&self.env(), self.coarse_token(), self.env().self_address());
        to_fine(coarse).unwrap_or_else(|error| self.env().revert(error))
    }

    pub fn mint_count(&self) -> u32 {
        self.mint_count.get().unwrap_or(0)
    }

    pub fn redeem_count(&self) -> u32 {
        self.redeem_count.get().unwrap_or(0)
    }
}

impl MockReserve {
    fn fine_token(&self) -> Address {
        self.fine_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    fn coarse_token(&self) -> Address {
        self.coarse_token.get().unwrap_or_else(|| self.env().revert(BatcherError::NotConfigured))
    }

    fn apply_ratio(&self, amount: U256, ratio: U256) -> U256 {
        amount
            .checked_mul(ratio)
            .unwrap_or_else(|| self.env().revert(BatcherError::Overflow))
            / U256::from(FULL_RATIO)
    }

    fn mint_fine(&self, to: Address, amount: U256) {
        let args = runtime_args! {
            "to" => to,
            "amount" => amount
        };
        let call_def = CallDef::new("mint", true, args);
        self.env().call_contract::<()>(self.fine_token(), call_def);
    }

    fn burn_fine(&self, amount: U256) {
        let args = runtime_args! {
            "amount" => amount
        };
        let call_def = CallDef::new("burn", true, args);
        self.env().call_contract::<()>(self.fine_token(), call_def);
    }
}
