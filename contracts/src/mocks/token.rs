//! Mock CEP-18 Token
//!
//! Minimal CEP-18 token used as both the 18-decimal synthetic token and the
//! 6-decimal collateral token in tests. Minting is restricted to the deployer
//! and to minters it authorizes (the mock reserve).

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::BatcherError;

#[odra::module]
pub struct MockToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Deployer, always allowed to mint
    admin: Var<Address>,
    /// Authorized minters
    minters: Mapping<Address, bool>,
}

#[odra::module]
impl MockToken {
    /// Initialize the token; the deployer becomes admin
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(0)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(BatcherError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Supply Functions ==========

    /// Mint new tokens (admin or authorized minters)
    pub fn mint(&mut self, to: Address, amount: U256) {
        let caller = self.env().caller();
        if !self.is_minter(caller) {
            self.env().revert(BatcherError::Unauthorized);
        }

        let new_supply = self
            .total_supply()
            .checked_add(amount)
            .unwrap_or_else(|| self.env().revert(BatcherError::Overflow));
        self.total_supply.set(new_supply);

        // balance <= total supply
        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
    }

    /// Burn tokens from caller
    pub fn burn(&mut self, amount: U256) {
        let caller = self.env().caller();
        let balance = self.balance_of(caller);
        if balance < amount {
            self.env().revert(BatcherError::InsufficientTokenBalance);
        }

        self.balances.set(&caller, balance - amount);
        self.total_supply.set(self.total_supply() - amount);
    }

    // ========== Admin Functions ==========

    /// Authorize a minter (admin only)
    pub fn add_minter(&mut self, minter: Address) {
        if Some(self.env().caller()) != self.admin.get() {
            self.env().revert(BatcherError::Unauthorized);
        }
        self.minters.set(&minter, true);
    }

    /// Check if address may mint
    pub fn is_minter(&self, account: Address) -> bool {
        Some(account) == self.admin.get() || self.minters.get(&account).unwrap_or(false)
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(BatcherError::InsufficientTokenBalance);
        }
        self.balances.set(&from, from_balance - amount);

        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }
}
