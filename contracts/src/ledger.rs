//! Claim ledger for collateral loaned to the pool.
//!
//! Each depositor's claim is in fine units and can only be changed by that
//! depositor's own deposit or withdraw. `total_claims` is kept equal to the sum
//! of all claims incrementally.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::BatcherError;
use crate::units::{exact_coarse, to_coarse};

#[odra::module]
pub struct ClaimLedger {
    /// Outstanding claim per depositor (fine units)
    claims: Mapping<Address, U256>,
    /// Sum of all claims (fine units)
    total_claims: Var<U256>,
}

#[odra::module]
impl ClaimLedger {
    /// Get a depositor's outstanding claim
    pub fn claim_of(&self, depositor: Address) -> U256 {
        self.claims.get(&depositor).unwrap_or(U256::zero())
    }

    /// Get the sum of all outstanding claims
    pub fn total_claims(&self) -> U256 {
        self.total_claims.get().unwrap_or(U256::zero())
    }
}

impl ClaimLedger {
    /// Credit `amount` to `depositor`.
    ///
    /// Returns the coarse amount to pull from the depositor.
    pub(crate) fn record_deposit(
        &mut self,
        depositor: Address,
        amount: U256,
    ) -> Result<U256, BatcherError> {
        exact_coarse(amount)?;

        let claim = self
            .claim_of(depositor)
            .checked_add(amount)
            .ok_or(BatcherError::Overflow)?;
        let total = self
            .total_claims()
            .checked_add(amount)
            .ok_or(BatcherError::Overflow)?;

        self.claims.set(&depositor, claim);
        self.total_claims.set(total);

        Ok(to_coarse(amount, true))
    }

    /// Check that `depositor` may withdraw `amount` without changing state.
    pub(crate) fn check_withdraw(&self, depositor: Address, amount: U256) -> Result<(), BatcherError> {
        exact_coarse(amount)?;
        if self.claim_of(depositor) < amount {
            return Err(BatcherError::InsufficientClaim);
        }
        Ok(())
    }

    /// Debit `amount` from `depositor`.
    ///
    /// Returns the coarse amount to push to the depositor.
    pub(crate) fn record_withdraw(
        &mut self,
        depositor: Address,
        amount: U256,
    ) -> Result<U256, BatcherError> {
        exact_coarse(amount)?;

        let claim = self
            .claim_of(depositor)
            .checked_sub(amount)
            .ok_or(BatcherError::InsufficientClaim)?;
        // total >= any single claim, so this only fails on a corrupted ledger
        let total = self
            .total_claims()
            .checked_sub(amount)
            .ok_or(BatcherError::Overflow)?;

        self.claims.set(&depositor, claim);
        self.total_claims.set(total);

        Ok(to_coarse(amount, false))
    }
}
