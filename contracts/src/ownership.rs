//! Two-step ownership.
//!
//! The owner nominates a pending owner, who must accept before the transfer
//! takes effect. Used by the batchers (for `close`) and by the wrapper.

use odra::prelude::*;
use crate::errors::BatcherError;
use crate::events::{OwnerUpdated, PendingOwnerUpdated};

#[odra::module(events = [OwnerUpdated, PendingOwnerUpdated])]
pub struct Ownership {
    /// Current owner
    owner: Var<Address>,
    /// Nominated owner awaiting acceptance
    pending_owner: Var<Option<Address>>,
}

#[odra::module]
impl Ownership {
    /// Initialize with the first owner
    pub fn init(&mut self, owner: Address) {
        self.owner.set(owner);
        self.pending_owner.set(None);
        self.env().emit_event(OwnerUpdated { owner });
    }

    /// Get current owner
    pub fn owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(BatcherError::NotConfigured),
        }
    }

    /// Get pending owner, if any
    pub fn pending_owner(&self) -> Option<Address> {
        self.pending_owner.get().flatten()
    }

    /// Nominate a new owner (owner only)
    pub fn update_pending_owner(&mut self, pending_owner: Address) {
        self.require_owner();
        self.pending_owner.set(Some(pending_owner));
        self.env().emit_event(PendingOwnerUpdated { pending_owner });
    }

    /// Accept a nomination (pending owner only)
    pub fn accept_owner(&mut self) {
        let caller = self.env().caller();
        if self.pending_owner() != Some(caller) {
            self.env().revert(BatcherError::NotPendingOwner);
        }

        self.owner.set(caller);
        self.pending_owner.set(None);
        self.env().emit_event(OwnerUpdated { owner: caller });
    }
}

impl Ownership {
    /// Revert unless the caller is the owner
    pub(crate) fn require_owner(&self) {
        if self.env().caller() != self.owner() {
            self.env().revert(BatcherError::NotOwner);
        }
    }
}
