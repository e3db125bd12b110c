//! DSU Batcher Integration Tests
//!
//! Contract-level tests running on the Odra VM. Each test deploys fresh mock
//! tokens, a mock reserve and the contracts under test.

#[cfg(test)]
mod fixture;



#[cfg(test)]
mod close_tests;
