//! Closing a batcher: debt repayment, sweep to owner, claims left untouched.

use crate::fixture::{dsu, usdc, Fixture, SEED, USER_FUNDS};
use dsu_batcher_contracts::errors::BatcherError;
use dsu_batcher_contracts::events::Close;
use odra::casper_types::U256;
use odra::host::HostRef;
use odra::prelude::Addressable;
use pretty_assertions::assert_eq;

#[test]
fn test_wrap_only_close_repays_debt() {
    let mut f = Fixture::new();
    let mut batcher = f.wrap_only();
    let pool = batcher.address().clone();

    f.env.set_caller(f.user);
    batcher.wrap(dsu(100), f.user);

    f.env.set_caller(f.owner);
    batcher.close();

    assert_eq!(f.reserve.debt(pool), U256::zero());
    assert_eq!(f.dsu.balance_of(pool), U256::zero());
    assert_eq!(f.usdc.balance_of(pool), U256::zero());
    assert!(f.env.emitted_event(&pool, Close { balance: dsu(SEED) }));
}

#[test]
fn test_close_sweeps_excess_to_owner() {
    let mut f = Fixture::new();
    let mut batcher = f.wrap_only();
    let pool = batcher.address().clone();

    f.env.set_caller(f.user);
    batcher.wrap(dsu(100), f.user);
    f.dsu.transfer(pool, dsu(50));

    f.env.set_caller(f.owner);
    batcher.close();

    assert_eq!(f.reserve.debt(pool), U256::zero());
    assert_eq!(f.reserve.redeem_count(), 1);
    assert_eq!(f.usdc.balance_of(f.owner), usdc(50));
    assert_eq!(f.usdc.balance_of(pool), U256::zero());
    assert!(f.env.emitted_event(&pool, Close { balance: dsu(SEED) + dsu(50) }));
}

#[test]
fn test_close_leaves_sub_unit_residue() {
    let mut f = Fixture::new();
    let mut batcher = f.wrap_only();
    let pool = batcher.address().clone();

    // collects 100.000001 USDC for 100 DSU + 1 wei
    f.env.set_caller(f.user);
    batcher.wrap(dsu(100) + U256::one(), f.user);

    f.env.set_caller(f.owner);
    batcher.close();

    let residue = U256::exp10(12) - U256::one();
    assert_eq!(f.reserve.debt(pool), U256::zero());
    assert_eq!(f.reserve.redeem_count(), 0);
    assert_eq!(f.dsu.balance_of(pool), residue);
    assert_eq!(f.usdc.balance_of(f.owner), U256::zero());
    assert!(f.env.emitted_event(&pool, Close { balance: dsu(SEED) + residue }));
}

#[test]
fn test_close_requires_owner() {
    let mut f = Fixture::new();
    let mut wrap_only = f.wrap_only();
    let mut two_way = f.two_way();

    f.env.set_caller(f.user);
    assert_eq!(wrap_only.try_close(), Err(BatcherError::NotOwner.into()));
    assert_eq!(two_way.try_close(), Err(BatcherError::NotOwner.into()));
    assert_eq!(f.reserve.debt(wrap_only.address().clone()), dsu(SEED));
}

#[test]
fn test_two_way_close_keeps_claimed_collateral() {
    let mut f = Fixture::new();
    let mut batcher = f.two_way();
    let pool = batcher.address().clone();

    f.env.set_caller(f.depositor);
    batcher.deposit(dsu(500));
    f.env.set_caller(f.user);
    batcher.wrap(dsu(100), f.user);
    f.dsu.transfer(pool, dsu(30));

    f.env.set_caller(f.owner);
    batcher.close();

    assert_eq!(f.reserve.debt(pool), U256::zero());
    assert_eq!(f.usdc.balance_of(pool), usdc(500));
    assert_eq!(f.usdc.balance_of(f.owner), usdc(30));
    assert_eq!(batcher.total_claims(), dsu(500));

    // depositors can still exit after close
    f.env.set_caller(f.depositor);
    batcher.withdraw(dsu(500));
    assert_eq!(f.usdc.balance_of(f.depositor), usdc(USER_FUNDS));
    assert_eq!(f.usdc.balance_of(pool), U256::zero());
}

#[test]
fn test_close_without_debt() {
    let mut f = Fixture::new();
    let mut batcher = f.two_way();
    let pool = batcher.address().clone();

    f.env.set_caller(f.owner);
    batcher.close();
    assert_eq!(f.reserve.debt(pool), U256::zero());

    // a second close has nothing to repay or sweep
    batcher.close();
    assert_eq!(f.reserve.debt(pool), U256::zero());
    assert_eq!(f.dsu.balance_of(pool), U256::zero());
    assert!(f.env.emitted_event(&pool, Close { balance: U256::zero() }));
}

#[test]
fn test_close_after_degraded_redeem_keeps_claimed_collateral() {
    let mut f = Fixture::new();
    let mut batcher = f.two_way();
    let pool = batcher.address().clone();

    f.env.set_caller(f.depositor);
    batcher.deposit(dsu(500));
    f.env.set_caller(f.user);
    batcher.unwrap(dsu(300), f.user);
    f.reserve.set_redeem_ratio(U256::from(900_000_000_000_000_000u64));
    batcher.rebalance();

    // close redeems the last 30 DSU at 90%, leaving less DSU than debt
    f.env.set_caller(f.owner);
    batcher.close();

    assert_eq!(f.reserve.debt(pool), dsu(30));
    assert_eq!(f.dsu.balance_of(pool), U256::zero());
    assert_eq!(f.usdc.balance_of(pool), usdc(497));
    assert_eq!(f.usdc.balance_of(f.owner), U256::zero());
    assert_eq!(batcher.total_claims(), dsu(500));
    assert!(f.env.emitted_event(&pool, Close { balance: dsu(SEED) - dsu(30) }));

    // the pool stays closable
    batcher.close();
    assert_eq!(f.reserve.debt(pool), dsu(30));
    assert!(f.env.emitted_event(&pool, Close { balance: U256::zero() }));
}
