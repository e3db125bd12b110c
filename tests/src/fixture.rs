//! Shared deployment for integration tests.

use dsu_batcher_contracts::mocks::reserve::{MockReserve, MockReserveHostRef, MockReserveInitArgs};
use dsu_batcher_contracts::mocks::token::{MockToken, MockTokenHostRef, MockTokenInitArgs};
use dsu_batcher_contracts::two_way::{TwoWayBatcher, TwoWayBatcherHostRef, TwoWayBatcherInitArgs};
use dsu_batcher_contracts::wrap_only::{WrapOnlyBatcher, WrapOnlyBatcherHostRef, WrapOnlyBatcherInitArgs};
use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

/// Fine tokens lent to every batcher at deployment
pub const SEED: u64 = 1_000_000;
/// Collateral backing the reserve's outstanding loans
pub const RESERVE_COLLATERAL: u64 = 10_000_000;
/// Collateral and synthetic tokens handed to each user
pub const USER_FUNDS: u64 = 1_000_000;

/// `n` whole DSU in fine units
pub fn dsu(n: u64) -> U256 {
    U256::from(n) * U256::exp10(18)
}

/// `n` whole USDC in coarse units
pub fn usdc(n: u64) -> U256 {
    U256::from(n) * U256::exp10(6)
}

pub struct Fixture {
    pub env: HostEnv,
    pub owner: Address,
    pub user: Address,
    pub depositor: Address,
    pub dsu: MockTokenHostRef,
    pub usdc: MockTokenHostRef,
    pub reserve: MockReserveHostRef,
}

impl Fixture {
    /// Deploy tokens and a solvent reserve; fund `user` and `depositor`
    pub fn new() -> Self {
        let env = odra_test::env();
        let owner = env.get_account(0);
        let user = env.get_account(1);
        let depositor = env.get_account(2);

        env.set_caller(owner);
        let mut dsu_token = MockToken::deploy(
            &env,
            MockTokenInitArgs {
                name: String::from("Digital Standard Unit"),
                symbol: String::from("DSU"),
                decimals: 18,
            },
        );
        let mut usdc_token = MockToken::deploy(
            &env,
            MockTokenInitArgs {
                name: String::from("USD Coin"),
                symbol: String::from("USDC"),
                decimals: 6,
            },
        );
        let reserve = MockReserve::deploy(
            &env,
            MockReserveInitArgs {
                fine_token: dsu_token.address().clone(),
                coarse_token: usdc_token.address().clone(),
            },
        );

        dsu_token.add_minter(reserve.address().clone());
        usdc_token.mint(reserve.address().clone(), usdc(RESERVE_COLLATERAL));
        for account in [user, depositor] {
            usdc_token.mint(account, usdc(USER_FUNDS));
            dsu_token.mint(account, dsu(USER_FUNDS));
        }

        Self {
            env,
            owner,
            user,
            depositor,
            dsu: dsu_token,
            usdc: usdc_token,
            reserve,
        }
    }

    /// Deploy a wrap-only batcher seeded with `SEED` borrowed DSU
    pub fn wrap_only(&mut self) -> WrapOnlyBatcherHostRef {
        self.env.set_caller(self.owner);
        let batcher = WrapOnlyBatcher::deploy(
            &self.env,
            WrapOnlyBatcherInitArgs {
                reserve: self.reserve.address().clone(),
                fine_token: self.dsu.address().clone(),
                coarse_token: self.usdc.address().clone(),
            },
        );
        self.seed(batcher.address().clone());
        batcher
    }

    /// Deploy a two-way batcher seeded with `SEED` borrowed DSU
    pub fn two_way(&mut self) -> TwoWayBatcherHostRef {
        self.env.set_caller(self.owner);
        let batcher = TwoWayBatcher::deploy(
            &self.env,
            TwoWayBatcherInitArgs {
                reserve: self.reserve.address().clone(),
                fine_token: self.dsu.address().clone(),
                coarse_token: self.usdc.address().clone(),
            },
        );
        self.seed(batcher.address().clone());
        batcher
    }

    /// Let `user` and `depositor` spend both tokens through `spender`
    pub fn approve_all(&mut self, spender: Address) {
        for account in [self.user, self.depositor] {
            self.env.set_caller(account);
            self.dsu.approve(spender, U256::MAX);
            self.usdc.approve(spender, U256::MAX);
        }
    }

    fn seed(&mut self, batcher: Address) {
        self.reserve.lend(batcher, dsu(SEED));
        self.approve_all(batcher);
    }
}
