extern crate alloc;

use crate as pallet_exchange_ledger;
use crate::types::{
  PricingState,
  params::{DEFAULT_INITIAL_SUPPLY, EXCHANGE_LEDGER_PALLET_ID, UNIT_SCALE},
};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{AccountIdConversion, BlakeTwo256, IdentityLookup},
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
pub const NULL: u64 = 0;

/// Native balance of every funded trader at genesis
pub const TRADER_FUNDS: u128 = 100 * UNIT_SCALE;
/// Native balance of the reserve account at genesis
pub const RESERVE_FUNDS: u128 = 1_000_000 * UNIT_SCALE;
/// Launch price, payment subunits per whole unit
pub const LAUNCH_PRICE: u128 = 2_600_000_000_000_000;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    ExchangeLedger: pallet_exchange_ledger,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

pub struct ExchangeLedgerPalletId;
impl Get<PalletId> for ExchangeLedgerPalletId {
  fn get() -> PalletId {
    PalletId(*EXCHANGE_LEDGER_PALLET_ID)
  }
}

impl pallet_exchange_ledger::Config for Test {
  type Currency = Balances;
  type PalletId = ExchangeLedgerPalletId;
  type StringLimit = ConstU32<32>;
  type WeightInfo = ();
}

/// Reserve account derived without touching storage, usable while building genesis
pub fn reserve_account() -> u64 {
  ExchangeLedgerPalletId::get().into_account_truncating()
}

pub fn launch_pricing() -> PricingState {
  PricingState {
    unit_price: LAUNCH_PRICE,
    buy_tax_rate: 225,
    unit_scale: UNIT_SCALE,
  }
}

/// Ledger genesis used by the test externalities: launch pricing and the default supply
pub fn launch_genesis(administrator: Option<u64>) -> pallet_exchange_ledger::GenesisConfig<Test> {
  pallet_exchange_ledger::GenesisConfig::<Test> {
    administrator,
    initial_supply: DEFAULT_INITIAL_SUPPLY,
    name: b"Exchange Token".to_vec(),
    symbol: b"EXT".to_vec(),
    decimals: 18,
    pricing: launch_pricing(),
  }
}

pub fn build_ext(
  ledger_genesis: pallet_exchange_ledger::GenesisConfig<Test>,
  reserve_funds: u128,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  let mut balances = alloc::vec![
    (ADMIN, TRADER_FUNDS),
    (ALICE, TRADER_FUNDS),
    (BOB, TRADER_FUNDS),
  ];
  if reserve_funds > 0 {
    balances.push((reserve_account(), reserve_funds));
  }
  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances,
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  ledger_genesis.assimilate_storage(&mut t).unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(launch_genesis(Some(ADMIN)), RESERVE_FUNDS)
}

/// Genesis with an empty reserve account, so sell payouts cannot be funded
pub fn new_test_ext_unfunded_reserve() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(launch_genesis(Some(ADMIN)), 0)
}

/// Genesis without an administrator and therefore without an initial supply
pub fn new_test_ext_without_administrator() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(launch_genesis(None), RESERVE_FUNDS)
}
