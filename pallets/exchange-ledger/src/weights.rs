#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn transfer() -> Weight;
  fn approve() -> Weight;
  fn transfer_from() -> Weight;
  fn increase_allowance() -> Weight;
  fn decrease_allowance() -> Weight;
  fn mint() -> Weight;
  fn burn() -> Weight;
  fn buy() -> Weight;
  fn sell() -> Weight;
  fn set_price() -> Weight;
  fn disburse_referral() -> Weight;
  fn transfer_ownership() -> Weight;
  fn set_buy_tax_rate() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn transfer() -> Weight {
    Weight::from_parts(20_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn approve() -> Weight {
    Weight::from_parts(12_000_000, 900)
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn transfer_from() -> Weight {
    Weight::from_parts(28_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn increase_allowance() -> Weight {
    Weight::from_parts(14_000_000, 900)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn decrease_allowance() -> Weight {
    Weight::from_parts(14_000_000, 900)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn mint() -> Weight {
    Weight::from_parts(18_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn burn() -> Weight {
    Weight::from_parts(18_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn buy() -> Weight {
    Weight::from_parts(45_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(6))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn sell() -> Weight {
    Weight::from_parts(45_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(6))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn set_price() -> Weight {
    Weight::from_parts(10_000_000, 600)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn disburse_referral() -> Weight {
    Weight::from_parts(22_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn transfer_ownership() -> Weight {
    Weight::from_parts(10_000_000, 600)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn set_buy_tax_rate() -> Weight {
    Weight::from_parts(10_000_000, 600)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn transfer() -> Weight { Weight::from_parts(20_000_000, 1500).saturating_add(RocksDbWeight::get().reads_writes(2, 2)) }
  fn approve() -> Weight { Weight::from_parts(12_000_000, 900).saturating_add(RocksDbWeight::get().reads_writes(0, 1)) }
  fn transfer_from() -> Weight { Weight::from_parts(28_000_000, 2200).saturating_add(RocksDbWeight::get().reads_writes(3, 3)) }
  fn increase_allowance() -> Weight { Weight::from_parts(14_000_000, 900).saturating_add(RocksDbWeight::get().reads_writes(1, 1)) }
  fn decrease_allowance() -> Weight { Weight::from_parts(14_000_000, 900).saturating_add(RocksDbWeight::get().reads_writes(1, 1)) }
  fn mint() -> Weight { Weight::from_parts(18_000_000, 1200).saturating_add(RocksDbWeight::get().reads_writes(3, 2)) }
  fn burn() -> Weight { Weight::from_parts(18_000_000, 1200).saturating_add(RocksDbWeight::get().reads_writes(3, 2)) }
  fn buy() -> Weight { Weight::from_parts(45_000_000, 3600).saturating_add(RocksDbWeight::get().reads_writes(6, 5)) }
  fn sell() -> Weight { Weight::from_parts(45_000_000, 3600).saturating_add(RocksDbWeight::get().reads_writes(6, 5)) }
  fn set_price() -> Weight { Weight::from_parts(10_000_000, 600).saturating_add(RocksDbWeight::get().reads_writes(2, 1)) }
  fn disburse_referral() -> Weight { Weight::from_parts(22_000_000, 1500).saturating_add(RocksDbWeight::get().reads_writes(3, 2)) }
  fn transfer_ownership() -> Weight { Weight::from_parts(10_000_000, 600).saturating_add(RocksDbWeight::get().reads_writes(1, 1)) }
  fn set_buy_tax_rate() -> Weight { Weight::from_parts(10_000_000, 600).saturating_add(RocksDbWeight::get().reads_writes(2, 1)) }
}
