#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::types::params::UNIT_SCALE;
use frame::deps::frame_support::traits::fungible::Mutate;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

const SEED: u32 = 0;

fn install_administrator<T: Config>() -> T::AccountId {
  let administrator: T::AccountId = account("administrator", 0, SEED);
  Administrator::<T>::put(&administrator);
  Pricing::<T>::put(PricingState::default());
  Pallet::<T>::mint_into(&administrator, 1_000 * UNIT_SCALE).unwrap();
  administrator
}

fn fund_native<T: Config>(who: &T::AccountId, amount: Balance) {
  T::Currency::set_balance(who, amount);
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn transfer() {
    let administrator = install_administrator::<T>();
    let recipient: T::AccountId = account("recipient", 0, SEED);

    #[extrinsic_call]
    transfer(RawOrigin::Signed(administrator), recipient.clone(), UNIT_SCALE);

    assert_eq!(Pallet::<T>::balance_of(&recipient), UNIT_SCALE);
  }

  #[benchmark]
  fn approve() {
    let owner: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);

    #[extrinsic_call]
    approve(RawOrigin::Signed(owner.clone()), spender.clone(), UNIT_SCALE);

    assert_eq!(Pallet::<T>::allowance(&owner, &spender), UNIT_SCALE);
  }

  #[benchmark]
  fn transfer_from() {
    let administrator = install_administrator::<T>();
    let spender: T::AccountId = whitelisted_caller();
    let recipient: T::AccountId = account("recipient", 0, SEED);
    Pallet::<T>::set_allowance(&administrator, &spender, 2 * UNIT_SCALE).unwrap();

    #[extrinsic_call]
    transfer_from(
      RawOrigin::Signed(spender.clone()),
      administrator.clone(),
      recipient.clone(),
      UNIT_SCALE,
    );

    assert_eq!(Pallet::<T>::balance_of(&recipient), UNIT_SCALE);
    assert_eq!(Pallet::<T>::allowance(&administrator, &spender), UNIT_SCALE);
  }

  #[benchmark]
  fn increase_allowance() {
    let owner: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);
    Pallet::<T>::set_allowance(&owner, &spender, UNIT_SCALE).unwrap();

    #[extrinsic_call]
    increase_allowance(RawOrigin::Signed(owner.clone()), spender.clone(), UNIT_SCALE);

    assert_eq!(Pallet::<T>::allowance(&owner, &spender), 2 * UNIT_SCALE);
  }

  #[benchmark]
  fn decrease_allowance() {
    let owner: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);
    Pallet::<T>::set_allowance(&owner, &spender, 2 * UNIT_SCALE).unwrap();

    #[extrinsic_call]
    decrease_allowance(RawOrigin::Signed(owner.clone()), spender.clone(), UNIT_SCALE);

    assert_eq!(Pallet::<T>::allowance(&owner, &spender), UNIT_SCALE);
  }

  #[benchmark]
  fn mint() {
    let administrator = install_administrator::<T>();
    let holder: T::AccountId = account("holder", 0, SEED);

    #[extrinsic_call]
    mint(RawOrigin::Signed(administrator), holder.clone(), UNIT_SCALE);

    assert_eq!(Pallet::<T>::balance_of(&holder), UNIT_SCALE);
  }

  #[benchmark]
  fn burn() {
    let administrator = install_administrator::<T>();

    #[extrinsic_call]
    burn(
      RawOrigin::Signed(administrator.clone()),
      administrator.clone(),
      UNIT_SCALE,
    );

    assert_eq!(Pallet::<T>::balance_of(&administrator), 999 * UNIT_SCALE);
  }

  #[benchmark]
  fn buy() {
    install_administrator::<T>();
    let buyer: T::AccountId = whitelisted_caller();
    let payment = 26_000_000_000_000_000;
    fund_native::<T>(&buyer, 100 * UNIT_SCALE);

    #[extrinsic_call]
    buy(RawOrigin::Signed(buyer.clone()), payment);

    assert_eq!(Pallet::<T>::balance_of(&buyer), 7 * UNIT_SCALE);
  }

  #[benchmark]
  fn sell() {
    let administrator = install_administrator::<T>();
    let seller: T::AccountId = whitelisted_caller();
    Pallet::<T>::transfer_between(&administrator, &seller, UNIT_SCALE).unwrap();
    fund_native::<T>(&Pallet::<T>::account_id(), 100 * UNIT_SCALE);

    #[extrinsic_call]
    sell(RawOrigin::Signed(seller.clone()), 1);

    assert_eq!(Pallet::<T>::balance_of(&seller), 0);
  }

  #[benchmark]
  fn set_price() {
    let administrator = install_administrator::<T>();
    let new_price = 5_200_000_000_000_000;

    #[extrinsic_call]
    set_price(RawOrigin::Signed(administrator), new_price);

    assert_eq!(Pallet::<T>::current_price(), new_price);
  }

  #[benchmark]
  fn disburse_referral() {
    let administrator = install_administrator::<T>();
    let referred: T::AccountId = account("referred", 0, SEED);

    #[extrinsic_call]
    disburse_referral(
      RawOrigin::Signed(administrator),
      referred.clone(),
      UNIT_SCALE,
    );

    assert_eq!(Pallet::<T>::balance_of(&referred), UNIT_SCALE);
  }

  #[benchmark]
  fn transfer_ownership() {
    let administrator = install_administrator::<T>();
    let successor: T::AccountId = account("successor", 0, SEED);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(administrator), successor.clone());

    assert_eq!(Pallet::<T>::administrator(), Some(successor));
  }

  #[benchmark]
  fn set_buy_tax_rate() {
    let administrator = install_administrator::<T>();

    #[extrinsic_call]
    set_buy_tax_rate(RawOrigin::Signed(administrator), 100);

    assert_eq!(Pallet::<T>::pricing().buy_tax_rate, 100);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
