//! Exchange flows wiring pricing quotes into ledger mutations.
//!
//! Buys collect the full payment into the reserve account; the tax simply stays there. Sells
//! burn before paying out so that the ledger is settled before any native currency moves.

use crate::{Administrator, Config, Error, Event, LOG_TARGET, Pallet, Pricing, types::Balance};
use frame::deps::frame_support::{
  storage::with_storage_layer,
  traits::{fungible::Mutate, tokens::Preservation},
};
use frame::prelude::*;

impl<T: Config> Pallet<T> {
  /// Returns the administrator, rejecting the administrator itself as a trader.
  fn ensure_trader(who: &T::AccountId) -> Result<T::AccountId, DispatchError> {
    let administrator = Administrator::<T>::get().ok_or(Error::<T>::AdministratorNotSet)?;
    ensure!(&administrator != who, Error::<T>::AdministratorCannotTrade);
    Ok(administrator)
  }

  /// Units (in subunits) a buy of `payment` would mint at the current price.
  pub fn quote_buy(payment: Balance) -> Result<Balance, DispatchError> {
    let units = Pricing::<T>::get().quote_buy(payment).map_err(Error::<T>::from)?;
    Ok(units)
  }

  /// Native payout for selling `units` whole units at the current price.
  pub fn quote_sell(units: Balance) -> Result<Balance, DispatchError> {
    let payout = Pricing::<T>::get().quote_sell(units).map_err(Error::<T>::from)?;
    Ok(payout)
  }

  /// Take `payment` from `buyer` and mint the quoted units to the buyer and, as reserve
  /// bookkeeping, the same amount to the administrator.
  pub fn do_buy(buyer: &T::AccountId, payment: Balance) -> Result<Balance, DispatchError> {
    let administrator = Self::ensure_trader(buyer)?;
    ensure!(payment > 0, Error::<T>::ZeroAmount);
    let units = Self::quote_buy(payment)?;

    with_storage_layer(|| {
      T::Currency::transfer(
        buyer,
        &Self::account_id(),
        payment,
        Preservation::Expendable,
      )?;
      Self::mint_into(buyer, units)?;
      Self::mint_into(&administrator, units)?;
      Self::deposit_event(Event::Buy {
        buyer: buyer.clone(),
        amount: payment,
      });
      Ok(units)
    })
  }

  /// Burn `units` whole units from `seller` and the administrator, then pay the seller from
  /// the reserve account.
  pub fn do_sell(seller: &T::AccountId, units: Balance) -> Result<Balance, DispatchError> {
    let administrator = Self::ensure_trader(seller)?;
    ensure!(units > 0, Error::<T>::ZeroAmount);
    let pricing = Pricing::<T>::get();
    let scaled = pricing.scale_units(units).map_err(Error::<T>::from)?;
    if scaled > Self::balance_of(seller) {
      log::debug!(
        target: LOG_TARGET,
        "not enough tokens to transact: {seller:?} sells {scaled}"
      );
      return Err(Error::<T>::InsufficientBalance.into());
    }
    let payout = pricing.quote_sell(units).map_err(Error::<T>::from)?;

    with_storage_layer(|| {
      Self::burn_from(seller, scaled)?;
      Self::burn_from(&administrator, scaled)?;
      T::Currency::transfer(
        &Self::account_id(),
        seller,
        payout,
        Preservation::Expendable,
      )?;
      Self::deposit_event(Event::Sell {
        seller: seller.clone(),
        amount: payout,
      });
      Ok(payout)
    })
  }

  /// Reallocate `amount` units from the administrator's balance to `account`.
  pub fn do_disburse_referral(
    administrator: &T::AccountId,
    account: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    Self::transfer_between(administrator, account, amount)?;
    Self::deposit_event(Event::ReferralDisbursed {
      account: account.clone(),
      amount,
    });
    Ok(())
  }
}
