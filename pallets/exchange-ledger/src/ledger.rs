//! Ledger store.
//!
//! The functions here are the only writers of `AccountBalances`, `Allowances` and
//! `TotalSupply`; every change to a balance also changes the supply or the opposite balance by
//! the same amount.

use crate::{
  AccountBalances, Allowances, Config, Error, Event, LOG_TARGET, Pallet, TotalSupply,
  arithmetic::{self, ArithmeticFault},
  types::Balance,
};
use frame::deps::frame_support::storage::with_storage_layer;
use frame::prelude::*;

const BURN_EXCEEDS_BALANCE: &str = "burn amount exceeds balance";
const TRANSFER_EXCEEDS_BALANCE: &str = "transfer amount exceeds balance";
const TRANSFER_EXCEEDS_ALLOWANCE: &str = "transfer amount exceeds allowance";
const ALLOWANCE_BELOW_ZERO: &str = "decreased allowance below zero";

impl<T: Config> Pallet<T> {
  /// Whether `who` encodes to all zero bytes.
  pub fn is_null(who: &T::AccountId) -> bool {
    who.using_encoded(|bytes| bytes.iter().all(|byte| *byte == 0))
  }

  fn ensure_not_null(who: &T::AccountId) -> DispatchResult {
    ensure!(!Self::is_null(who), Error::<T>::NullAccount);
    Ok(())
  }

  fn reject(fault: ArithmeticFault, error: Error<T>) -> Error<T> {
    log::debug!(target: LOG_TARGET, "rejected: {}", fault.cause);
    error
  }

  /// Create `amount` units in `account`.
  pub fn mint_into(account: &T::AccountId, amount: Balance) -> DispatchResult {
    Self::ensure_not_null(account)?;
    let supply = arithmetic::add(TotalSupply::<T>::get(), amount, None).map_err(Error::<T>::from)?;
    let balance =
      arithmetic::add(AccountBalances::<T>::get(account), amount, None).map_err(Error::<T>::from)?;
    TotalSupply::<T>::put(supply);
    AccountBalances::<T>::insert(account, balance);
    Self::deposit_event(Event::Transfer {
      from: None,
      to: Some(account.clone()),
      amount,
    });
    Ok(())
  }

  /// Destroy `amount` units held by `account`.
  pub fn burn_from(account: &T::AccountId, amount: Balance) -> DispatchResult {
    Self::ensure_not_null(account)?;
    let balance = arithmetic::sub(
      AccountBalances::<T>::get(account),
      amount,
      Some(BURN_EXCEEDS_BALANCE),
    )
    .map_err(|fault| Self::reject(fault, Error::<T>::InsufficientBalance))?;
    let supply = arithmetic::sub(TotalSupply::<T>::get(), amount, None).map_err(Error::<T>::from)?;
    TotalSupply::<T>::put(supply);
    AccountBalances::<T>::insert(account, balance);
    Self::deposit_event(Event::Transfer {
      from: Some(account.clone()),
      to: None,
      amount,
    });
    Ok(())
  }

  /// Move `amount` units from `sender` to `recipient`. Both sides are computed before either
  /// is written.
  pub fn transfer_between(
    sender: &T::AccountId,
    recipient: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    Self::ensure_not_null(sender)?;
    Self::ensure_not_null(recipient)?;
    let sender_balance = arithmetic::sub(
      AccountBalances::<T>::get(sender),
      amount,
      Some(TRANSFER_EXCEEDS_BALANCE),
    )
    .map_err(|fault| Self::reject(fault, Error::<T>::InsufficientBalance))?;
    if sender != recipient {
      let recipient_balance = arithmetic::add(AccountBalances::<T>::get(recipient), amount, None)
        .map_err(Error::<T>::from)?;
      AccountBalances::<T>::insert(sender, sender_balance);
      AccountBalances::<T>::insert(recipient, recipient_balance);
    }
    Self::deposit_event(Event::Transfer {
      from: Some(sender.clone()),
      to: Some(recipient.clone()),
      amount,
    });
    Ok(())
  }

  /// Overwrite the allowance of `spender` over `owner`.
  pub fn set_allowance(
    owner: &T::AccountId,
    spender: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    Self::ensure_not_null(owner)?;
    Self::ensure_not_null(spender)?;
    Allowances::<T>::insert(owner, spender, amount);
    Self::deposit_event(Event::Approved {
      owner: owner.clone(),
      spender: spender.clone(),
      amount,
    });
    Ok(())
  }

  /// Consume `amount` of the allowance of `spender` over `owner`.
  pub fn spend_allowance(
    owner: &T::AccountId,
    spender: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    let remaining = arithmetic::sub(
      Allowances::<T>::get(owner, spender),
      amount,
      Some(TRANSFER_EXCEEDS_ALLOWANCE),
    )
    .map_err(|fault| Self::reject(fault, Error::<T>::InsufficientAllowance))?;
    Self::set_allowance(owner, spender, remaining)
  }

  /// Transfer out of `owner` on behalf of `spender`. A missing allowance also undoes the
  /// balance change.
  pub fn do_transfer_from(
    spender: &T::AccountId,
    owner: &T::AccountId,
    recipient: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    with_storage_layer(|| {
      Self::transfer_between(owner, recipient, amount)?;
      Self::spend_allowance(owner, spender, amount)
    })
  }

  pub fn do_increase_allowance(
    owner: &T::AccountId,
    spender: &T::AccountId,
    delta: Balance,
  ) -> DispatchResult {
    let allowance = arithmetic::add(Allowances::<T>::get(owner, spender), delta, None)
      .map_err(Error::<T>::from)?;
    Self::set_allowance(owner, spender, allowance)
  }

  pub fn do_decrease_allowance(
    owner: &T::AccountId,
    spender: &T::AccountId,
    delta: Balance,
  ) -> DispatchResult {
    let allowance = arithmetic::sub(
      Allowances::<T>::get(owner, spender),
      delta,
      Some(ALLOWANCE_BELOW_ZERO),
    )
    .map_err(|fault| Self::reject(fault, Error::<T>::InsufficientAllowance))?;
    Self::set_allowance(owner, spender, allowance)
  }
}
