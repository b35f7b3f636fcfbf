//! Exchange Ledger Pallet
//!
//! Fungible unit ledger with delegated allowances and an administrator-priced exchange: any
//! account other than the administrator can buy units with the native currency and sell them
//! back at the current price less a 1% haircut.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod arithmetic;
mod exchange;
mod ledger;
pub mod pricing;
pub mod types;
pub use types::{Balance, PricingState};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::exchange-ledger";

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use crate::{
    arithmetic::{ArithmeticFault, FaultKind},
    types::{
      Balance, PricingState,
      params::{DECIMALS, DEFAULT_INITIAL_SUPPLY, TAX_RATE_DENOMINATOR},
    },
  };
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::traits::fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
    sp_runtime::traits::AccountIdConversion,
  };
  use frame::prelude::*;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Native currency taken on buys and paid out on sells
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Pallet ID of the reserve account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Maximum length of the token name and symbol
    #[pallet::constant]
    type StringLimit: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  #[pallet::storage_version(STORAGE_VERSION)]
  pub struct Pallet<T>(_);

  /// The current storage version.
  const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

  /// Unit balance per account
  #[pallet::storage]
  pub type AccountBalances<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

  /// Units a spender may move out of an owner's balance, keyed by (owner, spender)
  #[pallet::storage]
  pub type Allowances<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    Balance,
    ValueQuery,
  >;

  /// Sum of all account balances
  #[pallet::storage]
  pub type TotalSupply<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Current unit price, buy tax rate and unit scale
  #[pallet::storage]
  pub type Pricing<T: Config> = StorageValue<_, PricingState, ValueQuery>;

  /// The single account allowed to mint, burn, reprice and disburse referrals
  #[pallet::storage]
  pub type Administrator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  pub type TokenName<T: Config> = StorageValue<_, BoundedVec<u8, T::StringLimit>, ValueQuery>;

  #[pallet::storage]
  pub type TokenSymbol<T: Config> = StorageValue<_, BoundedVec<u8, T::StringLimit>, ValueQuery>;

  #[pallet::storage]
  pub type TokenDecimals<T: Config> = StorageValue<_, u8, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Units moved. `from` is `None` for mints and `to` is `None` for burns.
    Transfer {
      from: Option<T::AccountId>,
      to: Option<T::AccountId>,
      amount: Balance,
    },
    /// Allowance of `spender` over `owner` set to `amount`
    Approved {
      owner: T::AccountId,
      spender: T::AccountId,
      amount: Balance,
    },
    /// Units bought for a gross native payment of `amount`
    Buy { buyer: T::AccountId, amount: Balance },
    /// Units sold for a native payout of `amount`
    Sell {
      seller: T::AccountId,
      amount: Balance,
    },
    OwnershipTransferred {
      previous: Option<T::AccountId>,
      new: T::AccountId,
    },
    PriceUpdated {
      old_price: Balance,
      new_price: Balance,
    },
    BuyTaxRateUpdated { old_rate: Balance, new_rate: Balance },
    /// Units reallocated from the administrator to a referred account
    ReferralDisbursed {
      account: T::AccountId,
      amount: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Addition overflow
    Overflow,
    /// Subtraction underflow
    Underflow,
    /// Multiplication overflow
    MulOverflow,
    /// Division by zero
    DivByZero,
    /// Modulo by zero
    ModByZero,
    /// The null account cannot hold, send or approve units
    NullAccount,
    /// Amount exceeds the account balance
    InsufficientBalance,
    /// Amount exceeds the approved allowance
    InsufficientAllowance,
    /// Caller is not the administrator
    NotAdministrator,
    /// No administrator is configured
    AdministratorNotSet,
    /// The administrator cannot buy or sell units
    AdministratorCannotTrade,
    /// Zero amount not allowed
    ZeroAmount,
    /// Buy tax rate above 1000 parts per thousand
    InvalidTaxRate,
  }

  impl<T: Config> From<ArithmeticFault> for Error<T> {
    fn from(fault: ArithmeticFault) -> Self {
      log::debug!(target: crate::LOG_TARGET, "arithmetic fault: {fault}");
      match fault.kind {
        FaultKind::Overflow => Error::<T>::Overflow,
        FaultKind::Underflow => Error::<T>::Underflow,
        FaultKind::MulOverflow => Error::<T>::MulOverflow,
        FaultKind::DivByZero => Error::<T>::DivByZero,
        FaultKind::ModByZero => Error::<T>::ModByZero,
      }
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Move units from the caller to `recipient`
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(
      origin: OriginFor<T>,
      recipient: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let sender = ensure_signed(origin)?;
      Self::transfer_between(&sender, &recipient, amount)
    }

    /// Overwrite the allowance of `spender` over the caller's balance
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::set_allowance(&owner, &spender, amount)
    }

    /// Move units out of `owner` using the caller's allowance
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      owner: T::AccountId,
      recipient: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let spender = ensure_signed(origin)?;
      Self::do_transfer_from(&spender, &owner, &recipient, amount)
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::increase_allowance())]
    pub fn increase_allowance(
      origin: OriginFor<T>,
      spender: T::AccountId,
      delta: Balance,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::do_increase_allowance(&owner, &spender, delta)
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::decrease_allowance())]
    pub fn decrease_allowance(
      origin: OriginFor<T>,
      spender: T::AccountId,
      delta: Balance,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::do_decrease_allowance(&owner, &spender, delta)
    }

    /// Create units in `account` (administrator only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(origin: OriginFor<T>, account: T::AccountId, amount: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      Self::mint_into(&account, amount)
    }

    /// Destroy units held by `account` (administrator only)
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(origin: OriginFor<T>, account: T::AccountId, amount: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      Self::burn_from(&account, amount)
    }

    /// Pay `payment` in native currency for units at the current price
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::buy())]
    pub fn buy(origin: OriginFor<T>, payment: Balance) -> DispatchResult {
      let buyer = ensure_signed(origin)?;
      Self::do_buy(&buyer, payment).map(|_| ())
    }

    /// Sell `units` whole units back for native currency
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::sell())]
    pub fn sell(origin: OriginFor<T>, units: Balance) -> DispatchResult {
      let seller = ensure_signed(origin)?;
      Self::do_sell(&seller, units).map(|_| ())
    }

    /// Update the unit price (administrator only)
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::set_price())]
    pub fn set_price(origin: OriginFor<T>, new_price: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      ensure!(new_price > 0, Error::<T>::ZeroAmount);
      let old_price = Pricing::<T>::mutate(|pricing| {
        let old_price = pricing.unit_price;
        pricing.unit_price = new_price;
        old_price
      });
      log::info!(target: crate::LOG_TARGET, "unit price updated {old_price} -> {new_price}");
      Self::deposit_event(Event::PriceUpdated {
        old_price,
        new_price,
      });
      Ok(())
    }

    /// Move units from the administrator to a referred account (administrator only)
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::disburse_referral())]
    pub fn disburse_referral(
      origin: OriginFor<T>,
      account: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      Self::do_disburse_referral(&who, &account, amount)
    }

    /// Hand the administrator role to another account (administrator only)
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(
      origin: OriginFor<T>,
      new_administrator: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      Self::set_administrator(new_administrator)
    }

    /// Update the buy tax rate in parts per thousand (administrator only)
    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::set_buy_tax_rate())]
    pub fn set_buy_tax_rate(origin: OriginFor<T>, new_rate: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_administrator(&who)?;
      ensure!(
        new_rate <= TAX_RATE_DENOMINATOR,
        Error::<T>::InvalidTaxRate
      );
      let old_rate = Pricing::<T>::mutate(|pricing| {
        let old_rate = pricing.buy_tax_rate;
        pricing.buy_tax_rate = new_rate;
        old_rate
      });
      log::info!(target: crate::LOG_TARGET, "buy tax rate updated {old_rate} -> {new_rate}");
      Self::deposit_event(Event::BuyTaxRateUpdated { old_rate, new_rate });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Reserve account receiving buy payments and funding sell payouts
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn token_name() -> Vec<u8> {
      TokenName::<T>::get().into_inner()
    }

    pub fn token_symbol() -> Vec<u8> {
      TokenSymbol::<T>::get().into_inner()
    }

    pub fn token_decimals() -> u8 {
      TokenDecimals::<T>::get()
    }

    pub fn total_supply() -> Balance {
      TotalSupply::<T>::get()
    }

    pub fn balance_of(account: &T::AccountId) -> Balance {
      AccountBalances::<T>::get(account)
    }

    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> Balance {
      Allowances::<T>::get(owner, spender)
    }

    pub fn current_price() -> Balance {
      Pricing::<T>::get().unit_price
    }

    pub fn pricing() -> PricingState {
      Pricing::<T>::get()
    }

    pub fn administrator() -> Option<T::AccountId> {
      Administrator::<T>::get()
    }

    pub fn is_administrator(who: &T::AccountId) -> bool {
      Administrator::<T>::get().as_ref() == Some(who)
    }

    pub(crate) fn ensure_administrator(who: &T::AccountId) -> DispatchResult {
      let administrator = Administrator::<T>::get().ok_or(Error::<T>::AdministratorNotSet)?;
      ensure!(&administrator == who, Error::<T>::NotAdministrator);
      Ok(())
    }

    pub(crate) fn set_administrator(new: T::AccountId) -> DispatchResult {
      ensure!(!Self::is_null(&new), Error::<T>::NullAccount);
      let previous = Administrator::<T>::get();
      Administrator::<T>::put(&new);
      log::info!(target: crate::LOG_TARGET, "administrator changed to {new:?}");
      Self::deposit_event(Event::OwnershipTransferred { previous, new });
      Ok(())
    }
  }

  #[pallet::genesis_config]
  pub struct GenesisConfig<T: Config> {
    /// Administrator account; receives the initial supply
    pub administrator: Option<T::AccountId>,
    /// Whole units minted to the administrator
    pub initial_supply: Balance,
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub decimals: u8,
    pub pricing: PricingState,
  }

  impl<T: Config> Default for GenesisConfig<T> {
    fn default() -> Self {
      Self {
        administrator: None,
        initial_supply: DEFAULT_INITIAL_SUPPLY,
        name: Vec::new(),
        symbol: Vec::new(),
        decimals: DECIMALS,
        pricing: PricingState::default(),
      }
    }
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Reserve account survives a zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());

      assert!(
        self.pricing.unit_price > 0 && self.pricing.unit_scale > 0,
        "unit price and unit scale must be nonzero"
      );
      assert!(
        self.pricing.buy_tax_rate <= TAX_RATE_DENOMINATOR,
        "buy tax rate exceeds 1000 parts per thousand"
      );
      Pricing::<T>::put(self.pricing);

      let name: BoundedVec<u8, T::StringLimit> =
        self.name.clone().try_into().expect("token name exceeds StringLimit");
      let symbol: BoundedVec<u8, T::StringLimit> =
        self.symbol.clone().try_into().expect("token symbol exceeds StringLimit");
      TokenName::<T>::put(name);
      TokenSymbol::<T>::put(symbol);
      TokenDecimals::<T>::put(self.decimals);

      if let Some(administrator) = &self.administrator {
        assert!(
          !Pallet::<T>::is_null(administrator),
          "administrator must not be the null account"
        );
        Administrator::<T>::put(administrator);
        let supply = self
          .pricing
          .scale_units(self.initial_supply)
          .expect("initial supply overflows the unit scale");
        Pallet::<T>::mint_into(administrator, supply).expect("genesis mint to administrator");
      }
    }
  }
}
