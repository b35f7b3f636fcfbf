use frame::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger quantity and native payment amount.
pub type Balance = u128;

/// Economic defaults for the exchange ledger.
///
/// Chains override these through the pallet genesis config; the values here back the
/// `Default` of [`PricingState`] and of the pallet `GenesisConfig`.
pub mod params {
  use super::Balance;

  /// Subunits per whole unit (18 decimals).
  pub const UNIT_SCALE: Balance = 1_000_000_000_000_000_000;

  /// Decimals reported for the ledger token, matching [`UNIT_SCALE`].
  pub const DECIMALS: u8 = 18;

  /// Payment subunits charged per whole unit at launch.
  pub const DEFAULT_UNIT_PRICE: Balance = 2_600_000_000_000_000;

  /// Tax withheld from buy payments, in parts per thousand (22.5%).
  pub const DEFAULT_BUY_TAX_RATE: Balance = 225;

  /// Denominator of the buy tax rate.
  pub const TAX_RATE_DENOMINATOR: Balance = 1_000;

  /// Sells are paid at `price - price / SELL_HAIRCUT_DIVISOR` (a 1% haircut).
  pub const SELL_HAIRCUT_DIVISOR: Balance = 100;

  /// Whole units minted to the administrator at genesis.
  pub const DEFAULT_INITIAL_SUPPLY: Balance = 10_000_000;

  /// Pallet id of the reserve account holding buy payments and funding sell payouts.
  pub const EXCHANGE_LEDGER_PALLET_ID: &[u8; 8] = b"py/exlgr";
}

/// Administrator-controlled pricing record.
#[derive(
  Clone,
  Copy,
  Decode,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  RuntimeDebug,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct PricingState {
  /// Payment subunits per whole unit
  pub unit_price: Balance,
  /// Buy tax in parts per thousand
  pub buy_tax_rate: Balance,
  /// Subunit-to-whole-unit multiplier
  pub unit_scale: Balance,
}

impl Default for PricingState {
  fn default() -> Self {
    Self {
      unit_price: params::DEFAULT_UNIT_PRICE,
      buy_tax_rate: params::DEFAULT_BUY_TAX_RATE,
      unit_scale: params::UNIT_SCALE,
    }
  }
}
