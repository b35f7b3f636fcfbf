//! Pricing engine: converts between native payment amounts and ledger units.
//!
//! Buys floor twice, once when dividing the net payment by the unit price and again through
//! the whole-unit scale, so sub-unit remainders of the net payment are never minted.

use crate::{
  arithmetic::{self, ArithmeticFault, ArithmeticResult, FaultKind},
  types::{
    Balance, PricingState,
    params::{SELL_HAIRCUT_DIVISOR, TAX_RATE_DENOMINATOR},
  },
};
use frame::deps::sp_core::U256;

impl PricingState {
  /// Tax withheld from a buy payment.
  pub fn buy_tax(&self, payment: Balance) -> ArithmeticResult {
    let taxed = arithmetic::mul(payment, self.buy_tax_rate, Some("buy tax overflow"))?;
    arithmetic::div(taxed, TAX_RATE_DENOMINATOR, None)
  }

  /// Units (in subunits) minted for `payment`.
  pub fn quote_buy(&self, payment: Balance) -> ArithmeticResult {
    let tax = self.buy_tax(payment)?;
    let net_payment = arithmetic::sub(payment, tax, None)?;
    let whole_units = arithmetic::div(net_payment, self.unit_price, Some("unit price is zero"))?;
    arithmetic::mul(whole_units, self.unit_scale, Some("minted units overflow"))
  }

  /// Price paid per whole unit on sells.
  pub fn sell_price(&self) -> ArithmeticResult {
    let haircut = arithmetic::div(self.unit_price, SELL_HAIRCUT_DIVISOR, None)?;
    arithmetic::sub(self.unit_price, haircut, None)
  }

  /// Native payout for selling `units` whole units.
  ///
  /// The `scaled * price` intermediate is widened to 256 bits; only a payout that does not fit
  /// back into `Balance` is an overflow.
  pub fn quote_sell(&self, units: Balance) -> ArithmeticResult {
    let scaled = self.scale_units(units)?;
    let sell_price = self.sell_price()?;
    let payout = U256::from(scaled)
      .saturating_mul(U256::from(sell_price))
      .checked_div(U256::from(self.unit_scale))
      .ok_or(ArithmeticFault::new(FaultKind::DivByZero, Some("unit scale is zero")))?;

    if payout > U256::from(Balance::MAX) {
      return Err(ArithmeticFault::new(FaultKind::MulOverflow, Some("sell payout overflow")));
    }
    Ok(payout.as_u128())
  }

  /// Converts whole units into ledger subunits.
  pub fn scale_units(&self, units: Balance) -> ArithmeticResult {
    arithmetic::mul(units, self.unit_scale, Some("scaled units overflow"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::params::{DEFAULT_INITIAL_SUPPLY, UNIT_SCALE};

  fn launch_pricing() -> PricingState {
    PricingState {
      unit_price: 2_600_000_000_000_000,
      buy_tax_rate: 225,
      unit_scale: UNIT_SCALE,
    }
  }

  #[test]
  fn buy_at_unit_price_floors_to_zero_units() {
    let pricing = launch_pricing();
    let payment = 2_600_000_000_000_000;
    assert_eq!(pricing.buy_tax(payment), Ok(585_000_000_000_000));
    assert_eq!(payment - 585_000_000_000_000, 2_015_000_000_000_000);
    assert_eq!(pricing.quote_buy(payment), Ok(0));
  }

  #[test]
  fn buy_floors_before_scaling() {
    let pricing = launch_pricing();
    // net = 20_150_000_000_000_000, net / price = 7.75 -> 7 whole units
    let payment = 26_000_000_000_000_000;
    assert_eq!(pricing.quote_buy(payment), Ok(7 * UNIT_SCALE));
  }

  #[test]
  fn buy_tax_floors() {
    let pricing = launch_pricing();
    // 7 * 225 / 1000 = 1.575
    assert_eq!(pricing.buy_tax(7), Ok(1));
    assert_eq!(pricing.buy_tax(4), Ok(0));
  }

  #[test]
  fn sell_applies_one_percent_haircut() {
    let pricing = launch_pricing();
    assert_eq!(pricing.sell_price(), Ok(2_574_000_000_000_000));
    assert_eq!(pricing.quote_sell(1), Ok(2_574_000_000_000_000));
    assert_eq!(pricing.quote_sell(10), Ok(25_740_000_000_000_000));
    assert_eq!(pricing.quote_sell(0), Ok(0));
  }

  #[test]
  fn sell_haircut_tracks_current_price() {
    let mut pricing = launch_pricing();
    pricing.unit_price = 199;
    // 199 - 199 / 100 = 198
    assert_eq!(pricing.sell_price(), Ok(198));
    pricing.unit_price = 99;
    assert_eq!(pricing.sell_price(), Ok(99));
  }

  #[test]
  fn zero_price_or_scale_fails_division() {
    let mut pricing = launch_pricing();
    pricing.unit_price = 0;
    assert_eq!(
      pricing.quote_buy(1_000).unwrap_err().kind,
      FaultKind::DivByZero
    );

    let mut pricing = launch_pricing();
    pricing.unit_scale = 0;
    assert_eq!(pricing.quote_sell(5).unwrap_err().kind, FaultKind::DivByZero);
  }

  #[test]
  fn large_sell_widens_intermediate_product() {
    let pricing = launch_pricing();
    // 2e23 * 2.574e15 exceeds u128 before the division by the unit scale
    assert_eq!(
      pricing.quote_sell(200_000),
      Ok(514_800_000_000_000_000_000)
    );
    assert_eq!(
      pricing.quote_sell(DEFAULT_INITIAL_SUPPLY),
      Ok(25_740_000_000_000_000_000_000)
    );
    let whole_units = Balance::MAX / UNIT_SCALE;
    assert_eq!(
      pricing.quote_sell(whole_units),
      Ok(whole_units * 2_574_000_000_000_000)
    );
  }

  #[test]
  fn payout_beyond_balance_range_reports_overflow() {
    let mut pricing = launch_pricing();
    pricing.unit_price = 10 * UNIT_SCALE;
    let fault = pricing.quote_sell(Balance::MAX / UNIT_SCALE).unwrap_err();
    assert_eq!(fault.kind, FaultKind::MulOverflow);
    assert_eq!(fault.cause, "sell payout overflow");

    let fault = pricing.quote_sell(Balance::MAX).unwrap_err();
    assert_eq!(fault.kind, FaultKind::MulOverflow);
    assert_eq!(fault.cause, "scaled units overflow");
  }
}
