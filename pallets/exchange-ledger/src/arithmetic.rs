//! Checked integer arithmetic over ledger quantities.
//!
//! Every operation either returns the exact result or an [`ArithmeticFault`] naming what went
//! wrong. Nothing here wraps or saturates.

use crate::types::Balance;

/// Discriminator of an arithmetic failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultKind {
  Overflow,
  Underflow,
  MulOverflow,
  DivByZero,
  ModByZero,
}

impl FaultKind {
  /// Message used when the caller did not supply one.
  pub const fn default_cause(self) -> &'static str {
    match self {
      FaultKind::Overflow => "addition overflow",
      FaultKind::Underflow => "subtraction underflow",
      FaultKind::MulOverflow => "multiplication overflow",
      FaultKind::DivByZero => "division by zero",
      FaultKind::ModByZero => "modulo by zero",
    }
  }
}

/// A failed arithmetic operation together with a human-readable cause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArithmeticFault {
  pub kind: FaultKind,
  pub cause: &'static str,
}

impl ArithmeticFault {
  pub const fn new(kind: FaultKind, cause: Option<&'static str>) -> Self {
    let cause = match cause {
      Some(cause) => cause,
      None => kind.default_cause(),
    };
    Self { kind, cause }
  }
}

impl core::fmt::Display for ArithmeticFault {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:?}: {}", self.kind, self.cause)
  }
}

pub type ArithmeticResult = Result<Balance, ArithmeticFault>;

pub fn add(a: Balance, b: Balance, cause: Option<&'static str>) -> ArithmeticResult {
  a.checked_add(b).ok_or(ArithmeticFault::new(FaultKind::Overflow, cause))
}

pub fn sub(a: Balance, b: Balance, cause: Option<&'static str>) -> ArithmeticResult {
  if b > a {
    return Err(ArithmeticFault::new(FaultKind::Underflow, cause));
  }
  Ok(a - b)
}

/// Multiplies `a` by `b`. A zero left operand short-circuits to zero without looking at `b`.
pub fn mul(a: Balance, b: Balance, cause: Option<&'static str>) -> ArithmeticResult {
  if a == 0 {
    return Ok(0);
  }
  a.checked_mul(b).ok_or(ArithmeticFault::new(FaultKind::MulOverflow, cause))
}

/// Integer division, truncating toward zero.
pub fn div(a: Balance, b: Balance, cause: Option<&'static str>) -> ArithmeticResult {
  if b == 0 {
    return Err(ArithmeticFault::new(FaultKind::DivByZero, cause));
  }
  Ok(a / b)
}

pub fn rem(a: Balance, b: Balance, cause: Option<&'static str>) -> ArithmeticResult {
  if b == 0 {
    return Err(ArithmeticFault::new(FaultKind::ModByZero, cause));
  }
  Ok(a % b)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_reports_overflow() {
    assert_eq!(add(2, 3, None), Ok(5));
    assert_eq!(add(Balance::MAX, 0, None), Ok(Balance::MAX));
    let fault = add(Balance::MAX, 1, None).unwrap_err();
    assert_eq!(fault.kind, FaultKind::Overflow);
    assert_eq!(fault.cause, "addition overflow");
  }

  #[test]
  fn sub_reports_underflow_with_caller_cause() {
    assert_eq!(sub(5, 5, None), Ok(0));
    let fault = sub(4, 5, Some("burn amount exceeds balance")).unwrap_err();
    assert_eq!(fault.kind, FaultKind::Underflow);
    assert_eq!(fault.cause, "burn amount exceeds balance");
  }

  #[test]
  fn mul_boundary_overflows() {
    let a = Balance::MAX / 2 + 1;
    let fault = mul(a, 2, None).unwrap_err();
    assert_eq!(fault.kind, FaultKind::MulOverflow);
    assert_eq!(mul(Balance::MAX / 2, 2, None), Ok(Balance::MAX - 1));
  }

  #[test]
  fn mul_by_zero_left_operand_short_circuits() {
    assert_eq!(mul(0, Balance::MAX, None), Ok(0));
    assert_eq!(mul(0, 0, None), Ok(0));
    assert_eq!(mul(Balance::MAX, 0, None), Ok(0));
  }

  #[test]
  fn div_truncates_and_rejects_zero_divisor() {
    assert_eq!(div(7, 2, None), Ok(3));
    assert_eq!(div(1, 2, None), Ok(0));
    let fault = div(1, 0, Some("unit price is zero")).unwrap_err();
    assert_eq!(fault.kind, FaultKind::DivByZero);
    assert_eq!(fault.cause, "unit price is zero");
  }

  #[test]
  fn rem_rejects_zero_modulus() {
    assert_eq!(rem(7, 3, None), Ok(1));
    assert_eq!(rem(7, 0, None).unwrap_err().kind, FaultKind::ModByZero);
  }

  #[test]
  fn fault_display_names_kind_and_cause() {
    let fault = ArithmeticFault::new(FaultKind::DivByZero, None);
    assert_eq!(alloc::format!("{fault}"), "DivByZero: division by zero");
  }
}
