use common::{utils, NumberKind, Radix, Width};
use log::debug;
use num_bigint::{BigInt, BigUint, Sign};

use crate::{codec, error::ParseError};

/// A digit string split into its sign and magnitude, not yet range checked.
#[derive(Debug)]
pub(crate) struct Literal {
  pub negative: bool,
  pub magnitude: BigUint,
}

impl Literal {
  pub fn read(text: &str, radix: Radix) -> Result<Literal, ParseError> {
    let cleaned = utils::strip_separators(text);
    if cleaned.is_empty() {
      return Err(ParseError::EmptyInput);
    }

    let (negative, digits) = match cleaned.strip_prefix('-') {
      Some(rest) => (true, rest),
      None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };

    if digits.is_empty() || !digits.chars().all(|c| radix.is_digit(c)) {
      return Err(ParseError::MalformedLiteral);
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix.number())
      .ok_or(ParseError::MalformedLiteral)?;

    Ok(Literal { negative, magnitude })
  }

  pub fn into_signed(self) -> BigInt {
    let sign = if self.negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, self.magnitude)
  }
}

pub fn parse(text: &str, radix: Radix, width: Width, kind: NumberKind) -> Result<BigInt, ParseError> {
  let res = validate(text, radix, width, kind);
  if let Err(e) = &res {
    debug!("rejected {:?} ({}, {} bits, {}): {}", text, radix, width, kind, e);
  }
  res
}

fn validate(text: &str, radix: Radix, width: Width, kind: NumberKind) -> Result<BigInt, ParseError> {
  let literal = Literal::read(text, radix)?;
  if kind.is_raw_pattern() && literal.negative {
    return Err(ParseError::UnexpectedSign);
  }

  match kind {
    NumberKind::Unsigned => {
      codec::check_pattern(&literal.magnitude, width)?;
      Ok(BigInt::from(literal.magnitude))
    }
    NumberKind::Signed => codec::decode(&literal.magnitude, width),
    NumberKind::Mathematical => {
      let value = literal.into_signed();
      if !codec::signed_range(width).contains(&value) {
        return Err(ParseError::OutOfRange);
      }
      Ok(value)
    }
  }
}
