use std::ops::RangeInclusive;

use common::{utils, NumberKind, Radix, Width};
use log::debug;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

use crate::{error::ParseError, literal};

/// Fixed-width two's complement forms of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
  pub bin: String,
  pub hex: String,
}

/// Everything shown for one parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
  pub natural_dec: String,
  pub natural_hex: String,
  pub computer: Computer,
}

// 2^width
pub fn modulus(width: Width) -> BigUint {
  BigUint::one() << width.bits()
}

/// `-2^(width-1) ..= 2^(width-1) - 1`
pub fn signed_range(width: Width) -> RangeInclusive<BigInt> {
  let half = BigInt::one() << width.sign_bit();
  -half.clone()..=half - 1u32
}

pub(crate) fn check_pattern(pattern: &BigUint, width: Width) -> Result<(), ParseError> {
  if *pattern >= modulus(width) {
    return Err(ParseError::OutOfRange);
  }
  Ok(())
}

// Anything a Mathematical, Signed or Unsigned parse could have produced.
fn check_encodable(value: &BigInt, width: Width) -> Result<(), ParseError> {
  let lowest = -(BigInt::one() << width.sign_bit());
  if *value < lowest || *value >= BigInt::from(modulus(width)) {
    return Err(ParseError::OutOfRange);
  }
  Ok(())
}

/// `value mod 2^width`, the raw bit pattern of `value`.
pub fn pattern(value: &BigInt, width: Width) -> BigUint {
  value.mod_floor(&BigInt::from(modulus(width))).magnitude().clone()
}

pub fn encode(value: &BigInt, width: Width) -> Result<Computer, ParseError> {
  if let Err(e) = check_encodable(value, width) {
    debug!("{} does not fit in {} bits", value, width);
    return Err(e);
  }

  let bits = pattern(value, width);
  Ok(Computer {
    bin: utils::left_pad(&bits.to_str_radix(2), '0', width.bits()),
    hex: utils::left_pad(&bits.to_str_radix(16), '0', width.nibbles()),
  })
}

pub fn decode(pattern: &BigUint, width: Width) -> Result<BigInt, ParseError> {
  check_pattern(pattern, width)?;

  let value = BigInt::from(pattern.clone());
  let sign_bit = BigInt::one() << width.sign_bit();
  if value >= sign_bit {
    Ok(value - BigInt::from(modulus(width)))
  } else {
    Ok(value)
  }
}

/// Decodes a binary pattern such as the `bin` of an encoded value.
pub fn decode_bin(bits: &str, width: Width) -> Result<BigInt, ParseError> {
  literal::parse(bits, Radix::Binary, width, NumberKind::Signed)
}

pub fn decimal(value: &BigInt) -> String {
  value.to_str_radix(10)
}

/// Sign and magnitude hex, e.g. `-12` for -18.
pub fn natural_hex(value: &BigInt) -> String {
  value.to_str_radix(16)
}

pub fn render(value: &BigInt, width: Width) -> Result<Rendering, ParseError> {
  Ok(Rendering {
    natural_dec: decimal(value),
    natural_hex: natural_hex(value),
    computer: encode(value, width)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn w(bits: usize) -> Width {
    Width::new(bits).unwrap()
  }

  fn bin(value: i64, bits: usize) -> String {
    encode(&BigInt::from(value), w(bits)).unwrap().bin
  }

  fn hex(value: i64, bits: usize) -> String {
    encode(&BigInt::from(value), w(bits)).unwrap().hex
  }

  #[test]
  fn encodes_negative_as_twos_complement() {
    assert_eq!(bin(-18, 8), "11101110");
    assert_eq!(hex(-18, 8), "ee");
    assert_eq!(bin(-1, 4), "1111");
    assert_eq!(bin(-128, 8), "10000000");
    assert_eq!(hex(-1, 10), "3ff");
  }

  #[test]
  fn encodes_positive_zero_extended() {
    assert_eq!(bin(5, 8), "00000101");
    assert_eq!(hex(5, 8), "05");
    assert_eq!(hex(1, 9), "001");
    assert_eq!(bin(0, 1), "0");
  }

  #[test]
  fn encodes_unsigned_patterns() {
    assert_eq!(bin(255, 8), "11111111");
    assert_eq!(hex(255, 8), "ff");
  }

  #[test]
  fn encode_refuses_to_truncate() {
    assert_eq!(encode(&BigInt::from(256), w(8)), Err(ParseError::OutOfRange));
    assert_eq!(encode(&BigInt::from(-129), w(8)), Err(ParseError::OutOfRange));
    assert_eq!(encode(&BigInt::from(-2), w(1)), Err(ParseError::OutOfRange));
  }

  #[test]
  fn decode_sign_bit() {
    assert_eq!(decode(&BigUint::from(0xeeu32), w(8)), Ok(BigInt::from(-18)));
    assert_eq!(decode(&BigUint::from(0x7fu32), w(8)), Ok(BigInt::from(127)));
    assert_eq!(decode(&BigUint::from(0x80u32), w(8)), Ok(BigInt::from(-128)));
    assert_eq!(decode(&BigUint::from(0x100u32), w(8)), Err(ParseError::OutOfRange));
  }

  #[test]
  fn decode_bin_reads_encoded_output() {
    assert_eq!(decode_bin("11101110", w(8)), Ok(BigInt::from(-18)));
    assert_eq!(decode_bin("0000_0101", w(8)), Ok(BigInt::from(5)));
  }

  #[test]
  fn natural_forms() {
    let v = BigInt::from(-18);
    assert_eq!(decimal(&v), "-18");
    assert_eq!(natural_hex(&v), "-12");
    assert_eq!(natural_hex(&BigInt::from(255)), "ff");
  }

  #[test]
  fn signed_range_bounds() {
    let r = signed_range(w(8));
    assert_eq!(*r.start(), BigInt::from(-128));
    assert_eq!(*r.end(), BigInt::from(127));
    let r = signed_range(w(1));
    assert_eq!(*r.start(), BigInt::from(-1));
    assert_eq!(*r.end(), BigInt::from(0));
  }

  #[test]
  fn render_bundles_all_forms() {
    let r = render(&BigInt::from(-18), w(8)).unwrap();
    assert_eq!(r.natural_dec, "-18");
    assert_eq!(r.natural_hex, "-12");
    assert_eq!(r.computer.bin, "11101110");
    assert_eq!(r.computer.hex, "ee");
  }
}
