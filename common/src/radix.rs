use core::{fmt::Display, str::FromStr};

use alloc::{format, string::String};
use phf::phf_map;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Radix {
  Binary = 2,
  Octal = 8,
  Decimal = 10,
  Hexadecimal = 16,
}

static RADIX_NAMES: phf::Map<&'static str, Radix> = phf_map! {
  "b" => Radix::Binary,
  "bin" => Radix::Binary,
  "binary" => Radix::Binary,
  "2" => Radix::Binary,
  "o" => Radix::Octal,
  "oct" => Radix::Octal,
  "octal" => Radix::Octal,
  "8" => Radix::Octal,
  "d" => Radix::Decimal,
  "dec" => Radix::Decimal,
  "decimal" => Radix::Decimal,
  "10" => Radix::Decimal,
  "h" => Radix::Hexadecimal,
  "hex" => Radix::Hexadecimal,
  "hexadecimal" => Radix::Hexadecimal,
  "16" => Radix::Hexadecimal,
};

impl Radix {
  // Display order of the pickers.
  pub const ALL: [Radix; 4] = [Radix::Decimal, Radix::Hexadecimal, Radix::Octal, Radix::Binary];

  pub fn number(self) -> u32 {
    self as u32
  }

  pub fn letter(self) -> char {
    match self {
      Radix::Binary => 'b',
      Radix::Octal => 'o',
      Radix::Decimal => 'd',
      Radix::Hexadecimal => 'h',
    }
  }

  pub fn is_digit(self, c: char) -> bool {
    c.is_digit(self.number())
  }

  /// Verilog style literal prefix, `32'd` with a width and `'d` without.
  pub fn leading(self, width: Option<Width>) -> String {
    match width {
      Some(w) => format!("{}'{}", w, self.letter()),
      None => format!("'{}", self.letter()),
    }
  }
}

impl Default for Radix {
  fn default() -> Self {
    Radix::Decimal
  }
}

impl Display for Radix {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:?}", self)
  }
}

impl FromStr for Radix {
  type Err = &'static str;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    RADIX_NAMES
      .get(s.to_ascii_lowercase().as_str())
      .copied()
      .ok_or("expected one of b, o, d, h")
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NumberKind {
  Mathematical,
  Signed,
  Unsigned,
}

static KIND_NAMES: phf::Map<&'static str, NumberKind> = phf_map! {
  "math" => NumberKind::Mathematical,
  "mathematical" => NumberKind::Mathematical,
  "signed" => NumberKind::Signed,
  "unsigned" => NumberKind::Unsigned,
};

impl NumberKind {
  pub const ALL: [NumberKind; 3] = [NumberKind::Mathematical, NumberKind::Signed, NumberKind::Unsigned];

  // Signed and Unsigned literals are raw bit patterns and never carry a sign.
  pub fn is_raw_pattern(self) -> bool {
    self != NumberKind::Mathematical
  }
}

impl Default for NumberKind {
  fn default() -> Self {
    NumberKind::Mathematical
  }
}

impl Display for NumberKind {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:?}", self)
  }
}

impl FromStr for NumberKind {
  type Err = &'static str;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    KIND_NAMES
      .get(s.to_ascii_lowercase().as_str())
      .copied()
      .ok_or("expected one of math, signed, unsigned")
  }
}

/// Bit width of a fixed-width pattern, always within `MIN_BITS..=MAX_BITS`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Width(usize);

impl Width {
  pub const MIN_BITS: usize = 1;
  pub const MAX_BITS: usize = 512;
  pub const DEFAULT_BITS: usize = 32;

  pub fn new(bits: usize) -> Option<Width> {
    (Self::MIN_BITS..=Self::MAX_BITS).contains(&bits).then_some(Width(bits))
  }

  pub fn clamp(bits: usize) -> Width {
    Width(bits.clamp(Self::MIN_BITS, Self::MAX_BITS))
  }

  pub fn bits(self) -> usize {
    self.0
  }

  pub fn nibbles(self) -> usize {
    crate::utils::nibbles(self.0)
  }

  pub fn sign_bit(self) -> usize {
    self.0 - 1
  }
}

impl Default for Width {
  fn default() -> Self {
    Width(Self::DEFAULT_BITS)
  }
}

impl Display for Width {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for Width {
  type Err = &'static str;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bits: usize = s.trim().parse().map_err(|_| "width must be a number")?;
    Width::new(bits).ok_or("width must be within 1..=512")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn radix_from_tags_and_names() {
    assert_eq!("b".parse(), Ok(Radix::Binary));
    assert_eq!("OCT".parse(), Ok(Radix::Octal));
    assert_eq!("10".parse(), Ok(Radix::Decimal));
    assert_eq!("Hexadecimal".parse(), Ok(Radix::Hexadecimal));
    assert!("x".parse::<Radix>().is_err());
  }

  #[test]
  fn radix_digit_sets() {
    assert!(Radix::Binary.is_digit('1'));
    assert!(!Radix::Binary.is_digit('2'));
    assert!(Radix::Octal.is_digit('7'));
    assert!(!Radix::Octal.is_digit('8'));
    assert!(!Radix::Decimal.is_digit('a'));
    assert!(Radix::Hexadecimal.is_digit('F'));
    assert!(!Radix::Hexadecimal.is_digit('g'));
  }

  #[test]
  fn leading_tag() {
    assert_eq!(Radix::Decimal.leading(Some(Width::default())), "32'd");
    assert_eq!(Radix::Hexadecimal.leading(Width::new(8)), "8'h");
    assert_eq!(Radix::Binary.leading(None), "'b");
  }

  #[test]
  fn width_bounds() {
    assert_eq!(Width::new(0), None);
    assert_eq!(Width::new(513), None);
    assert_eq!(Width::new(1).map(Width::bits), Some(1));
    assert_eq!(Width::new(512).map(Width::bits), Some(512));
    assert_eq!(Width::clamp(0).bits(), 1);
    assert_eq!(Width::clamp(9000).bits(), 512);
    assert_eq!("64".parse::<Width>().map(Width::bits), Ok(64));
    assert!("0".parse::<Width>().is_err());
    assert!("abc".parse::<Width>().is_err());
  }

  #[test]
  fn kind_from_str() {
    assert_eq!("math".parse(), Ok(NumberKind::Mathematical));
    assert_eq!("Signed".parse(), Ok(NumberKind::Signed));
    assert_eq!("unsigned".parse(), Ok(NumberKind::Unsigned));
    assert!("float".parse::<NumberKind>().is_err());
  }
}
