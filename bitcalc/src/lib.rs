pub use common::{NumberKind, Radix, Width};
pub use num_bigint::{BigInt, BigUint};

mod literal;

pub mod codec;
pub mod segment;

pub use codec::{decimal, decode, decode_bin, encode, natural_hex, render, Computer, Rendering};
pub use literal::parse;
pub use segment::{extract, next_segment, Segment, SegmentOutput};

pub mod error {
  #[derive(Debug, PartialEq, Eq, Clone, Copy)]
  pub enum ParseError {
    EmptyInput,
    MalformedLiteral,
    UnexpectedSign,
    OutOfRange,
  }

  impl std::error::Error for ParseError {}

  impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{:?}", self)
    }
  }

  #[derive(Debug, PartialEq, Eq, Clone, Copy)]
  pub enum ExtractError {
    InvalidValue,
    InvalidSegments,
  }

  impl std::error::Error for ExtractError {}

  impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{:?}", self)
    }
  }
}
