use std::{fmt::Display, str::FromStr};

use common::{utils, Radix, Width};
use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{error::ExtractError, literal::Literal};

/// Inclusive bit range `[end:start]`, bit 0 being the least significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
  pub start: usize,
  pub end: usize,
  #[cfg_attr(feature = "serde", serde(default))]
  pub label: String,
}

impl Segment {
  pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
    Self { start, end, label: label.into() }
  }

  pub fn bit(index: usize, label: impl Into<String>) -> Self {
    Self::new(index, index, label)
  }

  pub fn is_ordered(&self) -> bool {
    self.start <= self.end
  }

  pub fn range(&self) -> String {
    format!("[{}, {}]", self.end, self.start)
  }
}

impl Display for Segment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.label.is_empty() {
      write!(f, "{}:{}", self.end, self.start)
    } else {
      write!(f, "{}:{}:{}", self.end, self.start, self.label)
    }
  }
}

// end:start[:label], the way ranges are written in hardware docs.
impl FromStr for Segment {
  type Err = &'static str;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut parts = s.splitn(3, ':');
    let end = parts.next().and_then(|p| p.trim().parse().ok()).ok_or("bad segment end")?;
    let start = parts.next().and_then(|p| p.trim().parse().ok()).ok_or("bad segment start")?;
    let label = parts.next().unwrap_or("");
    Ok(Segment::new(start, end, label))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOutput {
  pub range: String,
  pub label: String,
  pub hex: String,
  pub decimal: String,
  pub bin: String,
}

/// The segment an "add" appends: one bit, right above the last one.
pub fn next_segment(segments: &[Segment]) -> Segment {
  let start = segments.last().map_or(0, |s| s.end.saturating_add(1));
  Segment::bit(start, "")
}

/// Slices `text` into `segments`, all or nothing.
///
/// `InvalidSegments` when a segment has `start > end`, or when it ends past
/// bit 512 of a value narrower than that. Bits above the value's own length
/// are zero-extended only up to that bound.
pub fn extract(text: &str, radix: Radix, segments: &[Segment]) -> Result<Vec<SegmentOutput>, ExtractError> {
  let literal = Literal::read(text, radix).map_err(|e| {
    debug!("segment input {:?} unparsable: {}", text, e);
    ExtractError::InvalidValue
  })?;

  if literal.negative && !literal.magnitude.is_zero() {
    debug!("segment input {:?} is negative", text);
    return Err(ExtractError::InvalidValue);
  }

  let value = literal.magnitude;
  // Binary digit count of the value, "0" counting as one digit.
  let natural = (value.bits() as usize).max(1);
  let max_bit = segments.iter().map(|s| s.end.saturating_add(1)).max().unwrap_or(0);
  let extended = natural.max(max_bit);
  // Indices past this are refused rather than zero-extended without bound.
  let limit = natural.max(Width::MAX_BITS + 1);

  segments
    .iter()
    .map(|s| {
      if !s.is_ordered() || s.start >= extended || s.end >= limit {
        debug!("invalid segment {} against {} bits", s, extended);
        return Err(ExtractError::InvalidSegments);
      }
      Ok(slice(&value, s))
    })
    .collect()
}

fn slice(value: &BigUint, segment: &Segment) -> SegmentOutput {
  let size = segment.end - segment.start + 1;
  let mask = (BigUint::one() << size) - 1u32;
  let bits = (value >> segment.start) & mask;

  SegmentOutput {
    range: segment.range(),
    label: segment.label.clone(),
    hex: utils::left_pad(&bits.to_str_radix(16), '0', utils::nibbles(size)),
    decimal: bits.to_str_radix(10),
    bin: utils::left_pad(&bits.to_str_radix(2), '0', size),
  }
}
