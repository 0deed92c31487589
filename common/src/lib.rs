#![no_std]

extern crate alloc;

pub mod radix;

pub use radix::{NumberKind, Radix, Width};

pub const SEPARATOR: char = '_';

pub mod utils {
  use alloc::string::String;
  use crate::SEPARATOR;

  pub fn strip_separators(src: &str) -> String {
    src.chars().filter(|&c| c != SEPARATOR).collect()
  }

  pub fn left_pad(src: &str, with: char, to_len: usize) -> String {
    let len = src.chars().count();
    let mut padded = String::with_capacity(to_len.max(len));
    for _ in len..to_len {
      padded.push(with);
    }
    padded.push_str(src);
    padded
  }

  /// Inserts `sep` between every `size` digits, counting from the right.
  /// A leading minus sign is kept outside the groups.
  pub fn group_digits(src: &str, size: usize, sep: char) -> String {
    let (sign, digits) = match src.strip_prefix('-') {
      Some(rest) => ("-", rest),
      None => ("", src),
    };

    if size == 0 {
      return String::from(src);
    }

    let count = digits.chars().count();
    let mut grouped = String::with_capacity(src.len() + count / size);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
      if i > 0 && (count - i) % size == 0 {
        grouped.push(sep);
      }
      grouped.push(c);
    }
    grouped
  }

  // Digits needed to show `bits` bits in hex.
  pub fn nibbles(bits: usize) -> usize {
    (bits + 3) / 4
  }
}

#[cfg(test)]
mod tests {
  use super::utils::*;

  #[test]
  fn strips_all_separators() {
    assert_eq!(strip_separators("1111_0000_1010"), "111100001010");
    assert_eq!(strip_separators("___"), "");
    assert_eq!(strip_separators("-1_000"), "-1000");
  }

  #[test]
  fn pads_only_when_shorter() {
    assert_eq!(left_pad("f", '0', 2), "0f");
    assert_eq!(left_pad("abc", '0', 2), "abc");
    assert_eq!(left_pad("", '0', 3), "000");
  }

  #[test]
  fn groups_from_the_right() {
    assert_eq!(group_digits("11101110", 4, '_'), "1110_1110");
    assert_eq!(group_digits("101", 4, '_'), "101");
    assert_eq!(group_digits("1000000", 3, ','), "1,000,000");
    assert_eq!(group_digits("-12345", 3, '_'), "-12_345");
    assert_eq!(group_digits("ff", 0, '_'), "ff");
  }

  #[test]
  fn nibbles_round_up() {
    assert_eq!(nibbles(1), 1);
    assert_eq!(nibbles(4), 1);
    assert_eq!(nibbles(5), 2);
    assert_eq!(nibbles(512), 128);
  }
}
