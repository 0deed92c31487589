use std::fmt::Display;

pub mod logging;
pub mod presets;

pub const UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
  UnknownPreset(String),
}

impl Display for CliError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CliError::UnknownPreset(name) => write!(f, "no preset named {:?}, see `bitcalc preset list`", name),
    }
  }
}

impl std::error::Error for CliError {}
