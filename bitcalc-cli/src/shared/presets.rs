use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use bitcalc::Segment;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum PresetError {
  IO(std::io::Error),
  Yaml(serde_yaml::Error),
}

impl std::error::Error for PresetError {}

impl std::fmt::Display for PresetError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PresetError::IO(e) => write!(f, "preset file: {}", e),
      PresetError::Yaml(e) => write!(f, "preset file is not valid yaml: {}", e),
    }
  }
}

impl From<std::io::Error> for PresetError {
  fn from(e: std::io::Error) -> Self {
    PresetError::IO(e)
  }
}

impl From<serde_yaml::Error> for PresetError {
  fn from(e: serde_yaml::Error) -> Self {
    PresetError::Yaml(e)
  }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PresetFile {
  #[serde(default)]
  presets: BTreeMap<String, Vec<Segment>>,
}

/// Named segment lists, backed by a yaml file.
#[derive(Debug)]
pub struct PresetStore {
  path: PathBuf,
  file: PresetFile,
}

impl PresetStore {
  pub fn load<P: AsRef<Path>>(path: P) -> Result<PresetStore, PresetError> {
    let path = path.as_ref().to_path_buf();
    if !path.exists() {
      debug!("No preset file at {:?}, starting empty", path);
      return Ok(PresetStore { path, file: PresetFile::default() });
    }

    let contents = fs::read_to_string(&path)?;
    let file = if contents.trim().is_empty() {
      PresetFile::default()
    } else {
      serde_yaml::from_str(&contents)?
    };
    debug!("Loaded {} presets from {:?}", file.presets.len(), path);

    Ok(PresetStore { path, file })
  }

  pub fn save(&self) -> Result<(), PresetError> {
    let yaml = serde_yaml::to_string(&self.file)?;
    fs::write(&self.path, yaml)?;
    debug!("Wrote {} presets to {:?}", self.file.presets.len(), self.path);
    Ok(())
  }

  pub fn get(&self, name: &str) -> Option<&[Segment]> {
    self.file.presets.get(name).map(Vec::as_slice)
  }

  // Overwrites, returning what was there before.
  pub fn insert(&mut self, name: &str, segments: Vec<Segment>) -> Option<Vec<Segment>> {
    self.file.presets.insert(name.to_string(), segments)
  }

  pub fn remove(&mut self, name: &str) -> Option<Vec<Segment>> {
    self.file.presets.remove(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.file.presets.keys().map(String::as_str)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}
