use std::{error::Error, path::PathBuf};

use bitcalc::{extract, parse, render, NumberKind, Radix, Segment, Width};
use common::utils;
use libbitcalc::{logging, presets::PresetStore, CliError, UNAVAILABLE};
use log::{debug, error, info, warn};
use structopt::{clap::AppSettings, StructOpt};

#[derive(StructOpt, Debug)]
#[structopt(name = "bitcalc", about = "Integer representations and bit segments")]
struct Cli {
  #[structopt(short, long, global = true)]
  verbose: bool,
  #[structopt(long, global = true)]
  log_to_file: bool,
  #[structopt(long, global = true, default_value = "./presets.yaml")]
  presets: PathBuf,
  #[structopt(subcommand)]
  cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
  /// Show natural and two's complement forms of a number. Put `--` before negative hex input.
  #[structopt(setting = AppSettings::AllowNegativeNumbers)]
  Int {
    value: String,
    #[structopt(short, long, default_value = "d")]
    radix: Radix,
    #[structopt(short, long, default_value = "32")]
    width: Width,
    #[structopt(short, long, default_value = "math")]
    kind: NumberKind,
    /// Group the fixed-width forms in nibbles
    #[structopt(short, long)]
    group: bool,
  },
  /// Slice a number into bit segments, each given as end:start[:label]
  Segment {
    value: String,
    #[structopt(short, long, default_value = "d")]
    radix: Radix,
    #[structopt(short = "s", long = "seg", number_of_values = 1)]
    segments: Vec<Segment>,
    /// Start from a saved preset, --seg segments are appended to it
    #[structopt(short, long)]
    preset: Option<String>,
  },
  /// Manage named segment presets
  Preset(PresetCommand),
}

#[derive(StructOpt, Debug)]
enum PresetCommand {
  List,
  Show { name: String },
  Save {
    name: String,
    #[structopt(short = "s", long = "seg", number_of_values = 1, required = true)]
    segments: Vec<Segment>,
  },
  Delete { name: String },
}

fn show_int(value: &str, radix: Radix, width: Width, kind: NumberKind, group: bool) -> Result<(), Box<dyn Error>> {
  println!("input\t{} {}", radix.leading(Some(width)), value);

  let rendering = parse(value, radix, width, kind).and_then(|v| render(&v, width));
  match rendering {
    Ok(r) => {
      let (bin, hex) = if group {
        (utils::group_digits(&r.computer.bin, 4, '_'), utils::group_digits(&r.computer.hex, 4, '_'))
      } else {
        (r.computer.bin, r.computer.hex)
      };
      println!("dec\t{}", r.natural_dec);
      println!("hex\t{}", r.natural_hex);
      println!("bin\t{}", bin);
      println!("chex\t{}", hex);
      Ok(())
    }
    Err(e) => {
      for field in ["dec", "hex", "bin", "chex"] {
        println!("{}\t{}", field, UNAVAILABLE);
      }
      warn!("{} as {} {}-bit {}: {}", value, radix, width, kind, e);
      Err(e.into())
    }
  }
}

fn show_segments(value: &str, radix: Radix, mut segments: Vec<Segment>, preset: Option<String>, store: &PresetStore) -> Result<(), Box<dyn Error>> {
  if let Some(name) = preset {
    let saved = store.get(&name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
    debug!("Preset {} has {} segments", name, saved.len());
    let mut all = saved.to_vec();
    all.append(&mut segments);
    segments = all;
  }

  println!("input\t{} {}", radix.leading(None), value);

  match extract(value, radix, &segments) {
    Ok(outputs) => {
      for o in outputs {
        println!("{}\t{}\t{}\t{}\t{}", o.range, o.label, o.hex, o.decimal, o.bin);
      }
      Ok(())
    }
    Err(e) => {
      println!("{}", UNAVAILABLE);
      warn!("cannot calculate segments of {}: {}", value, e);
      Err(e.into())
    }
  }
}

fn manage_presets(cmd: PresetCommand, mut store: PresetStore) -> Result<(), Box<dyn Error>> {
  match cmd {
    PresetCommand::List => {
      for name in store.names() {
        println!("{}", name);
      }
    }
    PresetCommand::Show { name } => {
      let segments = store.get(&name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
      for s in segments {
        println!("{}", s);
      }
    }
    PresetCommand::Save { name, segments } => {
      if store.insert(&name, segments).is_some() {
        info!("Overwriting preset {}", name);
      }
      store.save()?;
      println!("saved {} to {:?}", name, store.path());
    }
    PresetCommand::Delete { name } => {
      store.remove(&name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
      store.save()?;
      println!("deleted {}", name);
    }
  }
  Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
  let args: Cli = Cli::from_args();
  let _logger = logging::init(args.verbose, args.log_to_file)?;
  debug!("{:?}", args);

  let res = run(args);
  if let Err(e) = &res {
    error!("{}", e);
  }
  res
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
  match args.cmd {
    Command::Int { value, radix, width, kind, group } => show_int(&value, radix, width, kind, group),
    Command::Segment { value, radix, segments, preset } => {
      let store = PresetStore::load(&args.presets)?;
      show_segments(&value, radix, segments, preset, &store)
    }
    Command::Preset(cmd) => manage_presets(cmd, PresetStore::load(&args.presets)?),
  }
}
