use std::error::Error;

use flexi_logger::{DeferredNow, Record, style, TS_DASHES_BLANK_COLONS_DOT_BLANK, Logger, LoggerHandle, Duplicate, FileSpec, WriteMode};

fn log_format(
  w: &mut dyn std::io::Write,
  now: &mut DeferredNow,
  record: &Record,
) -> Result<(), std::io::Error> {
  let level = record.level();
  write!(
      w,
      "[{}] {} [{}:{}] {}",
      style(level).paint(now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK).to_string()),
      style(level).paint(level.to_string()),
      record.file().unwrap_or("<unnamed>"),
      record.line().unwrap_or(0),
      style(level).paint(&record.args().to_string())
  )
}

/// Logs to stderr, or to a file with warnings still echoed to stderr.
/// Keep the handle alive until exit, buffered file output is flushed on drop.
pub fn init(verbose: bool, file: bool) -> Result<LoggerHandle, Box<dyn Error>> {
  let level = if verbose { "debug" } else { "warn" };
  let logger = Logger::try_with_env_or_str(level)?
    .format(log_format);

  let handle = if file {
    logger.log_to_file(FileSpec::default())
      .write_mode(WriteMode::BufferAndFlush)
      .duplicate_to_stderr(Duplicate::Warn)
      .start()?
  } else {
    logger.start()?
  };

  Ok(handle)
}
