use log::LevelFilter;
use simplelog::WriteLogger;
use std::path::Path;
use thiserror::Error;

/// Send log messages at `level` and above to the file at `path`, which is
/// truncated first.  The terminal belongs to the UI, so logs only ever go to a
/// file.
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let file = fs_err::File::create(path).map_err(LoggingError::Open)?;
    WriteLogger::init(level, simplelog::Config::default(), file)?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn unopenable_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent").join("gridsnake.log");
        assert!(matches!(
            init(&path, LevelFilter::Info),
            Err(LoggingError::Open(_))
        ));
    }
}
