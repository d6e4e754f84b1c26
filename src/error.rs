// std imports
use std::io::{self, Write};
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load suite {path:?}: {source}")]
    Suite {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("{failed} of {total} suite checks failed")]
    SuiteFailed { failed: usize, total: usize },
    #[error("missing pattern, specify a pattern or use --suite")]
    MissingPattern,
}

impl Error {
    /// Writes the error in the form it is shown to the user.
    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "error: {}", self)
    }

    pub fn log(&self) {
        log::debug!("{:?}", self);
        self.log_to(&mut io::stderr()).ok();
    }

    /// Returns `true` if the error only means the reader of the output went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
