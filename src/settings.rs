// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use wildcard::Policy;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub policy: Policy,
    pub repeat: usize,
}

impl Settings {
    /// Loads settings from the embedded defaults with the given sources layered on top, in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for source in sources {
            log::debug!("add configuration source {:?}", source);
            builder = builder.add_source(source.file());
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: Policy::Exact,
            repeat: 1,
        }
    }
}

// ---

/// A configuration file to load settings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file with a known path, its format is taken from the extension.
    File(SourceFile),
    /// A file given by its path without extension, any supported extension is tried.
    Stem(SourceFile),
}

impl Source {
    fn file(&self) -> File<FileSourceFile, FileFormat> {
        match self {
            Self::File(f) => File::from(f.path.as_path()).required(f.required),
            Self::Stem(f) => File::with_name(&f.path.to_string_lossy()).required(f.required),
        }
    }
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    required: bool,
}

impl SourceFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
