// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::error::Result;
use crate::settings::{Settings, Source, SourceFile};

// ---

pub const APP_NAME: &str = "fastwild";

/// Returns the location of the user configuration file without extension.
pub fn user_config_stem() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config"))
}

/// Starts building a settings loader for the given explicit configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file if set.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let user = if self.no_default { None } else { user_config_stem() };

        user.map(|stem| Source::Stem(SourceFile::new(stem).required(false)))
            .into_iter()
            .chain(self.paths.iter().map(|path| SourceFile::new(path).into()))
            .collect()
    }
}
