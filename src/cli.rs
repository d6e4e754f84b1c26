// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;
use clap_complete::Shell;
use wildcard::Policy;

// local imports
use crate::settings::Settings;

// ---

/// Match text against a wildcard pattern with '*' (any sequence) and '?' (any single code point).
///
/// Prints every TEXT, or every line of standard input if no TEXT is given, that matches PATTERN.
/// Exits with status 0 if something was selected, 1 if nothing was, 2 on error.
#[derive(Parser)]
#[command(version)]
pub struct Opt {
    /// Configuration file path, may be repeated; an empty value or '-' discards the files listed before it and the user configuration file.
    #[arg(long, value_name = "FILE", env = "FASTWILD_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Wildcard pattern, the whole text must match it.
    #[arg(required_unless_present_any = ["suite", "shell_completions"])]
    pub pattern: Option<String>,

    /// Texts to match, lines of standard input are used if none are given.
    pub texts: Vec<String>,

    /// Comparison policy [default: taken from configuration, exact unless changed].
    #[arg(long, value_enum, env = "FASTWILD_POLICY", overrides_with = "policy")]
    pub policy: Option<Policy>,

    /// Handful alias for --policy=ignore-case, overrides --policy option.
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Select texts that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected texts.
    #[arg(short, long)]
    pub count: bool,

    /// Run the regression suites from the given files instead of matching, may be repeated.
    #[arg(long, value_name = "FILE", num_args = 1, conflicts_with_all = ["pattern", "invert_match", "count"])]
    pub suite: Vec<PathBuf>,

    /// Number of passes over each suite [default: taken from configuration, 1 unless changed].
    #[arg(long, value_name = "N", env = "FASTWILD_REPEAT", overrides_with = "repeat")]
    pub repeat: Option<usize>,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub shell_completions: Option<Shell>,
}

impl Opt {
    /// Returns the configuration files to load and whether the user configuration file is discarded.
    pub fn config_files(&self) -> (&[String], bool) {
        match self.config.iter().rposition(|x| x.is_empty() || x == "-") {
            Some(i) => (&self.config[i + 1..], true),
            None => (&self.config, false),
        }
    }

    pub fn effective_policy(&self, settings: &Settings) -> Policy {
        if self.ignore_case {
            Policy::IgnoreCase
        } else {
            self.policy.unwrap_or(settings.policy)
        }
    }

    pub fn effective_repeat(&self, settings: &Settings) -> usize {
        self.repeat.unwrap_or(settings.repeat).max(1)
    }
}
