// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod settings;
pub mod suite;

// public uses
pub use app::{App, Options};
pub use settings::Settings;
pub use suite::{Report, Runner, Suite};
