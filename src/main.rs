// std imports
use std::{
    io::{Write, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};
use wildcard::Pattern;

// local imports
use fastwild::{
    App, Options, Runner, Settings, Suite,
    cli::{self, Opt},
    config,
    error::*,
};

const FASTWILD_DEBUG_LOG: &str = "FASTWILD_DEBUG_LOG";
const FASTWILD_DEBUG_LOG_STYLE: &str = "FASTWILD_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<(Opt, Settings)> {
    if std::env::var(FASTWILD_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(FASTWILD_DEBUG_LOG)
                .write_style(FASTWILD_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let opt = cli::Opt::parse();

    let (configs, no_default_configs) = opt.config_files();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);

    Ok((opt, settings))
}

/// Returns `true` if something was selected or every suite passed.
fn run() -> Result<bool> {
    let (opt, settings) = bootstrap()?;

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(true);
    }

    if !opt.suite.is_empty() {
        return run_suites(&opt, &settings);
    }

    let pattern = opt.pattern.as_deref().ok_or(Error::MissingPattern)?;
    let pattern = Pattern::new(pattern).with_policy(opt.effective_policy(&settings));
    log::debug!("pattern {:?} with {} policy", pattern.as_str(), pattern.policy());

    let app = App::new(Options {
        pattern,
        invert: opt.invert_match,
        count: opt.count,
    });

    let mut output = stdout().lock();

    let result = if opt.texts.is_empty() {
        log::debug!("reading lines from stdin");
        app.run_lines(stdin().lock(), &mut output)
    } else {
        log::debug!("matching {} texts", opt.texts.len());
        app.run(&opt.texts, &mut output)
    };

    match result {
        Err(err) if err.is_broken_pipe() => Ok(true),
        result => result,
    }
}

fn run_suites(opt: &Opt, settings: &Settings) -> Result<bool> {
    let runner = Runner::new(opt.effective_repeat(settings));
    let mut output = stdout().lock();

    let (mut failed, mut total) = (0, 0);
    for path in &opt.suite {
        let suite = Suite::load(path)?;
        let report = runner.run(&suite);
        report.write(&mut output)?;
        failed += report.failed();
        total += report.total();
    }
    output.flush()?;

    if failed != 0 {
        return Err(Error::SuiteFailed { failed, total });
    }

    Ok(true)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
