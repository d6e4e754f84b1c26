// std imports
use std::hint::black_box;
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;
use wildcard::{Policy, matches};

// local imports
use crate::error::{Error, Result};

// ---

/// A named collection of case groups.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Suite {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Suite {
    /// Loads a suite from a YAML, TOML or JSON file, the format is taken from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("load suite {:?}", path);
        Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|source| Error::Suite {
                path: path.into(),
                source,
            })
    }

    /// Parses a suite from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(document, FileFormat::Yaml))
            .build()?
            .try_deserialize()?)
    }

    /// Returns the number of checks one pass over the suite performs.
    pub fn checks(&self) -> usize {
        self.groups.iter().map(Group::checks).sum()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Group {
    pub name: String,
    /// Policies applied to cases that do not specify their own.
    #[serde(default)]
    pub policy: Policies,
    #[serde(default)]
    pub cases: Vec<Case>,
}

impl Group {
    fn checks(&self) -> usize {
        self.cases
            .iter()
            .map(|case| case.policies(self.policy).iter().count())
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Case {
    pub pattern: String,
    pub text: String,
    pub expect: bool,
    #[serde(default)]
    pub policy: Option<Policies>,
}

impl Case {
    pub fn new(pattern: impl Into<String>, text: impl Into<String>, expect: bool) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
            expect,
            policy: None,
        }
    }

    pub fn with_policy(self, policy: Policies) -> Self {
        Self {
            policy: Some(policy),
            ..self
        }
    }

    fn policies(&self, default: Policies) -> Policies {
        self.policy.unwrap_or(default)
    }
}

/// Policies a case is checked with.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Policies {
    #[default]
    Both,
    Exact,
    IgnoreCase,
}

impl Policies {
    pub fn iter(self) -> impl Iterator<Item = Policy> {
        let policies: &'static [Policy] = match self {
            Self::Both => &Policy::ALL,
            Self::Exact => &[Policy::Exact],
            Self::IgnoreCase => &[Policy::IgnoreCase],
        };
        policies.iter().copied()
    }
}

// ---

/// Executes suites and collects their results.
pub struct Runner {
    repeat: usize,
}

impl Runner {
    pub fn new(repeat: usize) -> Self {
        Self { repeat: repeat.max(1) }
    }

    pub fn run(&self, suite: &Suite) -> Report {
        let mut report = Report {
            name: suite.name.clone(),
            ..Default::default()
        };

        for group in &suite.groups {
            let mut result = GroupReport {
                name: group.name.clone(),
                ..Default::default()
            };

            for pass in 0..self.repeat {
                for case in &group.cases {
                    for policy in case.policies(group.policy).iter() {
                        let start = Instant::now();
                        let actual = matches(black_box(&case.pattern), black_box(&case.text), policy);
                        report.timing.add(policy, start.elapsed());

                        if actual == case.expect {
                            result.passed += 1;
                        } else {
                            result.failed += 1;
                            if pass == 0 {
                                result.failures.push(Failure {
                                    case: case.clone(),
                                    policy,
                                });
                            }
                        }
                    }
                }
            }

            log::debug!(
                "group {:?}: {} passed, {} failed",
                result.name,
                result.passed,
                result.failed
            );
            report.groups.push(result);
        }

        report
    }
}

// ---

#[derive(Debug, Default)]
pub struct Report {
    pub name: String,
    pub groups: Vec<GroupReport>,
    pub timing: Timing,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.groups.iter().map(|g| g.passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.groups.iter().map(|g| g.failed).sum()
    }

    pub fn total(&self) -> usize {
        self.passed() + self.failed()
    }

    pub fn ok(&self) -> bool {
        self.failed() == 0
    }

    /// Writes pass/fail lines per group, failing cases and elapsed time per policy.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for group in &self.groups {
            if group.ok() {
                writeln!(out, "Passed {} tests", group.name)?;
            } else {
                writeln!(out, "Failed {} tests", group.name)?;
                for failure in &group.failures {
                    writeln!(
                        out,
                        "  pattern {:?} text {:?} with {} policy: expected {}",
                        failure.case.pattern, failure.case.text, failure.policy, failure.case.expect,
                    )?;
                }
            }
        }

        for policy in Policy::ALL {
            let (elapsed, count) = self.timing.get(policy);
            if count != 0 {
                writeln!(
                    out,
                    "Matching with {} policy: {:.3} seconds",
                    policy,
                    elapsed.as_secs_f64()
                )?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct GroupReport {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

impl GroupReport {
    pub fn ok(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub case: Case,
    pub policy: Policy,
}

/// Accumulated matching time and number of calls per policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timing {
    exact: (Duration, usize),
    ignore_case: (Duration, usize),
}

impl Timing {
    pub fn add(&mut self, policy: Policy, elapsed: Duration) {
        let slot = self.slot(policy);
        slot.0 += elapsed;
        slot.1 += 1;
    }

    pub fn get(&self, policy: Policy) -> (Duration, usize) {
        match policy {
            Policy::Exact => self.exact,
            Policy::IgnoreCase => self.ignore_case,
        }
    }

    fn slot(&mut self, policy: Policy) -> &mut (Duration, usize) {
        match policy {
            Policy::Exact => &mut self.exact,
            Policy::IgnoreCase => &mut self.ignore_case,
        }
    }
}
