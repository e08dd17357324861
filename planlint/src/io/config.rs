//! Linter configuration stored in `planlint.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::rules::LintOptions;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "planlint.toml";

/// Linter configuration (TOML).
///
/// Intended to be edited by humans. Missing fields default to values that
/// lint without secret scanning and without fix suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LintConfig {
    /// Case-insensitive substrings treated as leaked credentials.
    pub secret_patterns: Vec<String>,

    /// Attach fix suggestions to issues.
    pub autofix: bool,

    /// Treat warnings as failures for the exit code.
    pub deny_warnings: bool,

    pub limits: LimitsConfig,
}

/// Input size limits applied before linting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Reject plan files larger than this many bytes.
    pub max_plan_bytes: u64,

    /// Reject plans with more steps than this.
    pub max_steps: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_plan_bytes: 2 * 1024 * 1024,
            max_steps: 1000,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            secret_patterns: Vec::new(),
            autofix: false,
            deny_warnings: false,
            limits: LimitsConfig::default(),
        }
    }
}

impl LintConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_plan_bytes == 0 {
            return Err(anyhow!("limits.max_plan_bytes must be > 0"));
        }
        if self.limits.max_steps == 0 {
            return Err(anyhow!("limits.max_steps must be > 0"));
        }
        if let Some(idx) = self
            .secret_patterns
            .iter()
            .position(|pattern| pattern.trim().is_empty())
        {
            return Err(anyhow!("secret_patterns[{idx}] must be non-empty"));
        }
        Ok(())
    }

    /// Options for a single lint call.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            secret_patterns: self.secret_patterns.clone(),
            autofix: self.autofix,
        }
    }
}

/// Load `planlint.toml`, falling back to defaults when the file is absent.
///
/// A present but invalid file is an error; it is never silently ignored.
pub fn load_config(path: &Path) -> Result<LintConfig> {
    let cfg = match fs::read_to_string(path) {
        Ok(contents) => {
            debug!(path = %path.display(), "load config");
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
        }
        Err(err) if err.kind() == ErrorKind::NotFound => LintConfig::default(),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` under a short header, replacing any existing file in one rename.
pub fn write_config(path: &Path, cfg: &LintConfig) -> Result<()> {
    cfg.validate()?;
    let body = toml::to_string_pretty(cfg).context("serialize config toml")?;
    write_atomic(path, &format!("{CONFIG_HEADER}{body}\n"))
}

const CONFIG_HEADER: &str = "# planlint configuration. CLI flags add to these settings.\n\n";

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let staging = path.with_extension("toml.partial");
    fs::write(&staging, contents)
        .with_context(|| format!("stage config {}", staging.display()))?;
    fs::rename(&staging, path).with_context(|| format!("install config {}", path.display()))
}
