//! Static analyzer for AI-agent execution plans.
//!
//! Reads a plan (`plan.json`) and a tool registry (`tools.json`), reports
//! issues, and optionally rewrites mechanically fixable ones.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use planlint::check::{OutputFormat, check_plan, exit_code_for};
use planlint::exit_codes;
use planlint::fix::fix_plan;
use planlint::io::config::{CONFIG_FILE, LintConfig, load_config, write_config};
use planlint::io::plan_store::{render_plan, write_plan};
use planlint::logging;

#[derive(Parser)]
#[command(
    name = "planlint",
    version,
    about = "Deterministic linter for AI-agent execution plans"
)]
struct Cli {
    /// Config file (defaults to `planlint.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lint a plan against a tool registry and print the issues.
    Check {
        /// Plan JSON file.
        plan: PathBuf,
        /// Tool registry JSON file.
        #[arg(long)]
        tools: PathBuf,
        /// Extra secret substring to scan for (repeatable).
        #[arg(long = "secret", value_name = "PATTERN")]
        secrets: Vec<String>,
        /// Attach fix suggestions to issues.
        #[arg(long)]
        autofix: bool,
        /// Fail on warnings as well as errors.
        #[arg(long)]
        deny_warnings: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Apply automatic fixes and write the patched plan.
    Fix {
        /// Plan JSON file.
        plan: PathBuf,
        /// Tool registry JSON file.
        #[arg(long)]
        tools: PathBuf,
        /// Write the patched plan here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a default `planlint.toml`.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    match cli.command {
        Command::Check {
            plan,
            tools,
            secrets,
            autofix,
            deny_warnings,
            format,
        } => {
            let mut cfg = load_config(&config_path).context("load config")?;
            cfg.secret_patterns.extend(secrets);
            cfg.autofix |= autofix;
            cfg.deny_warnings |= deny_warnings;
            cmd_check(&plan, &tools, &cfg, format)
        }
        Command::Fix {
            plan,
            tools,
            output,
        } => {
            let cfg = load_config(&config_path).context("load config")?;
            cmd_fix(&plan, &tools, output.as_deref(), &cfg)
        }
        Command::Init { force } => cmd_init(&config_path, force),
    }
}

fn cmd_check(plan: &Path, tools: &Path, cfg: &LintConfig, format: OutputFormat) -> Result<i32> {
    cfg.validate().context("invalid options")?;
    debug!(secret_patterns = cfg.secret_patterns.len(), autofix = cfg.autofix, "check options");
    let outcome = check_plan(plan, tools, cfg)?;
    let rendered = outcome.render(format)?;
    match format {
        OutputFormat::Text => println!("{rendered}"),
        OutputFormat::Json | OutputFormat::Sarif => print!("{rendered}"),
    }
    Ok(outcome.exit_code())
}

fn cmd_fix(plan: &Path, tools: &Path, output: Option<&Path>, cfg: &LintConfig) -> Result<i32> {
    let outcome = fix_plan(plan, tools, cfg)?;
    match output {
        Some(path) => write_plan(path, &outcome.patched)?,
        None => print!("{}", render_plan(&outcome.patched)?),
    }
    eprintln!(
        "fix: applied={} remaining={}",
        outcome.applied,
        outcome.after.issues().len()
    );
    if !outcome.after.is_clean() {
        eprintln!("{}", outcome.after);
    }
    Ok(exit_code_for(&outcome.after, cfg.deny_warnings))
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &LintConfig::default())?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}
