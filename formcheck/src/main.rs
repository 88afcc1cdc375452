//! Strategy-based form validation CLI.
//!
//! Reads an ordered check list (`formcheck.toml`) and field values
//! (`form.json`), runs the checks, and reports the first failure. The exit
//! code tells a calling script whether the submission may proceed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::debug;

use formcheck::check::{SubmitOutcome, build_registry, check_files};
use formcheck::core::bonus::{PerformanceLevel, calculate_bonus};
use formcheck::exit_codes;
use formcheck::io::config::{FormConfig, load_config};
use formcheck::io::init::{CONFIG_FILE, FORM_FILE, InitOptions, init_samples};
use formcheck::logging;

#[derive(Parser)]
#[command(
    name = "formcheck",
    version,
    about = "Ordered, short-circuiting form validation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write sample `formcheck.toml` and `form.json` into the current directory.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Run the configured checks; print `ok` or the first failing message.
    Check {
        /// Check list (TOML).
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,
        /// Field values (JSON object). Missing file means no values.
        #[arg(long, default_value = FORM_FILE)]
        form: PathBuf,
        /// Override a field value (`NAME=VALUE`), repeatable.
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// List registered rule names (built-ins plus config patterns).
    Rules {
        /// Check list (TOML). Ignored if missing.
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
    /// Print the bonus for a performance level (S, A, B) and salary.
    Bonus { level: PerformanceLevel, salary: u64 },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Check { config, form, set } => cmd_check(&config, &form, &set),
        Command::Rules { config } => cmd_rules(&config),
        Command::Bonus { level, salary } => cmd_bonus(level, salary),
    }
}

fn cmd_init(force: bool) -> Result<i32> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let paths = init_samples(&root, &InitOptions { force })?;
    println!("wrote {}", paths.config_path.display());
    println!("wrote {}", paths.form_path.display());
    Ok(exit_codes::OK)
}

fn cmd_check(config: &Path, form: &Path, set: &[String]) -> Result<i32> {
    match check_files(config, form, set)? {
        SubmitOutcome::Accepted => {
            println!("ok");
            Ok(exit_codes::OK)
        }
        SubmitOutcome::Rejected { message } => {
            println!("{message}");
            Ok(exit_codes::REJECTED)
        }
    }
}

fn cmd_rules(config: &Path) -> Result<i32> {
    let cfg = if config.exists() {
        load_config(config)?
    } else {
        debug!(path = %config.display(), "config missing; listing built-in rules");
        FormConfig::default()
    };
    let registry = build_registry(&cfg)?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(exit_codes::OK)
}

fn cmd_bonus(level: PerformanceLevel, salary: u64) -> Result<i32> {
    let bonus = calculate_bonus(level, salary)
        .ok_or_else(|| anyhow!("bonus for level {level} overflows (salary {salary})"))?;
    println!("{bonus}");
    Ok(exit_codes::OK)
}
