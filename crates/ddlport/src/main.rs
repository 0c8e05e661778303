//! ddlport CLI
//!
//! Command-line tool that translates MySQL schema scripts into PostgreSQL.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use dialoguer::Select;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use ddlport_core::{Target, emitter_for, translate, translate_model};

/// Translate MySQL CREATE TABLE scripts into PostgreSQL DDL.
#[derive(Parser)]
#[command(name = "ddlport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MySQL script to translate.
    input: PathBuf,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target dialect; prompted for when omitted on a terminal.
    #[arg(short, long, value_enum, env = "DDLPORT_TARGET")]
    target: Option<TargetArg>,

    /// Print the schema model as JSON instead of DDL.
    #[arg(long)]
    dump_model: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetArg {
    /// PostgreSQL 9.4 and earlier: indexes created inside guarded blocks.
    PostgresqlCompatible,
    /// PostgreSQL 9.5 and later.
    Postgresql,
    /// Oracle (not supported yet).
    Oracle,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::PostgresqlCompatible => Self::PostgresCompatible,
            TargetArg::Postgresql => Self::Postgres,
            TargetArg::Oracle => Self::Oracle,
        }
    }
}

/// Asks for a target on the terminal.
fn prompt_target() -> anyhow::Result<Target> {
    let targets = [Target::PostgresCompatible, Target::Postgres, Target::Oracle];
    let labels = [
        "postgresql-compatible (9.4)",
        "postgresql (9.5+)",
        "oracle",
    ];
    let selection = Select::new()
        .with_prompt("Target dialect")
        .items(&labels)
        .default(1)
        .interact()?;
    Ok(targets[selection])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let target = match cli.target {
        Some(arg) => Target::from(arg),
        None if io::stdin().is_terminal() => prompt_target()?,
        None => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "no target given: pass --target or set DDLPORT_TARGET",
            )
            .exit(),
    };
    emitter_for(target)?;
    debug!(%target, input = %cli.input.display(), "translating");

    let sql = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let output = if cli.dump_model {
        let model = translate_model(&sql, target)?;
        serde_json::to_string_pretty(&model)?
    } else {
        translate(&sql, target)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{output}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
