// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Context;
use clap::{ArgAction, Parser};
use serde::Serialize;
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};
use targetcheck::{
    format_validation_errors, summarize_targets, validate_targets, TargetSummary, ValidationError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "target-lint")]
#[command(about = "Check a scan target list before handing it to a scanner.")]
struct CommandLine {
    /// Target list to check; `-` or nothing reads stdin
    file: Option<PathBuf>,
    /// Print errors (and summary) as JSON
    #[arg(long)]
    json: bool,
    /// Also print how many targets of each kind were found
    #[arg(long)]
    summary: bool,
    /// More log output on stderr (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    errors: &'a [ValidationError],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<TargetSummary>,
}

fn init_logging(verbosity: u8) {
    let level: &str = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "reading targets");
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            info!("reading targets from stdin");
            let mut buf: String = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: &CommandLine) -> anyhow::Result<bool> {
    let text: String = read_input(cli.file.as_ref())?;
    let errors: Vec<ValidationError> = validate_targets(&text);
    let summary: Option<TargetSummary> = cli.summary.then(|| summarize_targets(&text));

    if cli.json {
        let report: Report = Report {
            errors: &errors,
            summary,
        };
        let out: String = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{out}");
    } else {
        if !errors.is_empty() {
            println!("{}", format_validation_errors(&errors));
        }
        if let Some(summary) = summary {
            println!("{summary}");
        }
    }

    info!(invalid = errors.len(), "done");
    Ok(errors.is_empty())
}

fn main() -> ExitCode {
    let cli: CommandLine = CommandLine::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("target-lint: {e:#}");
            ExitCode::from(2)
        }
    }
}
