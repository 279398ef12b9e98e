// src/cli.rs
use std::path::PathBuf;

use crate::config::{ExportFormat, RateOptions, RunOptions};
use crate::error::{ReachError, Result};
use crate::progress::{Progress, StderrProgress};
use crate::runner;

pub enum Command {
    Run(RunOptions),
    Help,
}

pub fn run() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(opts) if opts.dry_run => dry_run(opts),
        Command::Run(opts) => {
            let progress: &mut dyn Progress = &mut StderrProgress::default();
            let summary = runner::run(&opts, Some(progress))?;
            print!("{}", summary.table.render_text());
            if let Some(path) = summary.file_written {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}

// URL + minified spec per file; the token never leaves the process.
fn dry_run(mut opts: RunOptions) -> Result<()> {
    if opts.spec_paths.is_empty() {
        return Err(ReachError::Usage(s!("no targeting spec files given")));
    }
    let creds = runner::load_credentials(&mut opts)?;
    let url = opts.api.endpoint_url(creds.account_id());
    for (label, spec) in runner::load_specs(&opts.spec_paths)? {
        println!("# {label}");
        println!("GET {url}");
        println!("  currency={}", opts.api.currency);
        println!("  optimize_for={}", opts.api.optimize_for);
        println!("  targeting_spec={}", spec.minify());
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut format: Option<ExportFormat> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| ReachError::Usage(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "-c" | "--config" => opts.config_path = PathBuf::from(value(&a)?),
            "-o" | "--out" => opts.export.set_path(&value(&a)?),
            "--format" => {
                let v = value(&a)?;
                format = Some(ExportFormat::from_name(&v)
                    .ok_or_else(|| ReachError::Usage(format!("Unknown format: {v}")))?);
            }
            "--no-headers" => opts.export.include_headers = false,
            "--rate" => {
                let v = value(&a)?;
                opts.rate = RateOptions::parse(&v)
                    .ok_or_else(|| ReachError::Usage(format!("Bad --rate (want N/SECS): {v}")))?;
            }
            "--api-version" => opts.api_cli.api_version = Some(value(&a)?),
            "--base-url" => opts.api_cli.base_url = Some(value(&a)?),
            "--dry-run" => opts.dry_run = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ReachError::Usage(format!("Unknown arg: {flag}")));
            }
            _ => opts.spec_paths.push(PathBuf::from(&a)),
        }
    }

    opts.export.format = format
        .or_else(|| opts.export.format_from_path())
        .unwrap_or(ExportFormat::Csv);

    Ok(Command::Run(opts))
}
