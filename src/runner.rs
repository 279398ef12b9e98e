// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    client::ReachClient,
    config::{ConfigFile, Credentials, RunOptions},
    core::Transport,
    error::{ReachError, Result},
    file,
    progress::Progress,
    specs::TargetingSpec,
    table::ReachTable,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub table: ReachTable,
    pub file_written: Option<PathBuf>,
}

/// Spec files in order, each parsed up front so a bad file fails before
/// any request goes out.
pub fn load_specs(paths: &[PathBuf]) -> Result<Vec<(String, TargetingSpec)>> {
    paths
        .iter()
        .map(|p| -> Result<(String, TargetingSpec)> {
            Ok((label_for(p), TargetingSpec::from_path(p)?))
        })
        .collect()
}

fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load config → credentials; settle the endpoint from CLI + file.
pub fn load_credentials(opts: &mut RunOptions) -> Result<Credentials> {
    let file = ConfigFile::load(&opts.config_path)?;
    opts.api.apply(&opts.api_cli, &file);
    Credentials::from_file(&file)
}

/// Sequential: one spec at a time, request → process → row. First error aborts.
pub fn collect<T: Transport>(
    client: &mut ReachClient<T>,
    specs: &[(String, TargetingSpec)],
    mut progress: Option<&mut dyn Progress>,
) -> Result<ReachTable> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(specs.len());
    }

    let mut table = ReachTable::new();
    for (i, (label, spec)) in specs.iter().enumerate() {
        let _scope = crate::log::spec_scope(label);
        logf!("spec {}/{}", i + 1, specs.len());
        let row = match client.estimate(spec) {
            Ok(row) => row,
            Err(e) => {
                loge!("{e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };
        logf!("estimate: {} users", row.users);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, label, row.users);
        }
        table.push(row);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(table)
}

/// Top-level: config, specs, requests, export.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if opts.spec_paths.is_empty() {
        return Err(ReachError::Usage(s!("no targeting spec files given")));
    }
    let mut opts = opts.clone();
    let creds = load_credentials(&mut opts)?;
    let specs = load_specs(&opts.spec_paths)?;

    let mut client = ReachClient::new(creds, opts.api.clone(), &opts.rate)?;
    let table = collect(&mut client, &specs, progress)?;
    let file_written = file::write_export(&opts.export, &table)?;

    Ok(RunSummary { table, file_written })
}
