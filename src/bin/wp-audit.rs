//! CLI harness: load each given directory as one plugin, analyze, and print
//! the findings as JSON.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wp_plugin_audit::{Analyzer, DeprecatedFunctions, Plugin, PluginFile};

#[derive(Parser)]
#[command(name = "wp-audit", about = "Scan WordPress plugin directories for issues")]
struct Args {
    /// Plugin directories to scan; each becomes one plugin
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Replace the built-in deprecated-function table with a
    /// newline-separated list from this file
    #[arg(long, value_name = "FILE")]
    deprecated_list: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let deprecated = match &args.deprecated_list {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read deprecated list {}", path.display()))?;
            DeprecatedFunctions::new(
                text.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from),
            )
        }
        None => DeprecatedFunctions::default(),
    };

    let mut plugins = Vec::new();
    for dir in &args.dirs {
        plugins.push(load_plugin(dir)?);
    }

    let issues = Analyzer::new(deprecated).analyze(&plugins);
    println!("{}", serde_json::to_string_pretty(&issues)?);
    Ok(())
}

/// Load one directory as a plugin. File names are paths relative to the
/// plugin root, gathered in sorted order so analysis output is stable.
fn load_plugin(dir: &Path) -> Result<Plugin> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let mut paths = Vec::new();
    collect_files(dir, &mut paths)
        .with_context(|| format!("cannot read plugin directory {}", dir.display()))?;
    paths.sort();

    let mut files = Vec::new();
    for path in paths {
        let code = match fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                // Binary assets (images, archives) are expected inside
                // plugins; skip anything that is not UTF-8 text.
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        let rel = path
            .strip_prefix(dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        files.push(PluginFile::new(rel, code));
    }

    Ok(Plugin::new(name, files))
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
