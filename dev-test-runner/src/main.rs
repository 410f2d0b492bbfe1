//! Run every fixture through the generator and check the output invariants:
//! unique definition names and declaration before use.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use json_serializer_gen::ir::{first_duplicate_name, first_forward_reference};
use json_serializer_gen::{definitions_for, path_de, GeneratorConfig};

const DEFAULT_PATTERN: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/*.json");

fn check_fixture(path: &Path) -> Result<usize> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let object = path_de::parse_object(&source)?;
    let defs = definitions_for(&object, &GeneratorConfig::default())?;
    if let Some(name) = first_duplicate_name(&defs) {
        bail!("definition `{name}` is declared twice");
    }
    if let Some((referrer, target)) = first_forward_reference(&defs) {
        bail!("`{referrer}` references `{target}` before it is declared");
    }
    Ok(defs.len())
}

fn main() -> Result<()> {
    let pattern = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let paths = glob::glob(&pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    if paths.is_empty() {
        bail!("glob pattern matched no files: {pattern}");
    }

    let results: Vec<(PathBuf, Result<usize>)> = paths
        .into_par_iter()
        .map(|path| {
            let result = check_fixture(&path);
            (path, result)
        })
        .collect();

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(count) => eprintln!("{} {} ({count} definitions)", "✅".green(), path.display()),
            Err(error) => {
                failed += 1;
                eprintln!("{} {}: {error:#}", "❌".red(), path.display());
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} fixtures failed", results.len());
    }
    Ok(())
}
