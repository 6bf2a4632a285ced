use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use lib::prelude::*;

#[derive(Debug, Error)]
enum UsageError {
    #[error("missing input path (usage: stackyard <input> [--model per-crate|batch] [--verbose])")]
    MissingPath,
    #[error("unsupported move model `{0}` (expected `per-crate` or `batch`)")]
    BadModel(String),
}

#[derive(Default)]
struct Opts {
    /// Path to the yard description.
    path: Option<PathBuf>,
    /// Run a single move model instead of both.
    model: Option<MoveModel>,
    /// Run in verbose mode.
    verbose: bool,
}

impl Opts {
    /// Parse CLI options.
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--model" => {
                    let model = it.next().context("missing argument to `--model`")?;
                    let model = model
                        .to_str()
                        .context("missing string argument to `--model`")?;

                    opts.model = Some(match model {
                        "per-crate" => MoveModel::PerCrate,
                        "batch" => MoveModel::Batch,
                        other => return Err(UsageError::BadModel(other.to_owned()).into()),
                    });
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                other if !other.starts_with('-') && opts.path.is_none() => {
                    opts.path = Some(PathBuf::from(other));
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    lib::cli::init(opts.verbose)?;

    let path = opts.path.ok_or(UsageError::MissingPath)?;

    let file = File::open(&path).with_context(|| path.display().to_string())?;
    let yard = lib::parse(file).with_context(|| path.display().to_string())?;

    log::info!(
        "{path}: {columns} columns, {moves} moves",
        path = path.display(),
        columns = yard.columns.len(),
        moves = yard.moves.len()
    );

    let models = match opts.model {
        Some(model) => vec![model],
        None => vec![MoveModel::PerCrate, MoveModel::Batch],
    };

    for model in models {
        let mut columns = yard.columns.clone();
        rearrange(&mut columns, &yard.moves, model)
            .with_context(|| format!("{path}: {model}", path = path.display()))?;

        println!("{model}: {tops}", tops = top_crates(&columns));
    }

    Ok(())
}
