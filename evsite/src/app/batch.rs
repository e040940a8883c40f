use super::{optimize, EvsiteAppError};
use crate::config::EvsiteConfig;
use evsite_core::model::engine::{OptimizationMetadata, OptimizationRequest};
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::Serialize;
use std::{
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};

pub const METADATA_FILENAME: &str = "metadata.jsonl";

/// one line of the batch metadata file.
#[derive(Serialize, Debug)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BatchOutcome {
    Success {
        index: usize,
        html_file: String,
        metadata: OptimizationMetadata,
    },
    Failure {
        index: usize,
        error: String,
    },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// runs every request of a newline-delimited JSON file in parallel against a single
/// dataset snapshot. each successful request writes `map-{index}.html` to the output
/// directory. every line, successful or not, gets a row in `metadata.jsonl`, in input
/// order. blank lines are skipped but still count towards the index.
pub fn run(
    config: &EvsiteConfig,
    queries_file: &Path,
    output_directory: &Path,
) -> Result<BatchSummary, EvsiteAppError> {
    let contents =
        std::fs::read_to_string(queries_file).map_err(|e| EvsiteAppError::ReadError {
            path: queries_file.to_path_buf(),
            message: e.to_string(),
        })?;
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();
    if !output_directory.as_os_str().is_empty() && !output_directory.is_dir() {
        std::fs::create_dir_all(output_directory).map_err(|e| EvsiteAppError::WriteError {
            path: output_directory.to_path_buf(),
            message: format!("error building output directory: {e}"),
        })?;
    }
    let engine = optimize::build_engine(config)?;

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("optimize requests")
            .total(lines.len())
            .build()
            .map_err(|e| {
                EvsiteAppError::InternalError(format!("failure building progress bar: {e}"))
            })?,
    ));
    let outcomes: Vec<BatchOutcome> = lines
        .into_par_iter()
        .map(|(index, line)| {
            let outcome = match run_line(&engine, index, line, output_directory) {
                Ok((html_file, metadata)) => BatchOutcome::Success {
                    index,
                    html_file,
                    metadata,
                },
                Err(e) => {
                    log::warn!("request {index} failed: {e}");
                    BatchOutcome::Failure {
                        index,
                        error: e.to_string(),
                    }
                }
            };
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            outcome
        })
        .collect();
    eprintln!();

    let metadata_path = output_directory.join(METADATA_FILENAME);
    let mut writer = std::fs::File::create(&metadata_path)
        .map(std::io::BufWriter::new)
        .map_err(|e| EvsiteAppError::WriteError {
            path: metadata_path.clone(),
            message: e.to_string(),
        })?;
    for outcome in outcomes.iter() {
        let row = serde_json::to_string(outcome).map_err(|e| {
            EvsiteAppError::InternalError(format!("failure serializing batch row: {e}"))
        })?;
        writeln!(writer, "{row}").map_err(|e| EvsiteAppError::WriteError {
            path: metadata_path.clone(),
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| EvsiteAppError::WriteError {
        path: metadata_path.clone(),
        message: e.to_string(),
    })?;

    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    Ok(BatchSummary {
        succeeded,
        failed: outcomes.len() - succeeded,
    })
}

fn run_line(
    engine: &evsite_core::model::engine::OptimizationEngine,
    index: usize,
    line: &str,
    output_directory: &Path,
) -> Result<(String, OptimizationMetadata), EvsiteAppError> {
    let request: OptimizationRequest = serde_json::from_str(line).map_err(|e| {
        EvsiteAppError::InvalidUserInput(format!("line {index} is not a valid request: {e}"))
    })?;
    let response = engine.optimize(&request)?;
    let html_file = format!("map-{index}.html");
    optimize::write_file(&output_directory.join(&html_file), &response.document.html)?;
    Ok((html_file, response.metadata))
}
