use super::{batch, optimize, EvsiteAppError};
use crate::config::EvsiteConfig;
use clap::{Parser, Subcommand};
use evsite_core::model::engine::OptimizationRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Command line tool recommending sites for new EV charging stations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EvsiteApp {
    #[command(subcommand)]
    pub op: EvsiteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EvsiteOperation {
    /// place new stations within a single bounding box and write the map
    Optimize {
        /// TOML file describing the datasets and placement objective
        #[arg(short, long)]
        config_file: String,

        /// number of new stations to place
        #[arg(short, long, default_value_t = 5, allow_hyphen_values(true))]
        k: i64,

        /// grid points per axis, clamped to [10, 500]
        #[arg(short, long, default_value_t = 100, allow_hyphen_values(true))]
        resolution: i64,

        #[arg(long, default_value_t = 8.0, allow_hyphen_values(true))]
        lat_min: f64,

        #[arg(long, default_value_t = 13.5, allow_hyphen_values(true))]
        lat_max: f64,

        #[arg(long, default_value_t = 76.0, allow_hyphen_values(true))]
        lon_min: f64,

        #[arg(long, default_value_t = 80.5, allow_hyphen_values(true))]
        lon_max: f64,

        /// file to write the HTML map to
        #[arg(short, long, default_value = "map.html")]
        output: String,

        /// optional file to write the selected sites to as JSON
        #[arg(short, long)]
        metadata: Option<String>,
    },
    /// run every request of a newline-delimited JSON file in parallel
    Batch {
        /// TOML file describing the datasets and placement objective
        #[arg(short, long)]
        config_file: String,

        /// file with one JSON request object per line
        #[arg(short, long)]
        queries_file: String,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
}

impl EvsiteOperation {
    pub fn run(&self) -> Result<(), EvsiteAppError> {
        match self {
            EvsiteOperation::Optimize {
                config_file,
                k,
                resolution,
                lat_min,
                lat_max,
                lon_min,
                lon_max,
                output,
                metadata,
            } => {
                let config = EvsiteConfig::from_file(Path::new(config_file))?;
                let request = OptimizationRequest {
                    k: *k,
                    resolution: *resolution,
                    lat_min: *lat_min,
                    lat_max: *lat_max,
                    lon_min: *lon_min,
                    lon_max: *lon_max,
                };
                let response = optimize::run(
                    &config,
                    &request,
                    Path::new(output),
                    metadata.as_ref().map(Path::new),
                )?;
                log::info!(
                    "wrote {} suggested sites to '{output}'",
                    response.metadata.sites.len()
                );
                Ok(())
            }
            EvsiteOperation::Batch {
                config_file,
                queries_file,
                output_directory,
            } => {
                let config = EvsiteConfig::from_file(Path::new(config_file))?;
                let outdir = match output_directory {
                    Some(out) => Path::new(out),
                    None => Path::new(""),
                };
                let summary = batch::run(&config, Path::new(queries_file), outdir)?;
                log::info!(
                    "batch finished with {} successful and {} failed requests",
                    summary.succeeded,
                    summary.failed
                );
                Ok(())
            }
        }
    }
}
