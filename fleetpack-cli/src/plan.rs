//! Plan command implementation for the Fleetpack CLI.

use std::collections::HashSet;
use std::io::{BufReader, Write};
use std::time::{Duration, Instant};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fleetpack_allocator_ffd::FirstFitDecreasing;
use fleetpack_core::{Allocator, Bin, PlanRequest};
use fleetpack_fs::{create_utf8_file, ensure_parent_dir, open_utf8_file};
use fleetpack_metrics::{BinItem, LoadMetrics};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assign store demands to fleet vehicles. The request is a \
                 JSON document with `stores` (id, name, demand) and \
                 `vehicles` (id, name, capacity); the resulting plan is \
                 written as JSON to stdout or the --output path.",
    about = "Assign store demands to fleet vehicles"
)]
#[ortho_config(prefix = "FLEETPACK")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the plan to this path instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional output path; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fleetpack_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            output: args.output,
        })
    }
}

/// Timing figures for one plan invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlanDiagnostics {
    /// Wall time spent in allocation and scoring.
    pub(crate) allocation_time: Duration,
}

/// The full response shape written for one plan invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutcome {
    /// Aggregate metrics plus the per-vehicle breakdown.
    pub(crate) metrics: LoadMetrics,
    /// Demand items no vehicle could take, in request order.
    pub(crate) unassigned: Vec<BinItem>,
    /// Timing figures.
    pub(crate) diagnostics: PlanDiagnostics,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;

    let outcome = execute_plan(&request)?;
    match config.output {
        Some(path) => write_outcome_file(&path, &outcome),
        None => write_outcome(writer, &outcome),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(request: &PlanRequest) -> Result<PlanOutcome, CliError> {
    let started_at = Instant::now();
    let bins = FirstFitDecreasing::new().allocate(&request.stores, &request.vehicles);
    let metrics = fleetpack_metrics::score(&bins, request.stores.len());

    if metrics.is_infeasible() {
        return Err(CliError::InfeasiblePlan {
            demand_count: request.stores.len(),
        });
    }

    Ok(PlanOutcome {
        unassigned: unassigned_items(request, &bins),
        metrics,
        diagnostics: PlanDiagnostics {
            allocation_time: started_at.elapsed(),
        },
    })
}

/// Demand items absent from every bin, in request order.
fn unassigned_items(request: &PlanRequest, bins: &[Bin]) -> Vec<BinItem> {
    let assigned: HashSet<u64> = bins
        .iter()
        .flat_map(|bin| bin.items().iter().map(|item| item.id))
        .collect();
    request
        .stores
        .iter()
        .filter(|item| !assigned.contains(&item.id))
        .map(|item| BinItem {
            id: item.id,
            name: item.name.clone(),
        })
        .collect()
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_outcome(writer: &mut dyn Write, outcome: &PlanOutcome) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(outcome).map_err(CliError::SerializePlanOutcome)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

fn write_outcome_file(path: &Utf8Path, outcome: &PlanOutcome) -> Result<(), CliError> {
    ensure_parent_dir(path).map_err(|source| CliError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreatePlanOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_outcome(&mut file, outcome)
}
