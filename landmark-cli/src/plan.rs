//! Plan command implementation for the landmark tour CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use landmark_core::{Diagnostics, Solver, TourReport};
use landmark_data::{DataPaths, INTEREST_FILE, LOAD_FILE, MAP_FILE, load_problem};
use landmark_solver_dp::{DpSolver, DpSolverConfig, DpStrategy, MAX_MASK_WIDTH};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATA_DIR, ARG_FORMAT, ARG_INTEREST, ARG_LANDMARKS, ARG_LOAD, ARG_MAP, ARG_MAX_LANDMARKS,
    ARG_STRATEGY, CliError,
};

/// Report layout written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Console listing of score, numbered stops and travel time.
    #[default]
    Text,
    /// Pretty-printed JSON report with solver diagnostics.
    Json,
}

/// Table filling strategy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum StrategyChoice {
    /// Iterative fill from the full visited set downwards.
    #[default]
    BottomUp,
    /// Memoised recursion from the start state.
    TopDown,
}

impl From<StrategyChoice> for DpStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::BottomUp => Self::BottomUp,
            StrategyChoice::TopDown => Self::TopDown,
        }
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the closed tour from the first landmark (the hotel) \
                 that maximises total attractiveness. Input files can come \
                 from CLI flags, configuration files, or environment \
                 variables; unset paths default to the standard file names \
                 inside the data directory.",
    about = "Plan the most attractive tour over the landmark data files"
)]
#[ortho_config(prefix = "LANDMARK")]
pub(crate) struct PlanArgs {
    /// Directory containing the default input file names.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the personal interest file.
    #[arg(long = ARG_INTEREST, value_name = "path")]
    #[serde(default)]
    pub(crate) interest: Option<Utf8PathBuf>,
    /// Override the path to the visitor load file.
    #[arg(long = ARG_LOAD, value_name = "path")]
    #[serde(default)]
    pub(crate) load: Option<Utf8PathBuf>,
    /// Override the path to the landmark map file.
    #[arg(long = ARG_MAP, value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
    /// Number of landmarks to plan over, hotel included. Defaults to all.
    #[arg(long = ARG_LANDMARKS, value_name = "count")]
    #[serde(default)]
    pub(crate) landmarks: Option<usize>,
    /// Output layout.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Table filling strategy.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<StrategyChoice>,
    /// Largest landmark count the solver accepts.
    #[arg(long = ARG_MAX_LANDMARKS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_landmarks: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Input file locations.
    pub(crate) paths: DataPaths,
    /// Optional landmark count, hotel included.
    pub(crate) landmarks: Option<usize>,
    /// Output layout.
    pub(crate) format: OutputFormat,
    /// Solver limits and strategy.
    pub(crate) solver: DpSolverConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.paths.interest, ARG_INTEREST)?;
        Self::require_existing(&self.paths.load, ARG_LOAD)?;
        Self::require_existing(&self.paths.map, ARG_MAP)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match landmark_data::fs::file_is_file(path) {
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

fn check_range(field: &'static str, value: usize, max: usize) -> Result<usize, CliError> {
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::ArgumentOutOfRange {
            field,
            value,
            min: 1,
            max,
        })
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let paths = DataPaths {
            interest: args
                .interest
                .unwrap_or_else(|| data_dir.join(INTEREST_FILE)),
            load: args.load.unwrap_or_else(|| data_dir.join(LOAD_FILE)),
            map: args.map.unwrap_or_else(|| data_dir.join(MAP_FILE)),
        };

        let defaults = DpSolverConfig::default();
        let max_landmarks = check_range(
            ARG_MAX_LANDMARKS,
            args.max_landmarks.unwrap_or(defaults.max_landmarks),
            MAX_MASK_WIDTH,
        )?;
        let landmarks = args
            .landmarks
            .map(|count| check_range(ARG_LANDMARKS, count, max_landmarks))
            .transpose()?;

        Ok(Self {
            paths,
            landmarks,
            format: args.format.unwrap_or_default(),
            solver: DpSolverConfig {
                strategy: args.strategy.unwrap_or_default().into(),
                max_landmarks,
                ..defaults
            },
        })
    }
}

/// A solved tour ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlanOutcome {
    #[serde(flatten)]
    pub(crate) report: TourReport,
    pub(crate) diagnostics: Diagnostics,
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let outcome = execute_plan(&config)?;
    write_plan_output(writer, config.format, &outcome)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load the problem described by `config`, solve it and build the report.
pub(crate) fn execute_plan(config: &PlanConfig) -> Result<PlanOutcome, CliError> {
    let problem = load_problem(&config.paths, config.landmarks)?;
    log::info!(
        "planning over {} landmarks from {}",
        problem.landmark_count(),
        problem.landmarks.origin_name()
    );
    let solver = DpSolver::with_config(config.solver.clone());
    let response = solver
        .solve(&problem)
        .map_err(|source| CliError::Solve { source })?;
    let report = TourReport::new(&problem, &response)?;
    Ok(PlanOutcome {
        report,
        diagnostics: response.diagnostics,
    })
}

pub(crate) fn write_plan_output(
    writer: &mut dyn Write,
    format: OutputFormat,
    outcome: &PlanOutcome,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Text => render_text(&outcome.report),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(outcome).map_err(CliError::SerialiseReport)?;
            json.push('\n');
            json
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}

/// Console layout: score, numbered stops from hotel to hotel, travel time.
///
/// Numbers keep a fractional part (`11.0` rather than `11`).
pub(crate) fn render_text(report: &TourReport) -> String {
    let mut text = format!(
        "Maximized total attractiveness score: {:?}\nThe visited landmarks:\n",
        report.score
    );
    for stop in &report.stops {
        text.push_str(&format!("{}-{}\n", stop.position, stop.name));
    }
    text.push_str(&format!("Total Travel Time: {:?}\n", report.total_travel_time));
    text
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
