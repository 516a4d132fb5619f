//! ahp-sherpa - evaluate an AHP hierarchy and print the report.
//!
//! Configuration comes from `AHP_SHERPA__*` environment variables (see
//! [`ahp_sherpa::config::AppConfig`]). With `AHP_SHERPA__HIERARCHY_PATH` set
//! the file's hierarchy is evaluated; otherwise the built-in KPI preset is.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ahp_sherpa::adapters::FileHierarchySource;
use ahp_sherpa::application::{EvaluateHierarchyCommand, EvaluateHierarchyHandler};
use ahp_sherpa::config::{AppConfig, ConfigError, LoggingConfig, OutputFormat};
use ahp_sherpa::domain::ahp::{presets, Comparison, ComparisonReport, PrioritySolver};
use ahp_sherpa::domain::foundation::{DomainError, ErrorCode};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = %e.code, details = ?e.details, "Evaluation failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured filter
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(config: &AppConfig) -> Result<String, DomainError> {
    let format = config.output.format;

    match &config.hierarchy_path {
        Some(path) => {
            info!(path = %path.display(), "Evaluating hierarchy definition");
            let handler = EvaluateHierarchyHandler::new(
                Arc::new(FileHierarchySource::new(path)),
                config.evaluation_settings(),
            );
            let report = handler.handle(EvaluateHierarchyCommand::default()).await?;

            match format {
                OutputFormat::Text => Ok(report.to_string()),
                OutputFormat::Json => report.to_json().map_err(serialization_error),
            }
        }
        None => {
            info!("No hierarchy configured, evaluating KPI preset");
            let reports = evaluate_presets(config)?;

            match format {
                OutputFormat::Text => Ok(reports
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&reports).map_err(serialization_error)
                }
            }
        }
    }
}

/// Criteria weights plus the Case Complexity alternatives, globally weighted.
fn evaluate_presets(config: &AppConfig) -> Result<Vec<ComparisonReport>, DomainError> {
    let settings = config.evaluation_settings();
    let solver = PrioritySolver::new(settings.solver);

    let criteria = Comparison::evaluate(presets::KPI_CRITERIA_NAME, &presets::kpi_criteria(), &solver)?;
    let alternatives = Comparison::evaluate(
        presets::CASE_COMPLEXITY_ALTERNATIVES_NAME,
        &presets::case_complexity_alternatives(),
        &solver,
    )?;

    settings.enforce(&criteria)?;
    settings.enforce(&alternatives)?;

    let threshold = settings.consistency_threshold;
    Ok(vec![
        ComparisonReport::from_comparison(&criteria, settings.precision, threshold, Some(1.0)),
        ComparisonReport::from_comparison(
            &alternatives,
            settings.precision,
            threshold,
            criteria.priorities().get(presets::CASE_COMPLEXITY),
        ),
    ])
}

fn serialization_error(e: serde_json::Error) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("Failed to serialize report: {}", e),
    )
}
