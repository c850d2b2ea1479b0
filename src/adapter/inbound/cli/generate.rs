//! Handler for the `generate` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::GenerateArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunReport, RunRequest, RunStartupSnapshot};

/// Execute the generate command.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(&args.config)?;
    let machine_output = output::is_json();
    let request = build_run_request(args, config_toml, machine_output);
    let service = operator::operator();

    let startup = service.prepare_run(&request)?;
    if !machine_output {
        print_startup_config(&startup);
    }

    let pb = output::spinner("Generating migration dataset");
    let report = match service.execute_run(&request) {
        Ok(report) => report,
        Err(error) => {
            output::spinner_fail(&pb, "Generation failed");
            return Err(error);
        }
    };
    output::spinner_success(
        &pb,
        &format!("Dataset written to {}", report.output_dir),
    );

    if machine_output {
        output::json_output(report_json(&report));
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn build_run_request(
    args: &GenerateArgs,
    config_toml: Option<String>,
    force_json_logs: bool,
) -> RunRequest {
    RunRequest {
        config_toml,
        seed: args.seed,
        projects: args.projects,
        output_dir: args
            .output_dir
            .as_ref()
            .map(|path| path.to_string_lossy().to_string()),
        reference_time: args.reference_time,
        log_level: args.log_level.clone(),
        json_logs: args.json_logs || force_json_logs,
    }
}

/// Print startup configuration using Astral-style output.
fn print_startup_config(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Seed", snapshot.seed);
    output::field("Projects", snapshot.projects);
    output::field("Output", &snapshot.output_dir);
    match snapshot.reference_time {
        Some(now) => output::field("Reference time", now),
        None if output::verbosity() > 0 => output::field("Reference time", "local clock"),
        None => {}
    }
}

fn print_summary(report: &RunReport) {
    output::section("Generated");
    output::field("Migration projects", report.projects);
    output::field("Performance metrics", report.performance_metrics);
    output::field("Cost analysis rows", report.cost_rows);
    output::field("Recommendations", report.recommendations);

    output::section("Catalog");
    output::field("Cloud providers", report.providers.join(", "));
    output::field("Migration strategies", report.strategies.join(", "));
    output::field(
        "Average project cost",
        report
            .average_cost
            .map_or_else(|| "n/a".to_string(), output::usd),
    );

    if output::verbosity() > 0 {
        output::section("Artifacts");
        for artifact in &report.artifacts {
            output::field(
                artifact.name,
                format!(
                    "{} {}",
                    artifact.records,
                    output::muted(&artifact.location)
                ),
            );
        }
    }
}

fn report_json(report: &RunReport) -> serde_json::Value {
    let artifacts: Vec<_> = report
        .artifacts
        .iter()
        .map(|artifact| {
            json!({
                "name": artifact.name,
                "location": artifact.location,
                "records": artifact.records,
            })
        })
        .collect();

    json!({
        "type": "summary",
        "payload": {
            "projects": report.projects,
            "performance_metrics": report.performance_metrics,
            "cost_rows": report.cost_rows,
            "recommendations": report.recommendations,
            "providers": report.providers,
            "strategies": report.strategies,
            "average_cost_usd": report.average_cost,
            "output_dir": report.output_dir,
            "artifacts": artifacts,
        }
    })
}
