//! TEA command line interface
//!
//! `tea evaluate` loads a raw job payload, resolves the selected options
//! and prints the metrics report. `tea schema` prints a template of the
//! normalized project shape.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, Command};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tea_engine::{evaluate, EngineeringContext, GeneralInputs, Selection};
use tea_project::{load_job_file, Project};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("tea")
        .version(tea_engine::VERSION)
        .about("Techno-economic evaluation of configurable energy projects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Evaluate a project design and print its metrics report")
                .arg(
                    Arg::new("job")
                        .long("job")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Raw job payload JSON file"),
                )
                .arg(
                    Arg::new("selections")
                        .long("selections")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Selected options JSON file, a list of {choice, option} pairs"),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Engineering context JSON file with block roles, site and wind data"),
                )
                .arg(
                    Arg::new("inputs")
                        .long("inputs")
                        .value_parser(value_parser!(PathBuf))
                        .help("Financial inputs JSON file, defaults apply when omitted"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the report"),
                ),
        )
        .subcommand(
            Command::new("schema")
                .about("Print a template of the normalized project shape")
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the template"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("evaluate", args)) => {
            let job = args.get_one::<PathBuf>("job").unwrap();
            let selections = args.get_one::<PathBuf>("selections").unwrap();
            let context = args.get_one::<PathBuf>("context").unwrap();
            let inputs = args.get_one::<PathBuf>("inputs");
            run_evaluate(job, selections, context, inputs, args.get_flag("pretty"))
        }
        Some(("schema", args)) => run_schema(args.get_flag("pretty")),
        _ => Ok(()),
    }
}

fn run_evaluate(
    job: &Path,
    selections: &Path,
    context: &Path,
    inputs: Option<&PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let project = load_job_file(job)?;
    tracing::debug!(
        blocks = project.blocks.len(),
        project = %project.project_name,
        "loaded project"
    );

    let selections: Vec<Selection> = read_json(selections)?;
    let context: EngineeringContext = read_json(context)?;
    let general = match inputs {
        Some(path) => read_json(path)?,
        None => GeneralInputs::default(),
    };

    let report = evaluate(&project, &selections, &general, &context)?;
    print_json(&report, pretty)
}

fn run_schema(pretty: bool) -> anyhow::Result<()> {
    let template = Project::schema_template()?;
    print_json(&template, pretty)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
