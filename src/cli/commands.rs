use crate::config::option_catalog;
use crate::pipeline::plan_from_file;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Command-line interface for the Vert.x generation-model builder.
#[derive(Parser)]
#[command(name = "vertxgen")]
#[command(about = "OpenAPI to Vert.x server generation model", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build the generation plan for a spec and print it as JSON
    Plan {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Generator options as key=value pairs (e.g. useDataObject=true)
        #[arg(short = 'D', long = "option", value_parser = parse_key_val)]
        options: Vec<(String, String)>,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the generator option catalog
    Options,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the OpenAPI spec cannot be loaded or parsed, or if
/// the plan cannot be serialized.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Plan {
            spec,
            options,
            pretty,
        } => {
            let spec_path = spec
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in spec path"))?;
            let raw: BTreeMap<String, String> = options.iter().cloned().collect();
            let plan = plan_from_file(spec_path, &raw)?;
            let rendered = if *pretty {
                serde_json::to_string_pretty(&plan)?
            } else {
                serde_json::to_string(&plan)?
            };
            println!("{rendered}");
            Ok(())
        }
        Commands::Options => {
            for option in option_catalog() {
                let default = option
                    .default
                    .map(|d| format!(" [default: {d}]"))
                    .unwrap_or_default();
                println!("{} ({}): {}{}", option.key, option.kind, option.description, default);
            }
            Ok(())
        }
    }
}
