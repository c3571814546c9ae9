use anyhow::Context;
use clap::Parser;
use cypher_builder::{
    config::{self, OutputFormat},
    document::QueryDocument,
    Clause,
};
use std::path::PathBuf;

/// cypher-builder - build Cypher queries from YAML/JSON query documents
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query document (YAML, or JSON when the file ends in .json)
    document: PathBuf,

    /// Output format: json, yaml or text
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Print the query text with parameter values inlined (debug only)
    #[arg(long)]
    interpolate: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,

    /// Tool configuration file (YAML); settings otherwise come from CYPHER_BUILDER_* variables
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<&Cli> for config::CliOverrides {
    fn from(cli: &Cli) -> Self {
        config::CliOverrides {
            format: cli.format,
            interpolate: cli.interpolate,
            log_level: cli.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut tool_config = match &cli.config {
        Some(path) => config::ToolConfig::from_yaml_file(path)
            .with_context(|| format!("Configuration error in {}", path.display()))?,
        None => config::ToolConfig::from_env().context("Configuration error")?,
    };
    tool_config.merge((&cli).into());
    let tool_config =
        config::ToolConfig::from_cli(config::CliConfig {
            format: tool_config.format,
            interpolate: tool_config.interpolate,
            log_level: tool_config.log_level,
        })
        .context("Configuration error")?;

    // Defaults to the configured level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(tool_config.log_level.to_lowercase()),
    )
    .init();

    let document = QueryDocument::from_path(&cli.document)
        .with_context(|| format!("Failed to load {}", cli.document.display()))?;
    let query = document.to_query()?;
    log::info!("built query with {} clauses", query.len());

    if tool_config.interpolate {
        println!("{}", query.interpolate());
        return Ok(());
    }

    match tool_config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&query.build_query_object())?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&query.build_query_object())?),
        OutputFormat::Text => println!("{}", query.build()),
    }
    Ok(())
}
