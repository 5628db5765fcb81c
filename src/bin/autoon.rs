//! Command-line front end: convert, validate and visualize graph documents.

use anyhow::{Context, Result};
use autoon::bridge::{self, Format};
use autoon::{Error, GraphType};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autoon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Model class, instance, process and workflow graphs in compact notation")]
#[command(long_about = r#"
Convert graph documents between JSON and the compact notation, check them
against the document schema, and export them as Graphviz DOT.

EXAMPLES:
  autoon generate model.json -o model.toon
  autoon validate workflow.toon --type workflow
  autoon visualize process.json > process.dot

ENVIRONMENT VARIABLES:
  AUTOON_LOG      Log filter (trace, debug, info, warn, error; default: warn)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON to compact notation, or compact notation to JSON
    #[command(visible_aliases = ["gen", "g"])]
    Generate {
        file: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: the other one)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Validate a graph document
    #[command(visible_aliases = ["val", "v"])]
    Validate {
        file: PathBuf,

        /// Warn when the first graph is not of this type
        #[arg(short = 't', long = "type", value_enum)]
        graph_type: Option<GraphTypeArg>,
    },

    /// Export the first graph as Graphviz DOT
    #[command(visible_alias = "viz")]
    Visualize {
        file: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Toon,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toon => Format::Compact,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GraphTypeArg {
    Class,
    Instance,
    Process,
    Workflow,
}

impl From<GraphTypeArg> for GraphType {
    fn from(arg: GraphTypeArg) -> Self {
        match arg {
            GraphTypeArg::Class => GraphType::Class,
            GraphTypeArg::Instance => GraphType::Instance,
            GraphTypeArg::Process => GraphType::Process,
            GraphTypeArg::Workflow => GraphType::Workflow,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AUTOON_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            file,
            output,
            format,
        } => cmd_generate(&file, output.as_deref(), format.map(Format::from)),
        Commands::Validate { file, graph_type } => {
            cmd_validate(&file, graph_type.map(GraphType::from))
        }
        Commands::Visualize { file, output } => cmd_visualize(&file, output.as_deref()),
    }
}

fn read_input(file: &Path) -> Result<(String, Format)> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let format = Format::detect(&content, Some(file));
    tracing::info!(file = %file.display(), %format, "read input");
    Ok((content, format))
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut text = text.to_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Generated: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn cmd_generate(file: &Path, output: Option<&Path>, target: Option<Format>) -> Result<ExitCode> {
    let (content, format) = read_input(file)?;

    match bridge::generate(&content, format, target) {
        Ok(text) => {
            emit(&text, output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Invalid(result)) => {
            eprintln!("Validation errors:");
            for violation in &result.errors {
                eprintln!("  - {}", violation);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).with_context(|| format!("failed to convert {}", file.display())),
    }
}

fn cmd_validate(file: &Path, expected: Option<GraphType>) -> Result<ExitCode> {
    let (content, format) = read_input(file)?;
    let report = bridge::check(&content, format, expected.as_ref())
        .with_context(|| format!("failed to read {}", file.display()))?;

    if !report.is_valid() {
        eprintln!("Invalid document: {}", file.display());
        for violation in &report.result.errors {
            eprintln!("  {}", violation);
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("Valid document: {}", file.display());
    println!("  Type:  {}", report.graph_type.as_deref().unwrap_or("unknown"));
    println!("  Nodes: {}", report.nodes);
    println!("  Edges: {}", report.edges);

    if let (true, Some(expected)) = (report.type_mismatch, expected) {
        println!(
            "Warning: expected type \"{}\" but found \"{}\"",
            expected,
            report.graph_type.as_deref().unwrap_or("unknown")
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_visualize(file: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let (content, format) = read_input(file)?;
    let dot = bridge::visualize(&content, format)
        .with_context(|| format!("failed to visualize {}", file.display()))?;
    emit(&dot, output)?;
    Ok(ExitCode::SUCCESS)
}
