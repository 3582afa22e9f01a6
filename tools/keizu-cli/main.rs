use clap::{Parser, ValueEnum};
use keizu::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Renders a workflow flow description (JSON) as a DGML diagram.
#[derive(Parser)]
#[command(name = "keizu-cli", version, about)]
struct Cli {
    /// Path to the flow description JSON file
    input: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Dgml)]
    format: OutputFormat,

    /// Write the document to this file instead of stdout
    #[arg(long)]
    output: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Dgml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.input)?;
    let flow: FlowDescription = serde_json::from_str(&json)?;

    let document = GraphProjector::new().project(&flow);

    let rendered = match cli.format {
        OutputFormat::Dgml => document.to_dgml(),
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            eprintln!(
                "Wrote {} nodes, {} links, {} categories to {}",
                document.nodes.len(),
                document.links.len(),
                document.categories.len(),
                path
            );
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}
